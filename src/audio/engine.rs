use std::path::Path;

use crate::error::Result;

/// Something that can turn a file into a playing voice.
pub trait AudioBackend {
    type Voice: Voice;

    /// Open and decode `location`. The returned voice is loaded but silent
    /// until [`Voice::start`].
    fn load(&mut self, location: &Path) -> Result<Self::Voice>;
}

/// One loaded track on the output.
pub trait Voice {
    fn start(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);

    /// Completion signal: true once a started, unpaused voice has played to
    /// the end.
    fn is_finished(&self) -> bool;

    /// Stop and free the voice.
    fn release(self);
}
