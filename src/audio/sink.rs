//! `rodio` implementation of the playback engine.
//!
//! Every voice gets its own `Sink` on the shared output stream; releasing a
//! voice stops its sink before the next one is connected.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::error::{PlayerError, Result};

use super::engine::{AudioBackend, Voice};

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Voice = RodioVoice;

    fn load(&mut self, location: &Path) -> Result<RodioVoice> {
        let file = File::open(location).map_err(|source| PlayerError::Open {
            path: location.to_path_buf(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|source| PlayerError::Decode {
            path: location.to_path_buf(),
            source,
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        Ok(RodioVoice { sink })
    }
}

pub struct RodioVoice {
    sink: Sink,
}

impl Voice for RodioVoice {
    fn start(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn is_finished(&self) -> bool {
        !self.sink.is_paused() && self.sink.empty()
    }

    fn release(self) {
        self.sink.stop();
    }
}
