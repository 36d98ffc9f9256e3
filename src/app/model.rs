//! Application model: the list selection on top of the sequencer.
//!
//! The highlighted row and the playing track are separate things: moving the
//! highlight never touches playback, and only explicit play commands hand an
//! index to the sequencer.

use std::path::PathBuf;

use log::warn;

use crate::audio::{AudioBackend, PlaybackState, Sequencer};
use crate::error::Result;
use crate::library::Library;

/// The main application model.
pub struct App<B: AudioBackend> {
    pub sequencer: Sequencer<B>,
    pub selected: usize,
    pub follow_playback: bool,
    pub root: PathBuf,
    /// Last error worth showing in the status line.
    pub last_error: Option<String>,
}

impl<B: AudioBackend> App<B> {
    pub fn new(sequencer: Sequencer<B>, root: PathBuf) -> Self {
        Self {
            sequencer,
            selected: 0,
            follow_playback: true,
            root,
            last_error: None,
        }
    }

    pub fn library(&self) -> &Library {
        self.sequencer.library()
    }

    pub fn playback(&self) -> PlaybackState {
        self.sequencer.state()
    }

    /// Transport controls are only usable when there is something to play.
    pub fn has_tracks(&self) -> bool {
        !self.library().is_empty()
    }

    /// Move selection to the next track, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.library().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous track, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.library().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.library().len().saturating_sub(1);
    }

    /// Enable following playback (cursor follows currently playing track).
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }

    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    /// Snap the selection onto the playing track when following playback.
    pub fn sync_selection(&mut self) {
        if !self.follow_playback {
            return;
        }
        if let Some(i) = self.sequencer.cursor() {
            self.selected = i;
        }
    }

    pub fn play_selected(&mut self) -> Result<()> {
        self.follow_playback_on();
        let index = self.selected;
        self.transport(|s| s.select_and_play(index))
    }

    pub fn toggle_play_pause(&mut self) -> Result<()> {
        self.follow_playback_on();
        self.transport(|s| s.toggle_play_pause())
    }

    pub fn advance(&mut self) -> Result<()> {
        self.follow_playback_on();
        self.transport(|s| s.advance())
    }

    pub fn retreat(&mut self) -> Result<()> {
        self.follow_playback_on();
        self.transport(|s| s.retreat())
    }

    /// Forward the engine's completion signal, if any.
    pub fn tick(&mut self) -> Result<()> {
        match self.sequencer.poll_finished() {
            Ok(false) => Ok(()),
            Ok(true) => self.record(Ok(())),
            Err(err) => self.record(Err(err)),
        }
    }

    /// Install a rescanned library; playback stops and the selection resets.
    pub fn replace_library(&mut self, library: Library) {
        self.sequencer.replace_library(library);
        self.selected = 0;
        self.last_error = None;
    }

    fn transport(&mut self, op: impl FnOnce(&mut Sequencer<B>) -> Result<()>) -> Result<()> {
        if !self.has_tracks() {
            // Controls are disabled; nothing to do.
            return Ok(());
        }
        let result = op(&mut self.sequencer);
        self.record(result)
    }

    /// Engine failures are shown and logged, not fatal for the session.
    fn record(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                self.last_error = None;
                self.sync_selection();
                Ok(())
            }
            Err(err) if err.is_engine_failure() => {
                warn!("{err}");
                self.last_error = Some(err.to_string());
                self.sync_selection();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
