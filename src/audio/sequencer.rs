//! The playback sequencer: a cursor over a fixed library driving one voice.
//!
//! All methods are synchronous and meant to be called from a single event
//! loop. Every operation other than construction needs a non-empty library;
//! on an empty one they return [`PlayerError::InvalidIndex`] and change nothing.

use log::{info, warn};

use crate::error::{PlayerError, Result};
use crate::library::{Library, Track};

use super::engine::{AudioBackend, Voice};
use super::types::{Cursor, PlaybackState};

pub struct Sequencer<B: AudioBackend> {
    backend: B,
    library: Library,
    cursor: Cursor,
    voice: Option<B::Voice>,
}

impl<B: AudioBackend> Sequencer<B> {
    pub fn new(backend: B, library: Library) -> Self {
        Self {
            backend,
            library,
            cursor: Cursor::Unset,
            voice: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Index of the selected track, `None` while idle.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn state(&self) -> PlaybackState {
        self.cursor.state()
    }

    /// The selected track, if any.
    pub fn current(&self) -> Option<&Track> {
        self.cursor().and_then(|i| self.library.get(i))
    }

    /// Load and start the track at `index`.
    ///
    /// The previous voice is released before the new one is loaded, so at most
    /// one voice is ever alive. If loading fails the cursor still moves to
    /// `index` but the player is left paused without a voice; toggling play
    /// retries the same track.
    pub fn select_and_play(&mut self, index: usize) -> Result<()> {
        let len = self.library.len();
        let Some(track) = self.library.get(index) else {
            return Err(PlayerError::InvalidIndex { index, len });
        };
        let location = track.location.clone();

        if let Some(old) = self.voice.take() {
            old.release();
        }

        match self.backend.load(&location) {
            Ok(mut voice) => {
                voice.start();
                self.voice = Some(voice);
                self.cursor = Cursor::Playing(index);
                info!("playing [{}/{}] {:?}", index + 1, len, location);
                Ok(())
            }
            Err(err) => {
                self.cursor = Cursor::Paused(index);
                warn!("cannot play {:?}: {err}", location);
                Err(err)
            }
        }
    }

    /// Pause when playing, resume when paused, start the first track when idle.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.cursor {
            Cursor::Unset => self.select_and_play(0),
            Cursor::Playing(i) => {
                if let Some(voice) = self.voice.as_mut() {
                    voice.pause();
                }
                self.cursor = Cursor::Paused(i);
                Ok(())
            }
            Cursor::Paused(i) => match self.voice.as_mut() {
                Some(voice) => {
                    voice.resume();
                    self.cursor = Cursor::Playing(i);
                    Ok(())
                }
                None => self.select_and_play(i),
            },
        }
    }

    /// Play the next track, wrapping from the last to the first.
    pub fn advance(&mut self) -> Result<()> {
        match self.cursor.index() {
            None => self.select_and_play(0),
            Some(i) => self.select_and_play((i + 1) % self.library.len()),
        }
    }

    /// Play the previous track, wrapping from the first to the last.
    pub fn retreat(&mut self) -> Result<()> {
        match self.cursor.index() {
            None => self.select_and_play(0),
            Some(i) => {
                let len = self.library.len();
                self.select_and_play((i + len - 1) % len)
            }
        }
    }

    /// The current track played to the end.
    pub fn on_track_finished(&mut self) -> Result<()> {
        self.advance()
    }

    /// Deliver the voice's completion signal, if it fired. Returns `Ok(true)`
    /// when the sequencer moved on because of it.
    pub fn poll_finished(&mut self) -> Result<bool> {
        let finished = matches!(self.cursor, Cursor::Playing(_))
            && self.voice.as_ref().is_some_and(|v| v.is_finished());
        if !finished {
            return Ok(false);
        }
        self.on_track_finished()?;
        Ok(true)
    }

    /// Swap in a freshly scanned library and go back to idle.
    pub fn replace_library(&mut self, library: Library) {
        self.shutdown();
        self.library = library;
    }

    /// Release the voice and go back to idle.
    pub fn shutdown(&mut self) {
        if let Some(voice) = self.voice.take() {
            voice.release();
        }
        self.cursor = Cursor::Unset;
    }
}
