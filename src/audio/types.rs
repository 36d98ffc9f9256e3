//! Small playback types shared by the sequencer and the UI.

/// What the player is doing, as shown by the play/pause control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing has been selected yet.
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Cursor and state in one value: a cursor only exists once something was
/// selected, and then the player is either playing or paused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(super) enum Cursor {
    #[default]
    Unset,
    Playing(usize),
    Paused(usize),
}

impl Cursor {
    pub(super) fn index(self) -> Option<usize> {
        match self {
            Self::Unset => None,
            Self::Playing(i) | Self::Paused(i) => Some(i),
        }
    }

    pub(super) fn state(self) -> PlaybackState {
        match self {
            Self::Unset => PlaybackState::Idle,
            Self::Playing(_) => PlaybackState::Playing,
            Self::Paused(_) => PlaybackState::Paused,
        }
    }
}
