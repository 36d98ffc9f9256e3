//! Crate-wide error type.
//!
//! Scan failures inside a subtree never show up here: the scanner swallows
//! them and keeps walking. Everything else the player can trip over does.

use std::path::PathBuf;

/// Result alias carrying [`PlayerError`].
pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The storage root cannot be read; nothing useful can happen without it.
    #[error("read permission denied for {}", root.display())]
    PermissionDenied { root: PathBuf },

    /// The storage root is missing or is not a directory.
    #[error("cannot use {} as the music root: {source}", root.display())]
    RootUnavailable {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A transport call named a track outside the library.
    #[error("track index {index} is out of range for a library of {len} track(s)")]
    InvalidIndex { index: usize, len: usize },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// No audio output device could be opened.
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to install logger: {0}")]
    Log(#[from] log::SetLoggerError),
}

impl PlayerError {
    /// Whether this error came from the playback engine rather than the caller.
    pub fn is_engine_failure(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Decode { .. })
    }
}
