//! Playback: the engine seam, its `rodio` implementation and the sequencer
//! that walks the library.

mod engine;
mod sequencer;
mod sink;
mod types;

pub use engine::AudioBackend;
pub use sequencer::Sequencer;
pub use sink::RodioBackend;
pub use types::PlaybackState;

#[cfg(test)]
pub(crate) mod fake;
