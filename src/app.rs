//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the sequencer, the list
//! selection and the last error shown to the user.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
