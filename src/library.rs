//! Music library: discovering `.mp3` files under a storage root and keeping
//! them as a sorted, immutable [`Library`].

mod model;
mod permission;
mod scan;

pub use model::{Library, Track};
pub use permission::{FsGate, Grant, StorageGate, load_library};
