//! Storage read permission, checked before any scan.

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

use crate::config::LibrarySettings;
use crate::error::{PlayerError, Result};

use super::model::Library;
use super::scan::scan;

/// Answer to a permission request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Grant {
    Granted,
    Denied,
}

/// Whoever decides whether the player may read the storage root.
pub trait StorageGate {
    fn has_read_permission(&self, root: &Path) -> bool;

    /// Ask for access. Platforms with a prompt show it here; the answer is
    /// final for this session.
    fn request_read_permission(&mut self, root: &Path) -> Grant;
}

/// Desktop gate: access is granted when the root directory can be listed.
#[derive(Debug, Default)]
pub struct FsGate;

impl StorageGate for FsGate {
    fn has_read_permission(&self, root: &Path) -> bool {
        fs::read_dir(root).is_ok()
    }

    fn request_read_permission(&mut self, root: &Path) -> Grant {
        // There is nobody to ask on a desktop; look once more and report.
        match fs::read_dir(root) {
            Ok(_) => Grant::Granted,
            Err(err) => {
                warn!("cannot read {:?} ({:?}): {err}", root, err.kind());
                Grant::Denied
            }
        }
    }
}

/// Check the gate, asking for permission if needed, then scan `root` and sort
/// the result into a [`Library`].
///
/// An empty library is a normal outcome, not an error.
pub fn load_library<G: StorageGate>(
    gate: &mut G,
    root: &Path,
    settings: &LibrarySettings,
) -> Result<Library> {
    if !gate.has_read_permission(root) {
        info!("requesting read permission for {:?}", root);
        if gate.request_read_permission(root) == Grant::Denied {
            return Err(denial(root));
        }
    }

    Ok(Library::from_scan(scan(root, settings)))
}

/// Name the reason for a denied root: a path that does not exist or is not a
/// directory is reported as such, anything else as a permission problem.
fn denial(root: &Path) -> PlayerError {
    let root_buf = root.to_path_buf();
    match fs::metadata(root) {
        Err(source) if source.kind() == io::ErrorKind::NotFound => PlayerError::RootUnavailable {
            root: root_buf,
            source,
        },
        Ok(meta) if !meta.is_dir() => PlayerError::RootUnavailable {
            root: root_buf,
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        },
        _ => PlayerError::PermissionDenied { root: root_buf },
    }
}
