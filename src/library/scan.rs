use std::path::{self, Path};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

const SUFFIX: &str = ".mp3";

/// True when the file name ends in `.mp3`, in any letter case. A file named
/// just `.mp3` counts too.
pub fn is_mp3(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(SUFFIX))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` depth-first and collect every `.mp3` file under it.
///
/// The result is unsorted; see [`super::Library::from_scan`]. A directory that
/// cannot be listed contributes nothing and the walk carries on with its
/// siblings. With `follow_links` on, a link back to one of its own ancestors is
/// skipped instead of walked again.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let root = path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut tracks: Vec<Track> = Vec::new();
    let mut skipped = 0usize;

    let mut walker = WalkDir::new(&root).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                skipped += 1;
                match err.loop_ancestor() {
                    Some(ancestor) => debug!(
                        "skipping symlink loop at {:?} (back to {:?})",
                        err.path(),
                        ancestor
                    ),
                    None => debug!("skipping unreadable entry: {err}"),
                }
                continue;
            }
        };

        if entry.file_type().is_file() && is_mp3(entry.path()) {
            tracks.push(Track::new(entry.path()));
        }
    }

    info!(
        "scanned {:?}: {} track(s), {} entr{} skipped",
        root,
        tracks.len(),
        skipped,
        if skipped == 1 { "y" } else { "ies" }
    );
    tracks
}
