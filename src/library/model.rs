use std::path::{Path, PathBuf};

/// One discovered audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Base name of the file, extension included. This is what the list shows.
    pub display_name: String,
    /// Absolute path used to open the file for playback.
    pub location: PathBuf,
}

impl Track {
    pub fn new(location: &Path) -> Self {
        let display_name = location
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.display().to_string());

        Self {
            display_name,
            location: location.to_path_buf(),
        }
    }
}

/// The tracks of one scan, sorted by display name.
///
/// A library is never edited; a rescan builds a new one.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Track>,
}

impl Library {
    /// Sort scanner output into a library. Equal names are ordered by location
    /// so two scans of the same tree always agree.
    pub fn from_scan(mut tracks: Vec<Track>) -> Self {
        tracks.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.location.cmp(&b.location))
        });
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
