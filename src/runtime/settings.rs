use std::env;
use std::path::{Path, PathBuf};

use crate::config;

/// Load settings, falling back to defaults. The returned message explains a
/// fallback and is logged once the logger is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

/// Pick the directory to scan: command line, then `library.root`, then
/// `~/Music` when it exists, then the current directory.
pub fn resolve_root(cli_dir: Option<&Path>, settings: &config::Settings) -> PathBuf {
    if let Some(dir) = cli_dir {
        return dir.to_path_buf();
    }
    if let Some(root) = &settings.library.root {
        return root.clone();
    }
    if let Some(music) = env::var_os("HOME").map(|h| PathBuf::from(h).join("Music")) {
        if music.is_dir() {
            return music;
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_dir_wins_over_configured_root() {
        let mut settings = config::Settings::default();
        settings.library.root = Some(PathBuf::from("/configured"));

        assert_eq!(
            resolve_root(Some(Path::new("/from/cli")), &settings),
            PathBuf::from("/from/cli")
        );
        assert_eq!(resolve_root(None, &settings), PathBuf::from("/configured"));
    }
}
