use std::fs;
use std::path::Path;

use log::LevelFilter;

use crate::error::Result;

/// Send log records to `path`. The terminal belongs to the UI, so nothing is
/// ever written to stdout/stderr from here.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_creates_parent_dirs_and_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("repro.log");

        init_logger(&path, LevelFilter::Info).unwrap();
        log::info!("hello from the logger test");
        log::debug!("filtered out");
        log::logger().flush();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("hello from the logger test"));
        assert!(!text.contains("filtered out"));
    }
}
