//! Log file location.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "datatable";
const APPLICATION: &str = "datatable";

const LATEST_LOG: &str = "latest.log";
const PREVIOUS_LOG: &str = "previous.log";

/// Directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/datatable` or `~/.cache/datatable`
/// - macOS: `~/Library/Caches/dev.datatable.datatable`
/// - Windows: `C:\Users\<User>\AppData\Local\datatable\datatable\cache`
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Prepares `dir` for a new run and returns the log path to write.
///
/// The previous run's log is kept as `previous.log`; anything older is
/// overwritten.
pub fn prepare_log_file(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        fs::rename(&latest, dir.join(PREVIOUS_LOG))?;
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_keeps_one_previous_log() {
        let dir = std::env::temp_dir().join(format!("datatable-logs-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let first = prepare_log_file(&dir).unwrap();
        fs::write(&first, "run 1").unwrap();

        let second = prepare_log_file(&dir).unwrap();
        assert_eq!(first, second);
        assert!(!second.exists());
        assert_eq!(fs::read_to_string(dir.join(PREVIOUS_LOG)).unwrap(), "run 1");

        let _ = fs::remove_dir_all(&dir);
    }
}
