use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::SumbenchError;
use crate::types::TimingMode;

pub const DEFAULT_SIZE: usize = 1000;
pub const DEFAULT_ITERATIONS: usize = 10;

/// Values read from `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub size: Option<usize>,
    pub iterations: Option<usize>,
    pub timing: Option<TimingMode>,
}

/// Settings after merging CLI arguments over the config file over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub iterations: usize,
    pub timing: TimingMode,
}

/// `<config dir>/sumbench/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sumbench").join("config.toml"))
}

pub fn parse_config(text: &str, path: &Path) -> Result<FileConfig, SumbenchError> {
    toml::from_str(text).map_err(|e| SumbenchError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.message().to_string(),
    })
}

/// Loads the config file.
///
/// An explicitly requested file must exist. The default location is allowed
/// to be absent, in which case an empty config is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, SumbenchError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(FileConfig::default()),
        },
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            return Ok(FileConfig::default());
        }
        Err(source) => return Err(SumbenchError::ConfigRead { path, source }),
    };

    debug!(path = %path.display(), "loaded config file");
    parse_config(&text, &path)
}

impl Settings {
    pub fn resolve(
        file: &FileConfig,
        size: Option<usize>,
        iterations: Option<usize>,
        timing: Option<TimingMode>,
    ) -> Self {
        Settings {
            size: size.or(file.size).unwrap_or(DEFAULT_SIZE),
            iterations: iterations.or(file.iterations).unwrap_or(DEFAULT_ITERATIONS),
            timing: timing.or(file.timing).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn path() -> PathBuf {
        PathBuf::from("/tmp/config.toml")
    }

    #[test]
    fn parse_full_config() {
        let cfg = parse_config("size = 5\niterations = 3\ntiming = \"last\"\n", &path()).unwrap();
        assert_eq!(cfg.size, Some(5));
        assert_eq!(cfg.iterations, Some(3));
        assert_eq!(cfg.timing, Some(TimingMode::Last));
    }

    #[test]
    fn parse_empty_config() {
        assert_eq!(parse_config("", &path()).unwrap(), FileConfig::default());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse_config("sizes = 5\n", &path()).unwrap_err();
        assert!(matches!(err, SumbenchError::ConfigParse { .. }));
    }

    #[test]
    fn parse_rejects_negative_size() {
        let err = parse_config("size = -1\n", &path()).unwrap_err();
        assert!(matches!(err, SumbenchError::ConfigParse { .. }));
    }

    #[test]
    fn parse_rejects_bad_timing() {
        let err = parse_config("timing = \"median\"\n", &path()).unwrap_err();
        assert!(matches!(err, SumbenchError::ConfigParse { .. }));
    }

    #[test]
    fn resolve_defaults() {
        let s = Settings::resolve(&FileConfig::default(), None, None, None);
        assert_eq!(s.size, DEFAULT_SIZE);
        assert_eq!(s.iterations, DEFAULT_ITERATIONS);
        assert_eq!(s.timing, TimingMode::Mean);
    }

    #[test]
    fn resolve_file_over_defaults() {
        let file = FileConfig {
            size: Some(42),
            iterations: Some(7),
            timing: Some(TimingMode::Last),
        };
        let s = Settings::resolve(&file, None, None, None);
        assert_eq!(s.size, 42);
        assert_eq!(s.iterations, 7);
        assert_eq!(s.timing, TimingMode::Last);
    }

    #[test]
    fn resolve_cli_over_file() {
        let file = FileConfig {
            size: Some(42),
            iterations: Some(7),
            timing: Some(TimingMode::Last),
        };
        let s = Settings::resolve(&file, Some(5), Some(2), Some(TimingMode::Mean));
        assert_eq!(s.size, 5);
        assert_eq!(s.iterations, 2);
        assert_eq!(s.timing, TimingMode::Mean);
    }

    #[test]
    fn load_explicit_file() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("bench.toml");
        file.write_str("size = 12\n").unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.size, Some(12));
        assert_eq!(cfg.iterations, None);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, SumbenchError::ConfigRead { .. }));
    }
}
