//! Locating and reading the CLI's TOML configuration.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use mindgraph::{MindgraphError, config::AppConfig};

/// Project-local configuration file, relative to the working directory.
const LOCAL_CONFIG: &str = "mindgraph/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for MindgraphError {
    fn from(err: ConfigError) -> Self {
        MindgraphError::Io(io::Error::other(err))
    }
}

/// Load the configuration for this run.
///
/// An explicit path must exist. Otherwise the first existing file among
/// `mindgraph/config.toml` and `<platform config dir>/config.toml` is used,
/// and the defaults apply when neither exists.
///
/// # Errors
///
/// Returns an error if the explicit file is missing or if the chosen file
/// cannot be read or parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MindgraphError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match discovered_config() {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn discovered_config() -> Option<PathBuf> {
    let platform = ProjectDirs::from("com", "mindgraph", "mindgraph")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if platform.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    [Some(PathBuf::from(LOCAL_CONFIG)), platform]
        .into_iter()
        .flatten()
        .find(|candidate| {
            let found = candidate.is_file();
            debug!(path = candidate.display().to_string(), found; "Checked configuration candidate");
            found
        })
}

fn read_config(path: &Path) -> Result<AppConfig, MindgraphError> {
    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_explicit_file() {
        let (_dir, path) = write_config("[pipeline]\ndebounce_ms = 100\n\n[export]\njson_filename = \"map.json\"\n");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.pipeline().debounce(), Duration::from_millis(100));
        assert_eq!(config.export().json_filename(), "map.json");
        assert!(config.markdown().unwrap_single_root());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml"))).unwrap_err();

        assert!(matches!(err, MindgraphError::Io(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_invalid_toml() {
        let (_dir, path) = write_config("[pipeline]\ndebounce_ms = \"soon\"\n");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }
}
