//! Locating `.gh-commit-viewer.toml`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory and in `$HOME`
pub const CONFIG_FILE: &str = ".gh-commit-viewer.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Read the first config file present: `./.gh-commit-viewer.toml`, then
/// `$HOME/.gh-commit-viewer.toml`.
pub fn load_config_file() -> Option<ConfigFile> {
    first_readable(&candidate_paths(std::env::var_os("HOME")))
}

/// Lookup order for the config file
fn candidate_paths(home: Option<OsString>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = home {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}

fn first_readable(paths: &[PathBuf]) -> Option<ConfigFile> {
    paths.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigFile {
            path: path.to_path_buf(),
            content,
        }),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}
