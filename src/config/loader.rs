use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::core::ImpactConfig;
use super::validation::validate_config_result;

pub const CONFIG_FILE_NAME: &str = ".mroimpact.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> anyhow::Result<ImpactConfig> {
    let config = toml::from_str::<ImpactConfig>(contents)
        .with_context(|| format!("Failed to parse {CONFIG_FILE_NAME}"))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Try loading config from a specific path, warning on anything but a
/// missing file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ImpactConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{:#}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> ImpactConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ImpactConfig::default()
        })
}

pub fn load_config() -> ImpactConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ImpactConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, any failure
/// is an error.
pub fn load_config_file(path: &Path) -> anyhow::Result<ImpactConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
