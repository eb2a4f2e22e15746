use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{MeetiqConfig, RiskConfig};
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".meetiq.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, repairing invalid risk settings
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<MeetiqConfig, String> {
    let mut config = toml::from_str::<MeetiqConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.risk.validate() {
        log::warn!("Invalid risk settings: {}. Using defaults.", e);
        config.risk = RiskConfig::default();
    }

    if config.heatmap.max_cost_threshold < config.heatmap.min_cost_threshold {
        log::warn!(
            "heatmap.max_cost_threshold ({}) is below min_cost_threshold ({})",
            config.heatmap.max_cost_threshold,
            config.heatmap.min_cost_threshold
        );
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MeetiqConfig> {
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
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries
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

/// Search the current directory and its ancestors for `.meetiq.toml`.
pub fn load_config() -> MeetiqConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return MeetiqConfig::default();
        }
    };

    load_config_near(current)
}

pub(crate) fn load_config_near(start: PathBuf) -> MeetiqConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MeetiqConfig::default()
        })
}

/// Load an explicitly named config file. Unlike [`load_config`], failures are errors.
pub fn load_config_from(path: &Path) -> Result<MeetiqConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::configuration(format!("cannot read: {e}"), path))?;
    parse_and_validate_config(&contents).map_err(|e| Error::configuration(e, path))
}
