use std::env;
use std::path::PathBuf;

use anyhow::Result;
use spdlog::debug;

use cosmic_blog::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Explicit path first, then next to the executable, the current directory
/// and the user config dir. No file at all means defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => {
            debug!("No {} found, using defaults", CFG_FILE_NAME);
            return Ok(Config::default());
        }
        Some(x) => x,
    };

    debug!("Reading config from {}", config_path.display());
    let mut config = read_config(&config_path)?;

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir()
                .map(|dir| dir.join("Cosmic").join("log").join("cosmic.log"));
        }
    }

    Ok(config)
}
