use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::render::RenderOptions;

#[derive(Deserialize, Default)]
pub struct Render {
    pub no_content_text: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct Paths {
    pub categories_file: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    pub render: Option<Render>,
    pub paths: Option<Paths>,
    pub log: Option<Log>,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        let no_content_text = self.render.as_ref()
            .and_then(|render| render.no_content_text.clone());
        match no_content_text {
            Some(no_content_text) => RenderOptions { no_content_text },
            None => RenderOptions::default(),
        }
    }

    pub fn categories_file(&self) -> Option<&Path> {
        self.paths.as_ref()
            .and_then(|paths| paths.categories_file.as_deref())
    }
}

fn parse_path(path: PathBuf) -> Result<PathBuf> {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().context("Unable to locate the current executable")?;
        let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
        let str_path = path.to_string_lossy();
        Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
    } else {
        Ok(path)
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content).context("Error parsing configuration file")?;

    if let Some(ref mut paths) = cfg.paths {
        if let Some(categories_file) = paths.categories_file.take() {
            paths.categories_file = Some(parse_path(categories_file)?);
        }
    }

    if let Some(ref mut log) = cfg.log {
        if let Some(location) = log.location.take() {
            log.location = Some(parse_path(location)?);
        }
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path)
        .with_context(|| format!("Error opening configuration file {}", cfg_path.display()))?;

    parse_config(&cfg_content)
}
