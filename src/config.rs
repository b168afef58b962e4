/// Manages the configuration; related tools.
use crate::types::*;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Where the config lives if `--config` wasn't given. None without a $HOME.
pub fn calc_config_file() -> Option<PathBuf> {
    let mut homedir = dirs::home_dir()?;
    homedir.push(".html2flash");
    homedir.push("config.ron");
    Some(homedir)
}

pub fn parse_config(cfgstr: &str) -> Result<Config> {
    let cfg: Config = ron::de::from_str(cfgstr)?;
    Ok(cfg)
}

fn read_config(cfgpath: &Path) -> Result<Config> {
    let cfgfile = std::fs::read_to_string(cfgpath)
        .with_context(|| format!("Failed to read config file {:?}", cfgpath))?;
    parse_config(&cfgfile).with_context(|| format!("Failed to parse config file {:?}", cfgpath))
}

/// An explicit path has to exist; the default one is optional and we never
/// create it.
pub fn load_config(cfgpath: Option<PathBuf>) -> Result<Config> {
    match cfgpath {
        Some(cfgpath) => read_config(&cfgpath),
        None => match calc_config_file() {
            Some(cfgpath) if cfgpath.is_file() => read_config(&cfgpath),
            _ => {
                debug!("No config file, using defaults.");
                Ok(Config::default())
            }
        },
    }
}
