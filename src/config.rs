use std::path::PathBuf;

use thiserror::Error;

use crate::player::controller::DEFAULT_ART;

pub const SERVER_ENV: &str = "SONGDECK_SERVER";
pub const PAGE_ENV: &str = "SONGDECK_PAGE";
pub const DEFAULT_ART_ENV: &str = "SONGDECK_DEFAULT_ART";
pub const VOLUME_ENV: &str = "SONGDECK_VOLUME";
pub const SHUFFLE_SEED_ENV: &str = "SONGDECK_SHUFFLE_SEED";

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a number between 0 and 100, got '{1}'")]
    Volume(&'static str, String),

    #[error("{0} must be an unsigned integer, got '{1}'")]
    Seed(&'static str, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: String,
    pub page: Option<PathBuf>,
    pub default_art: String,
    pub volume: u8,
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            page: None,
            default_art: DEFAULT_ART.to_string(),
            volume: 100,
            shuffle_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let volume = match value(VOLUME_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= 100)
                .ok_or(ConfigError::Volume(VOLUME_ENV, raw))?,
            None => defaults.volume,
        };

        let shuffle_seed = match value(SHUFFLE_SEED_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Seed(SHUFFLE_SEED_ENV, raw))?,
            ),
            None => None,
        };

        Ok(Self {
            server: value(SERVER_ENV).unwrap_or(defaults.server),
            page: value(PAGE_ENV).map(PathBuf::from),
            default_art: value(DEFAULT_ART_ENV).unwrap_or(defaults.default_art),
            volume,
            shuffle_seed,
        })
    }
}
