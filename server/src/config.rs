use std::{env, fmt::Display, str::FromStr};

use anyhow::{Result, anyhow};
use catalog::DEFAULT_CATALOG_PATH;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Local path or `http(s)://` URL of the catalog JSON.
    pub course_data: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "1111")?,
            course_data: try_load(&lookup, "COURSE_DATA", DEFAULT_CATALOG_PATH)?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow!("Environment misconfigured: invalid {key} value: {e}")
        })
}
