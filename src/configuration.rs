use crate::error::ConfigError;
use std::{env, str::FromStr};

/// Defaults for the command-line tool, read from `BASE58_*` environment variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Configuration {
    encoding: String,
    log_interval: usize,
    verbose: bool,
}

fn var_map<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidVariable {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let encoding = lookup("BASE58_ENCODING").unwrap_or_else(|| "flickr".to_string());
        let log_interval = var_map(&lookup, "BASE58_LOG_INTERVAL", 100_000)?;
        if log_interval == 0 {
            return Err(ConfigError::InvalidVariable {
                key: "BASE58_LOG_INTERVAL".to_string(),
                value: log_interval.to_string(),
            });
        }
        let verbose = var_map(&lookup, "BASE58_VERBOSE", false)?;
        Ok(Self {
            encoding,
            log_interval,
            verbose,
        })
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            encoding: "flickr".to_string(),
            log_interval: 100_000,
            verbose: false,
        }
    }
}
