//! Cache configuration
//!
//! Values can be given directly or loaded from environment variables.

use std::env;

use crate::error::{Error, Result};

/// Environment variable read by [`CacheConfig::from_env`]
pub const CAPACITY_ENV: &str = "LRU_CAPACITY";

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 1024;

/// Construction parameters for a cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once, at least 1
    pub capacity: usize,
}

impl CacheConfig {
    /// Config with the given capacity. Not validated until used.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Load from the environment.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Maximum cache entries (default: 1024)
    pub fn from_env() -> Result<Self> {
        let config = match env::var(CAPACITY_ENV) {
            Ok(raw) => {
                let capacity = raw.trim().parse::<usize>().map_err(|e| {
                    Error::InvalidConfiguration(format!("{}={:?}: {}", CAPACITY_ENV, raw, e))
                })?;
                Self::new(capacity)
            }
            Err(_) => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no cache can be built from
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(Error::InvalidConfiguration(format!(
                "capacity must be at least 1, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_zero_capacity_rejected() {
        let err = CacheConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    // Single test touching the variable so parallel tests don't race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var(CAPACITY_ENV);
        assert_eq!(CacheConfig::from_env().unwrap(), CacheConfig::default());

        env::set_var(CAPACITY_ENV, "16");
        assert_eq!(CacheConfig::from_env().unwrap().capacity, 16);

        env::set_var(CAPACITY_ENV, "0");
        assert!(matches!(
            CacheConfig::from_env(),
            Err(Error::InvalidConfiguration(_))
        ));

        env::set_var(CAPACITY_ENV, "lots");
        assert!(matches!(
            CacheConfig::from_env(),
            Err(Error::InvalidConfiguration(_))
        ));

        env::remove_var(CAPACITY_ENV);
    }
}
