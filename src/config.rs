//! Build-time Configuration
//!
//! Values are baked in at compile time (`trunk build` passes the
//! environment through), each falling back to a default.

use std::fmt::Display;
use std::str::FromStr;

use dog_api::{ApiConfig, DEFAULT_BASE_URL};
use log::{info, warn, LevelFilter};

/// Runtime settings of the app
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        let base_url: String = try_load(
            "DOG_API_BASE_URL",
            option_env!("DOG_API_BASE_URL"),
            DEFAULT_BASE_URL.to_string(),
        );
        info!("Dog service at {}", base_url);
        Self {
            api: ApiConfig::new(base_url),
        }
    }
}

/// Console log level. Read before the logger exists, so nothing is logged here.
pub fn log_level() -> LevelFilter {
    option_env!("DOG_MATCH_LOG_LEVEL")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn try_load<T: FromStr>(key: &str, raw: Option<&str>, default: T) -> T
where
    T::Err: Display,
{
    match raw {
        None => {
            info!("{key} not set, using default");
            default
        }
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_default_when_unset() {
        assert_eq!(try_load::<u32>("PAGE", None, 12), 12);
    }

    #[test]
    fn test_try_load_parses_value() {
        assert_eq!(try_load::<u32>("PAGE", Some("24"), 12), 24);
    }

    #[test]
    fn test_try_load_invalid_falls_back() {
        assert_eq!(try_load::<u32>("PAGE", Some("many"), 12), 12);
    }
}
