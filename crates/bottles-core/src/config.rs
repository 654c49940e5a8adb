use std::collections::BTreeMap;

use crate::app_config::{AppConfig, CatalogBackend, Environment};
use crate::traits::Color;
use crate::ConfigError;

/// Silver caps on fused products fall back to the chrome sprayer, whose name
/// carries no color keyword.
pub const DEFAULT_SILVER_FALLBACK_FITMENT: &str = "fitment-sprayer-chrome";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("BOTTLES_ENV", "development"))?;
    let log_level = or_default("BOTTLES_LOG_LEVEL", "info");

    // A fixture path wins over the remote catalog so local runs never need
    // CMS credentials.
    let catalog = if let Ok(path) = lookup("BOTTLES_CATALOG_FIXTURE") {
        CatalogBackend::Fixture(PathBuf::from(path))
    } else {
        let base_url = lookup("BOTTLES_CATALOG_URL").map_err(|_| {
            ConfigError::MissingEnvVar(
                "BOTTLES_CATALOG_URL or BOTTLES_CATALOG_FIXTURE".to_string(),
            )
        })?;
        CatalogBackend::Remote {
            base_url,
            dataset: or_default("BOTTLES_CATALOG_DATASET", "production"),
            api_version: or_default("BOTTLES_CATALOG_API_VERSION", "2024-01-01"),
            token: lookup("BOTTLES_CATALOG_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    };

    let catalog_request_timeout_secs = parse_u64("BOTTLES_CATALOG_REQUEST_TIMEOUT_SECS", "15")?;
    let catalog_user_agent = or_default(
        "BOTTLES_CATALOG_USER_AGENT",
        "bestbottles/0.1 (configurator)",
    );
    let currency_code = or_default("BOTTLES_CURRENCY", "USD");
    let canvas_size = parse_u32("BOTTLES_CANVAS_SIZE", "1000")?;
    if canvas_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BOTTLES_CANVAS_SIZE".to_string(),
            reason: "canvas size must be greater than zero".to_string(),
        });
    }
    let automatch_fallbacks = parse_automatch_fallbacks(&or_default(
        "BOTTLES_AUTOMATCH_FALLBACKS",
        &format!("silver={DEFAULT_SILVER_FALLBACK_FITMENT}"),
    ))?;

    Ok(AppConfig {
        env,
        log_level,
        catalog,
        catalog_request_timeout_secs,
        catalog_user_agent,
        currency_code,
        canvas_size,
        automatch_fallbacks,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BOTTLES_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse `color=fitment-id` pairs separated by commas, e.g.
/// `"silver=fitment-sprayer-chrome,gold=fitment-sprayer-brass"`.
///
/// An empty string disables all fallbacks.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for malformed pairs or unknown colors.
fn parse_automatch_fallbacks(raw: &str) -> Result<BTreeMap<Color, String>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "BOTTLES_AUTOMATCH_FALLBACKS".to_string(),
        reason,
    };

    let mut fallbacks = BTreeMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (color, fitment_id) = pair
            .split_once('=')
            .ok_or_else(|| invalid(format!("expected color=fitment-id, got '{pair}'")))?;
        let color = Color::parse_keyword(color)
            .ok_or_else(|| invalid(format!("unknown color '{}'", color.trim())))?;
        let fitment_id = fitment_id.trim();
        if fitment_id.is_empty() {
            return Err(invalid(format!("empty fitment id for {color}")));
        }
        fallbacks.insert(color, fitment_id.to_string());
    }
    Ok(fallbacks)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
