use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:144.0) Gecko/20100101 Firefox/144.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
/// Every setting has a default; there are no required env vars.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let endpoint_url = or_default(
        "STOCKWATCH_ENDPOINT_URL",
        "https://api.kmart.com.au/gateway/graphql",
    );
    let user_agent = or_default("STOCKWATCH_USER_AGENT", DEFAULT_USER_AGENT);
    let referer = or_default("STOCKWATCH_REFERER", "https://www.kmart.com.au/");
    let country = or_default("STOCKWATCH_COUNTRY", "AU");
    let skus_path = PathBuf::from(or_default("STOCKWATCH_SKUS_PATH", "./skus.txt"));
    let log_level = or_default("STOCKWATCH_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("STOCKWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_request_delay_ms = parse_u64("STOCKWATCH_INTER_REQUEST_DELAY_MS", "1000")?;
    let cnc_location_limit = parse_u32("STOCKWATCH_CNC_LOCATION_LIMIT", "3")?;

    Ok(AppConfig {
        endpoint_url,
        user_agent,
        referer,
        country,
        skus_path,
        log_level,
        request_timeout_secs,
        inter_request_delay_ms,
        cnc_location_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
