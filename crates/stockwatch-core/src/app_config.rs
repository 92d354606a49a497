use std::path::PathBuf;

/// Immutable run-wide settings, built once at startup.
///
/// Replaces ad-hoc globals: the endpoint, headers, pacing, and input path all
/// live here and never change for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// GraphQL gateway the availability query is POSTed to.
    pub endpoint_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// `Referer` header sent with every request.
    pub referer: String,
    /// Two-letter country code included in the query input.
    pub country: String,
    /// Path to the SKU list, one keycode per line.
    pub skus_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Fixed pause between consecutive SKU queries. Not adaptive.
    pub inter_request_delay_ms: u64,
    /// Maximum click-and-collect locations requested per SKU.
    pub cnc_location_limit: u32,
}
