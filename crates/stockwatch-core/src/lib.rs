pub mod app_config;
pub mod config;
pub mod skus;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use skus::load_skus;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("cannot read SKU list \"{path}\": {source}")]
    SkuFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
