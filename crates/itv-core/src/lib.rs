//! Shared domain types and configuration for the ITV station client.
//!
//! Everything downstream (normalizer, map synchronizer, CLI) speaks in terms
//! of the canonical [`Station`] defined here, regardless of which regional
//! provider a record came from.

pub mod app_config;
pub mod config;
pub mod criteria;
pub mod geo;
pub mod region;
pub mod station;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::SearchCriteria;
pub use geo::LatLng;
pub use region::Region;
pub use station::{Station, StationCollection, DEFAULT_KIND, NOT_AVAILABLE, RESULT_CAP};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
