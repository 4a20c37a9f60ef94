//! Response bodies of the search orchestrator and the load service.
//!
//! Both services wrap every answer in a `{"status": ..., ...}` envelope. Field
//! names are the services' own (Spanish for the load report).

use serde::Deserialize;

use crate::normalize::RawRecord;

/// Status of a search that matched data.
pub const STATUS_SUCCESS: &str = "success";
/// Status of a reachable orchestrator with no data loaded.
pub const STATUS_OK: &str = "ok";

/// Body of `GET <search endpoint>`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Empty when the service omits it, which classifies as an error.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Option<Vec<RawRecord>>,
    #[serde(default)]
    pub message: Option<String>,
    /// Match count before the service's own truncation.
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// Body of `POST <load endpoint>`.
#[derive(Debug, Deserialize)]
pub struct LoadResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fuente: Option<String>,
    #[serde(default)]
    pub registros_ok: u64,
    #[serde(default)]
    pub registros_reparados: u64,
    #[serde(default)]
    pub registros_rechazados: u64,
    #[serde(default)]
    pub detalles_reparados: Vec<String>,
    #[serde(default)]
    pub detalles_rechazados: Vec<String>,
    #[serde(default)]
    pub log_completo: Option<String>,
}
