use crate::geo::LatLng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Search orchestrator endpoint, queried for both the initial load and
    /// filtered searches.
    pub search_url: String,
    /// File-ingestion endpoint.
    pub load_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Initial map center before any search refits the view.
    pub map_center: LatLng,
    pub map_zoom: u8,
}
