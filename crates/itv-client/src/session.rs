//! Client session: owns the displayed stations, the map, and the active tab,
//! and turns search outcomes into user-facing notices.

use std::fmt;

use itv_core::{SearchCriteria, StationCollection};
use serde::Serialize;

use crate::error::ClientError;
use crate::map::{MapSynchronizer, MapView};
use crate::search::{SearchClient, SearchOutcome};

/// Top-level panes of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Tab {
    #[default]
    Map,
    Search,
    Load,
    Docs,
}

/// A request to switch panes, carrying its target explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEvent {
    pub target: Tab,
}

impl TabEvent {
    #[must_use]
    pub fn new(target: Tab) -> Self {
        Self { target }
    }
}

/// What the user is told after a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    Results { shown: usize, total: usize },
    /// The service is reachable but has no data loaded.
    NoData,
    /// The service answered with an error; the message is the server's.
    ApplicationError(String),
    /// The service could not be reached or did not answer usably.
    Connectivity(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Results { shown, total } if shown < total => {
                write!(f, "showing {shown} of {total} stations")
            }
            Notice::Results { shown, .. } => write!(f, "{shown} stations found"),
            Notice::NoData => f.write_str("no station data has been loaded yet"),
            Notice::ApplicationError(message) => write!(f, "search failed: {message}"),
            Notice::Connectivity(message) => write!(f, "could not reach search service: {message}"),
        }
    }
}

/// Everything the client displays.
pub struct ClientState<V: MapView> {
    pub map: MapSynchronizer<V>,
    pub stations: StationCollection,
    pub active_tab: Tab,
}

impl<V: MapView> ClientState<V> {
    #[must_use]
    pub fn new(map: MapSynchronizer<V>) -> Self {
        Self {
            map,
            stations: StationCollection::empty(),
            active_tab: Tab::default(),
        }
    }

    fn show_results(&mut self, stations: StationCollection) {
        self.map.replace(&stations);
        self.stations = stations;
    }
}

pub struct Session<V: MapView> {
    client: SearchClient,
    state: ClientState<V>,
}

impl<V: MapView> Session<V> {
    #[must_use]
    pub fn new(client: SearchClient, map: MapSynchronizer<V>) -> Self {
        Self {
            client,
            state: ClientState::new(map),
        }
    }

    /// Loads every station and draws the overview map.
    ///
    /// Failures are logged and leave the map empty; the session stays usable.
    /// Returns the number of markers placed.
    pub async fn start(&mut self) -> usize {
        let stations = match self.client.load_all().await {
            Ok(outcome) => outcome.into_stations(),
            Err(e) => {
                tracing::warn!(error = %e, "initial station load failed");
                StationCollection::empty()
            }
        };
        let placed = self.state.map.render(&stations);
        self.state.stations = stations;
        placed
    }

    /// Runs a search and updates the stations and map to match.
    ///
    /// A connectivity failure leaves the current display untouched; every
    /// other failure clears it.
    pub async fn submit_search(&mut self, criteria: &SearchCriteria) -> Notice {
        match self.client.search(criteria).await {
            Ok(SearchOutcome::Found(stations)) => {
                let notice = Notice::Results {
                    shown: stations.len(),
                    total: stations.total(),
                };
                self.state.show_results(stations);
                notice
            }
            Ok(SearchOutcome::EmptyDataset) => {
                self.state.show_results(StationCollection::empty());
                Notice::NoData
            }
            Err(e) if e.is_connectivity() => {
                tracing::warn!(error = %e, "search request failed");
                Notice::Connectivity(e.to_string())
            }
            Err(ClientError::Application(message)) => {
                self.state.show_results(StationCollection::empty());
                Notice::ApplicationError(message)
            }
            Err(e) => {
                self.state.show_results(StationCollection::empty());
                Notice::ApplicationError(e.to_string())
            }
        }
    }

    pub fn show_tab(&mut self, event: &TabEvent) {
        tracing::debug!(from = ?self.state.active_tab, to = ?event.target, "switching tab");
        self.state.active_tab = event.target;
    }

    #[must_use]
    pub fn state(&self) -> &ClientState<V> {
        &self.state
    }
}
