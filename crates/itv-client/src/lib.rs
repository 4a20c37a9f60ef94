//! Client-side pipeline for the ITV station services: record normalization,
//! coordinate resolution, map synchronization, and the search and load
//! HTTP clients.

pub mod coords;
pub mod error;
pub mod headless;
mod http;
pub mod load;
pub mod map;
pub mod normalize;
pub mod search;
pub mod session;
pub mod types;

pub use coords::{resolve_coordinate, CoordinateInput};
pub use error::ClientError;
pub use headless::HeadlessMap;
pub use load::{LoadClient, LoadReport, Upload};
pub use map::{LatLngBounds, MapSynchronizer, MapView, Marker, MarkerId, MarkerStyle, Viewport};
pub use normalize::{detect_region, normalize, normalize_all, RawRecord};
pub use search::{SearchClient, SearchOutcome};
pub use session::{ClientState, Notice, Session, Tab, TabEvent};
