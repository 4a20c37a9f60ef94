//! `stations` and `search` command handlers.

use itv_client::{
    HeadlessMap, MapSynchronizer, Notice, SearchClient, Session, Tab, TabEvent, Viewport,
};
use itv_core::{AppConfig, Region, SearchCriteria, Station, StationCollection};

const NAME_WIDTH: usize = 32;
const ADDRESS_WIDTH: usize = 30;
const LOCALITY_WIDTH: usize = 20;
/// Region column value for records that carry no regional schema.
const NO_REGION: &str = "-";

fn open_session(config: &AppConfig) -> anyhow::Result<Session<HeadlessMap>> {
    let client = SearchClient::new(config)?;
    let map = MapSynchronizer::new(HeadlessMap::new(), config.map_center, config.map_zoom);
    Ok(Session::new(client, map))
}

/// Load every station and print the overview.
///
/// An unreachable search service is reported as an empty overview, matching
/// the session's startup behaviour.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON output fails.
pub(crate) async fn run_stations(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let mut session = open_session(config)?;
    session.show_tab(&TabEvent::new(Tab::Map));
    session.start().await;

    print_state(&session, json)
}

/// Run a filtered search and print the results.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the search service
/// is unreachable, or JSON output fails.
pub(crate) async fn run_search(
    config: &AppConfig,
    criteria: &SearchCriteria,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = open_session(config)?;
    session.show_tab(&TabEvent::new(Tab::Search));
    if criteria.is_empty() {
        tracing::info!("no filters given; searching every station");
    }

    let notice = session.submit_search(criteria).await;
    match notice {
        Notice::Results { .. } => {
            if !json {
                println!("{notice}");
                println!();
            }
            print_state(&session, json)
        }
        Notice::NoData | Notice::ApplicationError(_) => {
            eprintln!("{notice}");
            Ok(())
        }
        Notice::Connectivity(_) => anyhow::bail!("{notice}"),
    }
}

fn print_state(session: &Session<HeadlessMap>, json: bool) -> anyhow::Result<()> {
    let state = session.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state.stations)?);
        return Ok(());
    }

    print_table(&state.stations);
    println!();
    println!(
        "map: {} markers, {}",
        state.map.marker_count(),
        describe_viewport(state.map.viewport())
    );
    Ok(())
}

fn print_table(stations: &StationCollection) {
    if stations.is_empty() {
        println!("no stations to show");
        return;
    }

    println!(
        "{:<32} {:<8} {:<30} {:<20} {:<7} {:<16} {:<6} SCHEDULE",
        "NAME", "KIND", "ADDRESS", "LOCALITY", "CP", "PROVINCE", "REGION"
    );
    for station in stations {
        println!("{}", table_row(station));
    }
    if stations.is_truncated() {
        println!(
            "({} of {} stations shown)",
            stations.len(),
            stations.total()
        );
    }
}

fn table_row(station: &Station) -> String {
    format!(
        "{:<32} {:<8} {:<30} {:<20} {:<7} {:<16} {:<6} {}",
        truncate(&station.name, NAME_WIDTH),
        station.kind,
        truncate(&station.address, ADDRESS_WIDTH),
        truncate(&station.locality, LOCALITY_WIDTH),
        station.postal_code,
        station.province,
        station.region.map_or(NO_REGION, Region::code),
        station.schedule
    )
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        format!("{}...", s.chars().take(width - 3).collect::<String>())
    } else {
        s.to_owned()
    }
}

fn describe_viewport(viewport: Viewport) -> String {
    match viewport {
        Viewport::Centered { center, zoom } => {
            format!("centered on {:.3},{:.3} at zoom {zoom}", center.lat, center.lng)
        }
        Viewport::Fitted(b) => {
            let center = b.center();
            format!(
                "fitted to {:.3},{:.3} .. {:.3},{:.3} (center {:.3},{:.3})",
                b.south, b.west, b.north, b.east, center.lat, center.lng
            )
        }
    }
}
