mod docs;
mod load;
mod stations;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use itv_core::{Region, SearchCriteria};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "itv-cli")]
#[command(about = "Search and load ITV inspection stations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load every station and show the overview map
    Stations {
        /// Print stations as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search stations by locality, postal code, province or type
    Search {
        #[arg(long)]
        locality: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        province: Option<String>,
        /// Station type (e.g. Fija, Móvil)
        #[arg(long)]
        kind: Option<String>,
        /// Print stations as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Upload a regional source file to the load service
    Load {
        /// Path to the source file
        file: PathBuf,
        /// Format of the source file
        #[arg(long, value_enum)]
        source: SourceFormat,
    },
    /// Describe the search and load endpoints in use
    Docs,
}

/// Source file formats accepted by the load service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceFormat {
    /// Catalan stations, XML
    CatXml,
    /// Galician stations, CSV
    GalCsv,
    /// Valencian stations, JSON
    CvJson,
}

impl From<SourceFormat> for Region {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::CatXml => Region::Cat,
            SourceFormat::GalCsv => Region::Gal,
            SourceFormat::CvJson => Region::Cv,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = itv_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, command = ?cli.command, "starting");

    match cli.command {
        Commands::Stations { json } => stations::run_stations(&config, json).await,
        Commands::Search {
            locality,
            postal_code,
            province,
            kind,
            json,
        } => {
            let criteria = SearchCriteria {
                locality,
                postal_code,
                province,
                kind,
            };
            stations::run_search(&config, &criteria, json).await
        }
        Commands::Load { file, source } => load::run_load(&config, &file, source.into()).await,
        Commands::Docs => {
            docs::print_docs(&config);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
