//! `load` command handler.

use std::path::Path;

use itv_client::{LoadClient, LoadReport, Upload};
use itv_core::{AppConfig, Region};

/// Upload `file` to the load service and print the ingestion report.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is empty, or the load
/// service fails or rejects it.
pub(crate) async fn run_load(config: &AppConfig, file: &Path, region: Region) -> anyhow::Result<()> {
    let upload = Upload::from_path(file, region)?;
    let client = LoadClient::new(config)?;

    tracing::info!(file = %file.display(), %region, "loading source file");
    let report = client.upload(&upload).await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &LoadReport) {
    println!("source:   {}", report.source);
    println!("ok:       {}", report.ok);
    println!("repaired: {}", report.repaired);
    println!("rejected: {}", report.rejected);

    print_details("repaired records", &report.repaired_details);
    print_details("rejected records", &report.rejected_details);

    if let Some(log) = report.log.as_deref().filter(|l| !l.trim().is_empty()) {
        println!();
        println!("log:");
        println!("{log}");
    }
}

fn print_details(heading: &str, details: &[String]) {
    if details.is_empty() {
        return;
    }
    println!();
    println!("{heading}:");
    for line in details {
        println!("  - {line}");
    }
}
