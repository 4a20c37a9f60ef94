//! `docs` command: a short reference for the two service endpoints.

use itv_core::criteria::{KIND_PARAM, LOCALITY_PARAM, POSTAL_CODE_PARAM, PROVINCE_PARAM};
use itv_core::{AppConfig, Region};

pub(crate) fn print_docs(config: &AppConfig) {
    println!("GET {}", config.search_url);
    println!("  Search stations across every regional source.");
    for (param, meaning) in [
        (LOCALITY_PARAM, "locality"),
        (POSTAL_CODE_PARAM, "postal code"),
        (PROVINCE_PARAM, "province"),
        (KIND_PARAM, "station type"),
    ] {
        println!("  ?{param:<10} {meaning}");
    }
    println!();

    println!("POST {}", config.load_url);
    println!("  Ingest a regional source file (multipart/form-data).");
    println!("  archivo    the file");
    let formats: Vec<&str> = Region::ALL.iter().map(|r| r.source_format()).collect();
    println!("  fuente     one of: {}", formats.join(", "));
}
