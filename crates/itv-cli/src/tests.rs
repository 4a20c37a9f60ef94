use super::*;

#[test]
fn parses_stations_command() {
    let cli = Cli::try_parse_from(["itv-cli", "stations"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Stations { json: false }));
}

#[test]
fn parses_stations_json_flag() {
    let cli =
        Cli::try_parse_from(["itv-cli", "stations", "--json"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Stations { json: true }));
}

#[test]
fn search_without_filters_leaves_all_none() {
    let cli = Cli::try_parse_from(["itv-cli", "search"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Search {
            locality: None,
            postal_code: None,
            province: None,
            kind: None,
            json: false,
        }
    ));
}

#[test]
fn search_accepts_every_filter() {
    let cli = Cli::try_parse_from([
        "itv-cli",
        "search",
        "--locality",
        "Vigo",
        "--postal-code",
        "36214",
        "--province",
        "Pontevedra",
        "--kind",
        "Fija",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Search {
            locality: Some(ref l),
            postal_code: Some(ref cp),
            province: Some(ref p),
            kind: Some(ref k),
            ..
        } if l == "Vigo" && cp == "36214" && p == "Pontevedra" && k == "Fija"
    ));
}

#[test]
fn parses_load_command_with_source() {
    let cli = Cli::try_parse_from(["itv-cli", "load", "estacions.xml", "--source", "cat-xml"])
        .expect("expected valid cli args");
    let Commands::Load { file, source } = cli.command else {
        panic!("expected load command");
    };
    assert_eq!(file, PathBuf::from("estacions.xml"));
    assert_eq!(source, SourceFormat::CatXml);
    assert_eq!(Region::from(source), Region::Cat);
}

#[test]
fn load_source_maps_to_region() {
    assert_eq!(Region::from(SourceFormat::GalCsv), Region::Gal);
    assert_eq!(Region::from(SourceFormat::CvJson), Region::Cv);
}

#[test]
fn load_requires_source() {
    assert!(Cli::try_parse_from(["itv-cli", "load", "estacions.xml"]).is_err());
}

#[test]
fn load_rejects_unknown_source() {
    assert!(
        Cli::try_parse_from(["itv-cli", "load", "x.json", "--source", "mad-json"]).is_err()
    );
}

#[test]
fn parses_docs_command() {
    let cli = Cli::try_parse_from(["itv-cli", "docs"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Docs));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["itv-cli"]).is_err());
}
