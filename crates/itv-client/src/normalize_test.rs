use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

// -----------------------------------------------------------------------
// Regional schemas
// -----------------------------------------------------------------------

#[test]
fn normalizes_catalan_record_with_scaled_coordinates() {
    let raw = record(json!({
        "estaci": "ITV Mataró",
        "municipi": "Mataró",
        "lat": 41_387_000,
        "long": 2_444_000
    }));
    let station = normalize(&raw);
    assert_eq!(station.name, "ITV Mataró");
    assert_eq!(station.locality, "Mataró");
    assert_eq!(station.lat, 41.387);
    assert_eq!(station.lng, 2.444);
    assert_eq!(station.region, Some(Region::Cat));
}

#[test]
fn normalizes_catalan_record_with_quoted_scaled_coordinates() {
    let raw = record(json!({
        "estaci": "ITV Mataró",
        "municipi": "Mataró",
        "lat": "41387000",
        "long": "2444000"
    }));
    let station = normalize(&raw);
    assert_eq!(station.lat, 41.387);
    assert_eq!(station.lng, 2.444);
}

#[test]
fn normalizes_full_catalan_record() {
    let raw = record(json!({
        "estaci": "ITV Sabadell",
        "operador": "Applus",
        "adrea": "Carrer de la Indústria, 12",
        "municipi": "Sabadell",
        "cp": "08202",
        "serveis_territorials": "Barcelona",
        "horari_de_servei": "De dilluns a divendres de 8 a 20 h",
        "lat": "41548000",
        "long": "2107000"
    }));
    let station = normalize(&raw);
    assert_eq!(station.kind, "Applus");
    assert_eq!(station.address, "Carrer de la Indústria, 12");
    assert_eq!(station.postal_code, "08202");
    assert_eq!(station.province, "Barcelona");
    assert_eq!(station.schedule, "De dilluns a divendres de 8 a 20 h");
    assert!(station.has_coordinates());
}

#[test]
fn normalizes_galician_record() {
    let raw = record(json!({
        "NOME DA ESTACIÓN": "ITV Vigo - Valadares",
        "TIPO ESTACIÓN": "Estación fixa",
        "ENDEREZO": "Polígono Industrial de Valadares",
        "CONCELLO": "Vigo",
        "CÓDIGO POSTAL": 36315,
        "PROVINCIA": "Pontevedra",
        "HORARIO": "L-V 7:00-21:00"
    }));
    let station = normalize(&raw);
    assert_eq!(station.name, "ITV Vigo - Valadares");
    assert_eq!(station.kind, "Estación fixa");
    assert_eq!(station.address, "Polígono Industrial de Valadares");
    assert_eq!(station.locality, "Vigo");
    assert_eq!(station.postal_code, "36315");
    assert_eq!(station.province, "Pontevedra");
    assert_eq!(station.schedule, "L-V 7:00-21:00");
    // No coordinates and no Barcelona/Valencia hint: Galicia centroid.
    assert_eq!(station.lat, 42.88);
    assert_eq!(station.lng, 42.88);
}

#[test]
fn normalizes_valencian_record() {
    let raw = record(json!({
        "N ESTACIN": "4601",
        "DIRECCIN": "Av. del Puerto, 3",
        "MUNICIPIO": "Valencia",
        "C.POSTAL": "46023",
        "PROVINCIA": "Valencia",
        "HORARIOS": "8:00-20:00"
    }));
    let station = normalize(&raw);
    assert_eq!(station.name, "4601");
    assert_eq!(station.address, "Av. del Puerto, 3");
    assert_eq!(station.locality, "Valencia");
    assert_eq!(station.postal_code, "46023");
    assert_eq!(station.schedule, "8:00-20:00");
    assert_eq!(station.kind, DEFAULT_KIND);
    assert_eq!(station.lat, 39.5);
}

#[test]
fn normalizes_canonical_search_record_with_decimal_degrees() {
    let raw = record(json!({
        "nombre": "ITV Lugo",
        "tipo": "Estación_fija",
        "direccion": "Rúa Industria 1",
        "localidad": "Lugo",
        "provincia": "Lugo",
        "codigo_postal": "27003",
        "horario": "L-V",
        "latitud": 43.0121,
        "longitud": -7.5559
    }));
    let station = normalize(&raw);
    assert_eq!(station.name, "ITV Lugo");
    assert_eq!(station.kind, "Estación_fija");
    assert_eq!(station.postal_code, "27003");
    assert_eq!(station.lat, 43.0121);
    assert_eq!(station.lng, -7.5559);
    assert_eq!(station.region, None);
}

// -----------------------------------------------------------------------
// Defaults and priority
// -----------------------------------------------------------------------

#[test]
fn empty_record_gets_every_default() {
    let station = normalize(&RawRecord::new());
    assert_eq!(station.name, NOT_AVAILABLE);
    assert_eq!(station.kind, DEFAULT_KIND);
    assert_eq!(station.address, NOT_AVAILABLE);
    assert_eq!(station.locality, NOT_AVAILABLE);
    assert_eq!(station.postal_code, NOT_AVAILABLE);
    assert_eq!(station.province, NOT_AVAILABLE);
    assert_eq!(station.schedule, "");
    assert_eq!(station.lat, 42.88);
    assert_eq!(station.lng, 42.88);
}

#[test]
fn null_and_blank_values_count_as_missing() {
    let raw = record(json!({
        "estaci": null,
        "NOME DA ESTACIÓN": "   ",
        "adrea": ["not", "text"],
        "cp": ""
    }));
    let station = normalize(&raw);
    assert_eq!(station.name, NOT_AVAILABLE);
    assert_eq!(station.address, NOT_AVAILABLE);
    assert_eq!(station.postal_code, NOT_AVAILABLE);
}

#[test]
fn earlier_declared_schema_wins_when_both_present() {
    let raw = record(json!({
        "CONCELLO": "Ourense",
        "municipi": "Reus"
    }));
    assert_eq!(normalize(&raw).locality, "Reus");
}

#[test]
fn blank_candidate_falls_through_to_next_key() {
    let raw = record(json!({
        "estaci": "",
        "NOME DA ESTACIÓN": "ITV Ourense"
    }));
    assert_eq!(normalize(&raw).name, "ITV Ourense");
}

#[test]
fn values_are_trimmed() {
    let raw = record(json!({ "estaci": "  ITV Reus \n" }));
    assert_eq!(normalize(&raw).name, "ITV Reus");
}

#[test]
fn locality_hint_drives_centroid_fallback() {
    let raw = record(json!({ "municipi": "Barcelona", "lat": "", "long": null }));
    let station = normalize(&raw);
    assert_eq!(station.lat, 41.387);
    assert_eq!(station.lng, 41.387);
}

#[test]
fn blank_primary_coordinate_falls_through_to_secondary_key() {
    let raw = record(json!({ "lat": "", "latitud": 42.5, "longitud": -8.1 }));
    let station = normalize(&raw);
    assert_eq!(station.lat, 42.5);
    assert_eq!(station.lng, -8.1);
}

#[test]
fn whitespace_primary_coordinate_falls_through_to_secondary_key() {
    let raw = record(json!({ "lat": "   ", "latitud": 42.5, "long": "\t", "longitud": -8.1 }));
    let station = normalize(&raw);
    assert_eq!(station.lat, 42.5);
    assert_eq!(station.lng, -8.1);
}

#[test]
fn unparseable_coordinate_is_nan() {
    let raw = record(json!({ "estaci": "ITV X", "lat": "n/a", "long": "2.1" }));
    let station = normalize(&raw);
    assert!(station.lat.is_nan());
    assert_eq!(station.lng, 2.1);
    assert!(!station.has_coordinates());
}

// -----------------------------------------------------------------------
// Collections and region detection
// -----------------------------------------------------------------------

#[test]
fn normalize_all_preserves_order_and_caps() {
    let records: Vec<RawRecord> = (0..60)
        .map(|i| record(json!({ "estaci": format!("ITV {i}") })))
        .collect();
    let stations = normalize_all(records);
    assert_eq!(stations.len(), itv_core::RESULT_CAP);
    assert_eq!(stations.total(), 60);
    assert_eq!(stations.as_slice()[0].name, "ITV 0");
    assert_eq!(stations.as_slice()[49].name, "ITV 49");
}

#[test]
fn detect_region_uses_schema_marker_keys() {
    assert_eq!(
        detect_region(&record(json!({ "estaci": "A" }))),
        Some(Region::Cat)
    );
    assert_eq!(
        detect_region(&record(json!({ "CONCELLO": "Vigo" }))),
        Some(Region::Gal)
    );
    assert_eq!(
        detect_region(&record(json!({ "C.POSTAL": "46001" }))),
        Some(Region::Cv)
    );
    assert_eq!(detect_region(&record(json!({ "nombre": "A" }))), None);
}

#[test]
fn normalized_stations_carry_their_region() {
    let stations = normalize_all(vec![
        record(json!({ "estaci": "ITV Reus" })),
        record(json!({ "NOME DA ESTACIÓN": "ITV Vigo" })),
        record(json!({ "N ESTACIN": "ITV Alzira" })),
        record(json!({ "nombre": "ITV Lugo" })),
    ]);
    let regions: Vec<Option<Region>> = stations.iter().map(|s| s.region).collect();
    assert_eq!(
        regions,
        [Some(Region::Cat), Some(Region::Gal), Some(Region::Cv), None]
    );
}
