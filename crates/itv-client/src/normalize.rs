//! Normalization from regional raw records to [`itv_core::Station`].
//!
//! Each canonical attribute has an ordered list of candidate keys covering
//! every known regional schema. The first key holding a non-empty value wins,
//! so when two schemas happen to share a key name the earlier-declared one
//! takes priority. New schemas must be appended to the lists, not inserted.

use std::borrow::Cow;

use itv_core::{Region, Station, StationCollection, DEFAULT_KIND, NOT_AVAILABLE};
use serde_json::Value;

use crate::coords::{resolve_coordinate, CoordinateInput};

/// A provider record as received: string keys, mixed-type values.
pub type RawRecord = serde_json::Map<String, Value>;

/// Candidate keys for one canonical attribute, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub keys: &'static [&'static str],
    pub default: &'static str,
}

impl FieldRule {
    /// Returns the first candidate value that is present and non-empty.
    #[must_use]
    pub fn lookup<'r>(&self, raw: &'r RawRecord) -> Option<Cow<'r, str>> {
        self.keys
            .iter()
            .find_map(|key| raw.get(*key).and_then(text_value))
    }

    /// Returns the winning candidate value, or the rule's default.
    #[must_use]
    pub fn resolve(&self, raw: &RawRecord) -> String {
        self.lookup(raw)
            .map_or_else(|| self.default.to_owned(), Cow::into_owned)
    }
}

/// The priority table for every canonical station attribute.
#[derive(Debug, Clone, Copy)]
pub struct StationSchema {
    pub name: FieldRule,
    pub kind: FieldRule,
    pub address: FieldRule,
    pub locality: FieldRule,
    pub postal_code: FieldRule,
    pub province: FieldRule,
    pub schedule: FieldRule,
    pub lat: &'static [&'static str],
    pub lng: &'static [&'static str],
}

/// Key order per attribute: Catalan, Galician, Valencian, then the
/// Spanish-canonical keys returned by the database-backed search service.
pub const STATION_SCHEMA: StationSchema = StationSchema {
    name: FieldRule {
        keys: &["estaci", "NOME DA ESTACIÓN", "N ESTACIN", "nombre"],
        default: NOT_AVAILABLE,
    },
    kind: FieldRule {
        keys: &["operador", "TIPO ESTACIÓN", "tipo"],
        default: DEFAULT_KIND,
    },
    address: FieldRule {
        keys: &["adrea", "ENDEREZO", "DIRECCIN", "direccion"],
        default: NOT_AVAILABLE,
    },
    locality: FieldRule {
        keys: &["municipi", "CONCELLO", "MUNICIPIO", "localidad"],
        default: NOT_AVAILABLE,
    },
    postal_code: FieldRule {
        keys: &["cp", "CÓDIGO POSTAL", "C.POSTAL", "codigo_postal"],
        default: NOT_AVAILABLE,
    },
    province: FieldRule {
        keys: &["serveis_territorials", "PROVINCIA", "provincia"],
        default: NOT_AVAILABLE,
    },
    schedule: FieldRule {
        keys: &["horari_de_servei", "HORARIO", "HORARIOS", "horario"],
        default: "",
    },
    lat: &["lat", "latitud"],
    lng: &["long", "longitud"],
};

impl StationSchema {
    /// Maps a raw record onto a [`Station`]. Never fails.
    #[must_use]
    pub fn normalize(&self, raw: &RawRecord) -> Station {
        let locality_hint = self.locality.lookup(raw).unwrap_or_default();

        Station {
            name: self.name.resolve(raw),
            kind: self.kind.resolve(raw),
            address: self.address.resolve(raw),
            locality: self.locality.resolve(raw),
            postal_code: self.postal_code.resolve(raw),
            province: self.province.resolve(raw),
            schedule: self.schedule.resolve(raw),
            lat: resolve_coordinate(first_coordinate(raw, self.lat), &locality_hint),
            lng: resolve_coordinate(first_coordinate(raw, self.lng), &locality_hint),
            region: detect_region(raw),
        }
    }
}

/// Normalizes one raw record with [`STATION_SCHEMA`].
#[must_use]
pub fn normalize(raw: &RawRecord) -> Station {
    STATION_SCHEMA.normalize(raw)
}

/// Normalizes records in response order and caps the result.
pub fn normalize_all<I>(records: I) -> StationCollection
where
    I: IntoIterator<Item = RawRecord>,
{
    let stations: StationCollection = records.into_iter().map(|raw| normalize(&raw)).collect();

    let unresolved = stations.iter().filter(|s| !s.has_coordinates()).count();
    let from = |region: Region| stations.iter().filter(|s| s.region == Some(region)).count();
    tracing::debug!(
        total = stations.total(),
        shown = stations.len(),
        unresolved,
        cat = from(Region::Cat),
        gal = from(Region::Gal),
        cv = from(Region::Cv),
        "normalized station records"
    );
    stations
}

/// Guesses which regional provider produced `raw`.
#[must_use]
pub fn detect_region(raw: &RawRecord) -> Option<Region> {
    Region::detect(|key| raw.contains_key(key))
}

/// Picks the first coordinate candidate that carries a value.
fn first_coordinate<'r>(raw: &'r RawRecord, keys: &[&str]) -> CoordinateInput<'r> {
    keys.iter()
        .map(|key| CoordinateInput::from_value(raw.get(*key)))
        .find(|input| match input {
            CoordinateInput::Absent => false,
            CoordinateInput::Text(s) => !s.trim().is_empty(),
            _ => true,
        })
        .unwrap_or(CoordinateInput::Absent)
}

/// Renders a scalar JSON value as text; null, empty and compound values are
/// treated as missing.
fn text_value(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(Cow::Borrowed(trimmed))
        }
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
