//! Coordinate resolution for raw provider values.
//!
//! Providers send coordinates as decimal degrees, as micro-degree integers
//! (quoted or not), or not at all. [`resolve_coordinate`] turns all of them
//! into a single `f64`, using `NaN` for "no coordinate".

use serde_json::Value;

/// Values whose magnitude exceeds this are treated as micro-degrees.
const SCALED_THRESHOLD: f64 = 1000.0;
const MICRO_DEGREES: f64 = 1_000_000.0;

/// Fallback coordinate when a record has none, keyed by locality substring.
///
/// The same scalar is returned whichever axis is being resolved.
const CENTROID_FALLBACKS: &[(&str, f64)] = &[("Barcelona", 41.387), ("Valencia", 39.5)];

/// Fallback when no entry in [`CENTROID_FALLBACKS`] matches (Galicia).
const DEFAULT_CENTROID: f64 = 42.88;

/// A raw coordinate as found in a provider record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateInput<'a> {
    /// Decimal degrees already normalized by the provider.
    Number(f64),
    /// Integral number sent unquoted; possibly micro-degrees.
    Integer(i64),
    /// String-encoded value in either encoding.
    Text(&'a str),
    /// Any other JSON shape (bool, array, object).
    Unsupported,
    Absent,
}

impl<'a> CoordinateInput<'a> {
    /// Classifies a JSON value from a raw record.
    #[must_use]
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Text(s),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Unsupported, Self::Number),
            },
            Some(_) => Self::Unsupported,
        }
    }
}

/// Resolves a raw coordinate to decimal degrees.
///
/// - `Number` is returned unchanged.
/// - `Absent` and blank text fall back to a centroid chosen by substring
///   match on `locality_hint`.
/// - `Integer` and text are divided by 1,000,000 when their magnitude
///   exceeds 1000.
/// - Text that does not parse yields `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resolve_coordinate(raw: CoordinateInput<'_>, locality_hint: &str) -> f64 {
    match raw {
        CoordinateInput::Number(v) => v,
        CoordinateInput::Absent => centroid_fallback(locality_hint),
        CoordinateInput::Text(s) if s.trim().is_empty() => centroid_fallback(locality_hint),
        CoordinateInput::Text(s) => parse_decimal(s).map_or(f64::NAN, descale),
        CoordinateInput::Integer(i) => descale(i as f64),
        CoordinateInput::Unsupported => f64::NAN,
    }
}

fn centroid_fallback(locality_hint: &str) -> f64 {
    CENTROID_FALLBACKS
        .iter()
        .find(|(needle, _)| locality_hint.contains(needle))
        .map_or(DEFAULT_CENTROID, |(_, centroid)| *centroid)
}

fn descale(v: f64) -> f64 {
    if v.abs() > SCALED_THRESHOLD {
        v / MICRO_DEGREES
    } else {
        v
    }
}

/// Parses a decimal, accepting a single comma as the decimal separator.
fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    let parsed = if s.matches(',').count() == 1 && !s.contains('.') {
        s.replacen(',', ".", 1).parse::<f64>()
    } else {
        s.parse::<f64>()
    };
    parsed.ok().filter(|v| v.is_finite())
}
