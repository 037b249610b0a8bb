//! Shared query parameter types for the action dispatcher.

use serde::Deserialize;
use wildtrack_core::types::DbId;

/// The query string of every API call: the action selector plus the two
/// optional numeric arguments.
///
/// Numeric values are kept as strings and parsed leniently: the original
/// surface cast with `(int)`, so non-numeric text degrades to 0 ("absent")
/// instead of producing a plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ActionParams {
    #[serde(default)]
    pub action: String,
    pub area_id: Option<String>,
    pub id: Option<String>,
}

impl ActionParams {
    /// The `area_id` argument; 0 when absent or non-numeric.
    pub fn area_id(&self) -> DbId {
        self.area_id.as_deref().map(parse_loose).unwrap_or(0)
    }

    /// The `id` argument, if the parameter was present at all. A present
    /// but non-numeric value is `Some(0)`: its presence still short-circuits
    /// the body fallback, as the original did.
    pub fn id(&self) -> Option<DbId> {
        self.id.as_deref().map(parse_loose)
    }
}

fn parse_loose(raw: &str) -> DbId {
    raw.trim().parse().unwrap_or(0)
}
