//! Position data model and the open-notify wire schema.
//!
//! A `Position` lives for one refresh cycle: the fetcher produces it, the
//! renderer consumes it, and nothing retains it afterwards. Coordinate
//! bounds are trusted as returned by the API and not validated here.

use serde::{Deserialize, Deserializer, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ── Wire format ─────────────────────────────────────────────────────

/// Response body of `GET /iss-now.json`.
///
/// Decoding fails closed: a missing `iss_position` key, a missing
/// coordinate field, or a coordinate that is neither a number nor a
/// numeric string is a decode error, never a default value.
#[derive(Debug, Clone, Deserialize)]
pub struct IssNowResponse {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssPosition {
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
}

impl IssNowResponse {
    pub fn position(&self) -> Position {
        Position::new(self.iss_position.latitude, self.iss_position.longitude)
    }
}

/// The live API returns coordinates as JSON strings (`"51.5"`); accept
/// plain numbers as well.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

// ── Tests ───────────────────────────────────────────────────────────
