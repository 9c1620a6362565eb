//! CBOR codec for the weather snapshot transferred from the companion.
//!
//! The record is a two-entry map: `{ "temperature": int, "unit": text }`.

use crate::domain::model::WeatherSnapshot;
use crate::utils::error::{PanelError, Result};

/// Name of the transferred file when none is configured.
pub const DEFAULT_DATA_FILE: &str = "weather.cbor";

pub fn encode_snapshot(snapshot: &WeatherSnapshot) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    ciborium::into_writer(snapshot, &mut buffer).map_err(|e| PanelError::EncodeError {
        message: e.to_string(),
    })?;
    Ok(buffer)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<WeatherSnapshot> {
    ciborium::from_reader(bytes).map_err(|e| PanelError::DecodeError {
        message: e.to_string(),
    })
}
