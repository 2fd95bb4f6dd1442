//! METAR decoding
//!
//! Turns a [`RawReport`] into a [`DecodedReport`]. Each field is decoded on
//! its own by a small stateless transform:
//! - numeric: altimeter, temperature, dewpoint and wind direction parsing
//! - units: Celsius to Fahrenheit
//! - compass: degrees to a 16-point compass label
//! - phenomena: weather codes to phrases with intensity and vicinity
//! - clouds: coverage, base height and cloud type
//!
//! Decoding never fails. Unparseable numbers become zero and unknown codes
//! become empty phrases.

pub mod clouds;
pub mod compass;
pub mod numeric;
pub mod phenomena;
pub mod units;

use tracing::debug;

use crate::models::{DecodedReport, RawReport};

pub use clouds::{decode_layer, decode_layers};
pub use compass::direction_label;
pub use phenomena::{decode_condition, decode_conditions};
pub use units::celsius_to_fahrenheit;

/// Decodes raw METAR records
pub struct MetarDecoder;

impl MetarDecoder {
    /// Decode a report, keeping the raw record alongside the derived fields
    #[must_use]
    pub fn decode(raw: RawReport) -> DecodedReport {
        let altimeter_inhg = numeric::altimeter_inhg(&raw.altimeter);
        let (temperature_c, temperature_f) =
            numeric::temperature_pair("temperature", &raw.temperature);
        let (dewpoint_c, dewpoint_f) = numeric::temperature_pair("dewpoint", &raw.dewpoint);
        let wind_direction_desc =
            direction_label(numeric::wind_degrees(&raw.wind_direction)).to_string();
        let conditions = decode_conditions(&raw.conditions);
        let cloud_layers = decode_layers(&raw.cloud_layers);

        debug!(
            station = %raw.station,
            conditions = conditions.len(),
            cloud_layers = cloud_layers.len(),
            "Decoded METAR"
        );

        DecodedReport {
            raw,
            altimeter_inhg,
            temperature_c,
            temperature_f,
            dewpoint_c,
            dewpoint_f,
            wind_direction_desc,
            conditions,
            cloud_layers,
        }
    }
}

impl From<RawReport> for DecodedReport {
    fn from(raw: RawReport) -> Self {
        MetarDecoder::decode(raw)
    }
}
