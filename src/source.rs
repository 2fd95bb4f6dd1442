//! Report source seam and the fetch-and-decode service built on it

use tracing::{debug, info};

use crate::decode::MetarDecoder;
use crate::icao::{DEFAULT_PREFIX, format_icao_with_prefix};
use crate::models::{DecodedReport, RawReport};
use crate::Result;

/// Anything that can deliver the latest raw METAR for a station
pub trait ReportSource {
    /// Fetch the raw report for a normalized ICAO code
    async fn fetch_raw(&self, station: &str) -> Result<RawReport>;
}

/// Normalizes airport codes, fetches reports and decodes them
pub struct MetarService<S> {
    source: S,
    icao_prefix: String,
}

impl<S: ReportSource> MetarService<S> {
    /// Create a service that prefixes three-letter codes with `K`
    pub fn new(source: S) -> Self {
        Self::with_prefix(source, DEFAULT_PREFIX)
    }

    /// Create a service with a custom prefix for three-letter codes
    pub fn with_prefix(source: S, icao_prefix: impl Into<String>) -> Self {
        Self {
            source,
            icao_prefix: icao_prefix.into(),
        }
    }

    /// Fetch and decode the current METAR for an airport code
    pub async fn fetch_metar(&self, code: &str) -> Result<DecodedReport> {
        let station = format_icao_with_prefix(code, &self.icao_prefix)?;
        debug!("Normalized airport code '{}' to {}", code, station);

        let raw = self.source.fetch_raw(&station).await?;
        let decoded = MetarDecoder::decode(raw);

        info!(
            "Decoded METAR for {} ({} conditions, {} cloud layers)",
            station,
            decoded.conditions.len(),
            decoded.cloud_layers.len()
        );
        Ok(decoded)
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }
}
