//! Cloud layers such as `["BKN", "025", "CB"]`

use tracing::{debug, warn};

use super::numeric::parse_or_zero;
use crate::models::DecodedCloudLayer;

/// Phrase for a sky coverage code
#[must_use]
pub fn coverage_description(code: &str) -> Option<&'static str> {
    match code {
        "FEW" => Some("FEW"),
        "SKC" => Some("SKY CLEAR"),
        "OVC" => Some("OVERCAST"),
        "SCT" => Some("SCATTERED"),
        "BKN" => Some("BROKEN"),
        "VV" => Some("VERTICLE VISIBILITY"),
        _ => None,
    }
}

/// Phrase for a significant cloud type code
#[must_use]
pub fn cloud_type_description(code: &str) -> Option<&'static str> {
    match code {
        "CB" => Some("CUMULONIMBUS"),
        "TCU" => Some("TOWERING CUMULUS"),
        "CBMAM" => Some("CUMULONIMBUS MAMMATUS"),
        _ => None,
    }
}

fn lookup(kind: &'static str, code: &str, table: fn(&str) -> Option<&'static str>) -> String {
    match table(code) {
        Some(description) => description.to_string(),
        None => {
            debug!(kind, code, "Unknown cloud code");
            String::new()
        }
    }
}

/// Decode one cloud layer.
///
/// A layer missing its height is zero-filled: the coverage is still decoded
/// when present and the height is 0 ft.
#[must_use]
pub fn decode_layer(tokens: &[String]) -> DecodedCloudLayer {
    if tokens.len() < 2 {
        warn!(?tokens, "Cloud layer has fewer than 2 tokens, zero-filling");
    }

    let coverage = tokens
        .first()
        .map(|code| lookup("coverage", code, coverage_description))
        .unwrap_or_default();
    let hundreds: i64 = tokens
        .get(1)
        .map(|height| parse_or_zero("cloud_height", height))
        .unwrap_or_default();
    let cloud_type = tokens
        .get(2)
        .map(|code| lookup("cloud_type", code, cloud_type_description))
        .unwrap_or_default();

    DecodedCloudLayer {
        coverage,
        height_ft: hundreds.saturating_mul(100),
        cloud_type,
    }
}

/// Decode every cloud layer, keeping order and count
#[must_use]
pub fn decode_layers(layers: &[Vec<String>]) -> Vec<DecodedCloudLayer> {
    layers.iter().map(|layer| decode_layer(layer)).collect()
}
