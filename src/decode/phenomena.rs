//! Weather phenomenon codes (`-RA`, `VCSH`, `+TSRA`, ...)

use tracing::debug;

use crate::models::{DecodedCondition, IN_VICINITY, Intensity};

/// Phrase for a bare phenomenon code. Compound codes are whole entries.
#[must_use]
pub fn phenomenon_description(code: &str) -> Option<&'static str> {
    let description = match code {
        "RA" => "RAIN",
        "DZ" => "DRIZZLE",
        "SN" => "SNOW",
        "SG" => "SNOW GRAINS",
        "IC" => "ICE CRYSTALS",
        "PL" => "ICE PELLETS",
        "GR" => "HAIL",
        "GS" => "SMALL HAIL/SNOW PELLETS",
        "UP" => "UNKNOWN PRECIPITATION",
        "BR" => "MIST",
        "FG" => "FOG",
        "FU" => "SMOKE",
        "VA" => "VOLCANIC ASH",
        "SA" => "SAND",
        "HZ" => "HAZE",
        "PY" => "SPRAY",
        "DU" => "DUST",
        "SQ" => "SQUALL",
        "SS" => "SANDSTORM",
        "DS" => "DUSTSTORM",
        "PO" => "WELL DEVELOPED DUST/SAND WHIRLS",
        "FC" => "FUNNEL CLOUD",
        "VC" => "IN VICINITY",
        "MI" => "SHALLOW",
        "BC" => "PATCHES",
        "SH" => "SHOWERS",
        "PR" => "PARTIAL",
        "TS" => "THUNDERSTORM",
        "TSRA" => "THUNDERSTORM/HEAVY RAIN",
        "BL" => "BLOWING",
        "DR" => "DRIFTING",
        "FZ" => "FREEZING",
        _ => return None,
    };
    Some(description)
}

/// Split a token into `(vicinity, intensity, code)`.
///
/// The vicinity prefix comes before the intensity sign, as in `VC-SH`.
fn split_prefixes(token: &str) -> (bool, Intensity, &str) {
    let (vicinity, rest) = match token.strip_prefix("VC") {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if let Some(code) = rest.strip_prefix('-') {
        (vicinity, Intensity::Light, code)
    } else if let Some(code) = rest.strip_prefix('+') {
        (vicinity, Intensity::Heavy, code)
    } else {
        (vicinity, Intensity::Moderate, rest)
    }
}

/// Decode a single phenomenon token
#[must_use]
pub fn decode_condition(token: &str) -> DecodedCondition {
    let (vicinity, modifier, code) = split_prefixes(token);

    let description = phenomenon_description(code).unwrap_or_else(|| {
        debug!(token, code, "Unknown weather phenomenon code");
        ""
    });

    DecodedCondition {
        modifier,
        description: description.to_string(),
        other: if vicinity {
            IN_VICINITY.to_string()
        } else {
            String::new()
        },
    }
}

/// Decode every phenomenon token, keeping order and count
#[must_use]
pub fn decode_conditions(tokens: &[String]) -> Vec<DecodedCondition> {
    tokens.iter().map(|token| decode_condition(token)).collect()
}
