//! Airport code normalization

use crate::{MetarError, Result};

/// Prefix given to three-letter codes, matching continental US stations
pub const DEFAULT_PREFIX: &str = "K";

/// Normalize an airport code to a four-letter ICAO identifier.
///
/// `lax` and `klax` both become `KLAX`. Codes shorter than 3 or longer than 4
/// characters are rejected.
pub fn format_icao(code: &str) -> Result<String> {
    format_icao_with_prefix(code, DEFAULT_PREFIX)
}

/// Like [`format_icao`] with a configurable prefix for three-letter codes
pub fn format_icao_with_prefix(code: &str, prefix: &str) -> Result<String> {
    if !(3..=4).contains(&code.len()) {
        return Err(MetarError::invalid_code(code));
    }

    let upper = code.to_uppercase();
    if code.len() == 3 {
        Ok(format!("{prefix}{upper}"))
    } else {
        Ok(upper)
    }
}
