//! 16-point compass labels for wind directions

/// Convert a wind direction in degrees to a 16-point compass label.
///
/// Sectors are closed on their upper bound, so 11° is still `N` while 12° is
/// `NNE`. Directions outside 0..=360 have no label and yield an empty string.
#[must_use]
pub fn direction_label(degrees: i32) -> &'static str {
    match degrees {
        0..=11 | 350..=360 => "N",
        12..=34 => "NNE",
        35..=56 => "NE",
        57..=79 => "ENE",
        80..=101 => "E",
        102..=124 => "ESE",
        125..=146 => "SE",
        147..=169 => "SSE",
        170..=191 => "S",
        192..=214 => "SSW",
        215..=236 => "SW",
        237..=259 => "WSW",
        260..=281 => "W",
        282..=304 => "WNW",
        305..=326 => "NW",
        327..=349 => "NNW",
        _ => "",
    }
}
