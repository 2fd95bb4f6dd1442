//! Raw METAR record as returned by the AVWX service

use serde::{Deserialize, Deserializer, Serialize};

/// Read a JSON `null` as the field's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A METAR report with every field still in its coded, string form.
///
/// Numeric fields follow the service conventions: the altimeter is in
/// hundredths of inHg without a decimal point, negative temperatures carry an
/// `M` prefix and the wind direction is a degree string.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawReport {
    /// Reporting station (ICAO code)
    #[serde(alias = "station", deserialize_with = "null_as_default")]
    pub station: String,
    /// Coded report text
    #[serde(rename = "Raw-Report", alias = "raw-report", deserialize_with = "null_as_default")]
    pub raw_report: String,
    /// Observation time, e.g. `161753Z`
    #[serde(alias = "time", deserialize_with = "null_as_default")]
    pub time: String,
    /// Flight rules category (VFR, MVFR, IFR, LIFR)
    #[serde(rename = "Flight-Rules", alias = "flight-rules", deserialize_with = "null_as_default")]
    pub flight_rules: String,
    /// Altimeter setting in hundredths of inHg
    #[serde(alias = "altimeter", deserialize_with = "null_as_default")]
    pub altimeter: String,
    /// Temperature in Celsius
    #[serde(alias = "temperature", deserialize_with = "null_as_default")]
    pub temperature: String,
    /// Dewpoint in Celsius
    #[serde(alias = "dewpoint", deserialize_with = "null_as_default")]
    pub dewpoint: String,
    /// Visibility as reported
    #[serde(alias = "visibility", deserialize_with = "null_as_default")]
    pub visibility: String,
    /// Wind direction in degrees
    #[serde(rename = "Wind-Direction", alias = "wind-direction", deserialize_with = "null_as_default")]
    pub wind_direction: String,
    /// Wind speed in knots
    #[serde(rename = "Wind-Speed", alias = "wind-speed", deserialize_with = "null_as_default")]
    pub wind_speed: String,
    /// Gust speed in knots
    #[serde(rename = "Wind-Gust", alias = "wind-gust", deserialize_with = "null_as_default")]
    pub wind_gust: String,
    /// Weather phenomenon codes such as `-RA` or `VCSH`
    #[serde(rename = "Other-List", alias = "other-list", deserialize_with = "null_as_default")]
    pub conditions: Vec<String>,
    /// Cloud layers, each `[coverage, height, type?]`
    #[serde(rename = "Cloud-List", alias = "cloud-list", deserialize_with = "null_as_default")]
    pub cloud_layers: Vec<Vec<String>>,
    /// Remarks section
    #[serde(alias = "remarks", deserialize_with = "null_as_default")]
    pub remarks: String,
    /// Station location details
    #[serde(rename = "Info", alias = "info", deserialize_with = "null_as_default")]
    pub location: LocationInfo,
}

/// Station location details
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationInfo {
    #[serde(alias = "city", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(alias = "country", deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(alias = "name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "state", deserialize_with = "null_as_default")]
    pub state: String,
}

impl LocationInfo {
    /// Format the location as `Name, City, State, Country`, skipping blanks
    #[must_use]
    pub fn describe(&self) -> String {
        [&self.name, &self.city, &self.state, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_field_names() {
        let json = r#"{
            "Station": "KLAX",
            "Altimeter": "3012",
            "Temperature": "M05",
            "Wind-Direction": "250",
            "Other-List": ["-RA", "VCSH"],
            "Cloud-List": [["BKN", "025", "CB"]],
            "Info": {"City": "Los Angeles", "State": "CA"}
        }"#;

        let report: RawReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.station, "KLAX");
        assert_eq!(report.altimeter, "3012");
        assert_eq!(report.temperature, "M05");
        assert_eq!(report.wind_direction, "250");
        assert_eq!(report.conditions, vec!["-RA", "VCSH"]);
        assert_eq!(report.cloud_layers[0], vec!["BKN", "025", "CB"]);
        assert_eq!(report.location.city, "Los Angeles");
        // Absent fields fall back to empty values
        assert!(report.dewpoint.is_empty());
        assert!(report.location.country.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "Station": "KLAX",
            "Altimeter": "3012",
            "Wind-Gust": null,
            "Other-List": null,
            "Cloud-List": null,
            "Info": null
        }"#;

        let report: RawReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.station, "KLAX");
        assert_eq!(report.altimeter, "3012");
        assert!(report.wind_gust.is_empty());
        assert!(report.conditions.is_empty());
        assert!(report.cloud_layers.is_empty());
        assert_eq!(report.location, LocationInfo::default());
    }

    #[test]
    fn test_lowercase_keys_are_accepted() {
        let json = r#"{
            "station": "KLAX",
            "altimeter": "3012",
            "wind-direction": "250",
            "other-list": ["-RA"],
            "info": {"city": "Los Angeles"}
        }"#;

        let report: RawReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.station, "KLAX");
        assert_eq!(report.altimeter, "3012");
        assert_eq!(report.wind_direction, "250");
        assert_eq!(report.conditions, vec!["-RA"]);
        assert_eq!(report.location.city, "Los Angeles");
    }

    #[test]
    fn test_location_describe_skips_blanks() {
        let location = LocationInfo {
            city: "Los Angeles".to_string(),
            country: "US".to_string(),
            name: "Los Angeles International".to_string(),
            state: String::new(),
        };
        assert_eq!(
            location.describe(),
            "Los Angeles International, Los Angeles, US"
        );
        assert_eq!(LocationInfo::default().describe(), "");
    }
}
