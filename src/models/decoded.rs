//! Decoded METAR model and display methods

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RawReport;

/// Phrase emitted for a phenomenon reported in the vicinity of the station
pub const IN_VICINITY: &str = "IN VICINITY";

/// A METAR report together with its plain-language derived fields
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DecodedReport {
    /// The report as received
    pub raw: RawReport,
    /// Altimeter setting in inHg, two decimals
    pub altimeter_inhg: String,
    /// Temperature in Celsius, one decimal
    pub temperature_c: String,
    /// Temperature in Fahrenheit, one decimal
    pub temperature_f: String,
    /// Dewpoint in Celsius, one decimal
    pub dewpoint_c: String,
    /// Dewpoint in Fahrenheit, one decimal
    pub dewpoint_f: String,
    /// 16-point compass label for the wind direction
    pub wind_direction_desc: String,
    /// One entry per raw phenomenon code, same order
    pub conditions: Vec<DecodedCondition>,
    /// One entry per raw cloud layer, same order
    pub cloud_layers: Vec<DecodedCloudLayer>,
}

/// Intensity marker of a weather phenomenon
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intensity {
    #[serde(rename = "LIGHT")]
    Light,
    #[serde(rename = "HEAVY")]
    Heavy,
    #[default]
    #[serde(rename = "")]
    Moderate,
}

impl Intensity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Light => "LIGHT",
            Intensity::Heavy => "HEAVY",
            Intensity::Moderate => "",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded weather phenomenon
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DecodedCondition {
    pub modifier: Intensity,
    /// Phrase for the phenomenon code, empty when the code is unknown
    pub description: String,
    /// `IN VICINITY` or empty
    pub other: String,
}

impl DecodedCondition {
    #[must_use]
    pub fn in_vicinity(&self) -> bool {
        !self.other.is_empty()
    }
}

impl fmt::Display for DecodedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: [&str; 3] = [self.modifier.as_str(), &self.description, &self.other];
        let text = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

/// A decoded cloud layer
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DecodedCloudLayer {
    /// Coverage phrase, empty when the code is unknown
    pub coverage: String,
    /// Layer base in feet
    pub height_ft: i64,
    /// Cloud type phrase, empty when absent or unknown
    pub cloud_type: String,
}

impl fmt::Display for DecodedCloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ft", self.coverage, self.height_ft)?;
        if !self.cloud_type.is_empty() {
            write!(f, " {}", self.cloud_type)?;
        }
        Ok(())
    }
}

impl DecodedReport {
    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        let mut wind = format!(
            "{}° ({}) at {} kt",
            self.raw.wind_direction, self.wind_direction_desc, self.raw.wind_speed
        );
        if !self.raw.wind_gust.is_empty() {
            wind.push_str(&format!(", gusts {} kt", self.raw.wind_gust));
        }
        wind
    }

    /// Format temperature in both units
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C / {}°F", self.temperature_c, self.temperature_f)
    }

    /// Format dewpoint in both units
    #[must_use]
    pub fn format_dewpoint(&self) -> String {
        format!("{}°C / {}°F", self.dewpoint_c, self.dewpoint_f)
    }
}

impl fmt::Display for DecodedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.raw.location.describe();
        if location.is_empty() {
            writeln!(f, "{}", self.raw.station)?;
        } else {
            writeln!(f, "{} ({})", self.raw.station, location)?;
        }
        if !self.raw.raw_report.is_empty() {
            writeln!(f, "   Report:      {}", self.raw.raw_report)?;
        }
        if !self.raw.time.is_empty() {
            writeln!(f, "   Time:        {}", self.raw.time)?;
        }
        if !self.raw.flight_rules.is_empty() {
            writeln!(f, "   Rules:       {}", self.raw.flight_rules)?;
        }
        writeln!(f, "   Wind:        {}", self.format_wind())?;
        if !self.raw.visibility.is_empty() {
            writeln!(f, "   Visibility:  {}", self.raw.visibility)?;
        }
        writeln!(f, "   Temperature: {}", self.format_temperature())?;
        writeln!(f, "   Dewpoint:    {}", self.format_dewpoint())?;
        writeln!(f, "   Altimeter:   {} inHg", self.altimeter_inhg)?;
        for condition in &self.conditions {
            writeln!(f, "   Weather:     {condition}")?;
        }
        for layer in &self.cloud_layers {
            writeln!(f, "   Clouds:      {layer}")?;
        }
        if !self.raw.remarks.is_empty() {
            writeln!(f, "   Remarks:     {}", self.raw.remarks)?;
        }
        Ok(())
    }
}
