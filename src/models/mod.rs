//! Data models for the METAR decoder
//!
//! - Report: the raw METAR record as delivered by the weather service
//! - Decoded: the report together with its plain-language derived fields

pub mod decoded;
pub mod report;

// Re-export all public types for convenient access
pub use decoded::{DecodedCloudLayer, DecodedCondition, DecodedReport, IN_VICINITY, Intensity};
pub use report::{LocationInfo, RawReport};
