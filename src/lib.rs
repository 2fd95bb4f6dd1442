//! `metar-decoder` - plain-language METAR reports
//!
//! This library fetches METAR reports from the AVWX service and decodes
//! their coded fields: unit conversion, compass labels, weather phenomena
//! and cloud layers.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod icao;
pub mod models;
pub mod source;
pub mod telemetry;

// Re-export core types for public API
pub use client::AvwxClient;
pub use config::MetarConfig;
pub use decode::MetarDecoder;
pub use error::MetarError;
pub use icao::format_icao;
pub use models::{DecodedCloudLayer, DecodedCondition, DecodedReport, Intensity, RawReport};
pub use source::{MetarService, ReportSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, MetarError>;
