//! Error types and handling for the METAR decoder

use thiserror::Error;

/// Main error type for the METAR decoder
#[derive(Error, Debug)]
pub enum MetarError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather service communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Payload could not be read as a METAR report
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Airport code is not 3 or 4 characters long
    #[error("Invalid airport code: {code}")]
    InvalidCode { code: String },
}

impl MetarError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid airport code error
    pub fn invalid_code<S: Into<String>>(code: S) -> Self {
        Self::InvalidCode { code: code.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            MetarError::Config { .. } => {
                "Configuration error. Please check your config file and API token.".to_string()
            }
            MetarError::Api { message } => {
                format!("Unable to fetch the report from the weather service: {message}")
            }
            MetarError::Parse { .. } => {
                "The weather service returned a report that could not be read.".to_string()
            }
            MetarError::InvalidCode { code } => {
                format!("Invalid airport code '{code}'. Use a 3 or 4 character code such as LAX or KLAX.")
            }
        }
    }
}
