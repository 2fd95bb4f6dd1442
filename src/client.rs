//! AVWX REST client
//!
//! Fetches raw METAR records over HTTP. Transient failures are retried with
//! exponential backoff by the retry middleware; everything else is mapped to
//! a [`MetarError`].

use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ServiceConfig;
use crate::models::RawReport;
use crate::source::ReportSource;
use crate::{MetarError, Result};

/// Parse a METAR response body.
///
/// A non-empty `Error` field in the payload is reported as an API error.
pub fn parse_payload(station: &str, body: &str) -> Result<RawReport> {
    let parse_error =
        |e: serde_json::Error| MetarError::parse(format!("Failed to parse METAR response for {station}: {e}"));

    let payload: Value = serde_json::from_str(body).map_err(parse_error)?;
    if let Some(message) = payload
        .get("Error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
    {
        return Err(MetarError::api(message));
    }

    serde_json::from_value(payload).map_err(parse_error)
}

/// Map an unsuccessful HTTP status to an API error
#[must_use]
pub fn status_error(status: StatusCode, station: &str) -> MetarError {
    match status.as_u16() {
        401 | 403 => MetarError::api("Unauthorized. Please check your service API token."),
        404 => MetarError::api(format!("No report found for station {station}")),
        429 => MetarError::api("Rate limit exceeded. Please try again later."),
        _ => MetarError::api(format!("Query failed: {status}")),
    }
}

/// HTTP client for the AVWX METAR endpoint
pub struct AvwxClient {
    client: ClientWithMiddleware,
    base_url: String,
    options: String,
    api_token: Option<String>,
}

impl AvwxClient {
    /// Create a new client
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("metar-decoder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MetarError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            options: config.options.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// URL of the METAR request for a station
    #[must_use]
    pub fn report_url(&self, station: &str) -> String {
        format!(
            "{}{}?options={}",
            self.base_url,
            urlencoding::encode(station),
            urlencoding::encode(&self.options)
        )
    }
}

impl ReportSource for AvwxClient {
    #[instrument(skip(self))]
    async fn fetch_raw(&self, station: &str) -> Result<RawReport> {
        let url = self.report_url(station);
        debug!("METAR request URL: {}", url);
        let start_time = Instant::now();

        let mut request = self.client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("METAR request for {} failed: {}", station, e);
            MetarError::api(format!("Request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("METAR request for {} returned {}", station, status);
            return Err(status_error(status, station));
        }

        let body = response.text().await.map_err(|e| {
            MetarError::api(format!("Failed to read METAR response for {station}: {e}"))
        })?;
        let report = parse_payload(station, &body)?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved METAR for {} in {:.3}s",
            station,
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow weather service response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(report)
    }
}
