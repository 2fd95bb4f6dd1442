use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use metar_decoder::{AvwxClient, DecodedReport, MetarConfig, MetarService, telemetry};

/// Fetch current METAR reports and decode them into plain language
#[derive(Parser, Debug)]
#[command(name = "metar-decoder", version)]
struct Cli {
    /// Airport codes, e.g. KLAX or LAX
    #[arg(required = true)]
    stations: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print decoded reports as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Render every decoded report as a single JSON array
fn render_json(reports: &[DecodedReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize decoded reports")
}

async fn run(cli: Cli) -> Result<bool> {
    let config = MetarConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose)?;

    let client = AvwxClient::new(&config.service)?;
    let service = MetarService::with_prefix(client, config.defaults.icao_prefix.clone());

    let mut all_ok = true;
    let mut reports = Vec::new();
    for code in &cli.stations {
        match service.fetch_metar(code).await {
            Ok(report) if cli.json => reports.push(report),
            Ok(report) => println!("{report}"),
            Err(e) => {
                error!("Failed to fetch METAR for '{}': {}", code, e);
                eprintln!("{code}: {}", e.user_message());
                all_ok = false;
            }
        }
    }

    if cli.json {
        println!("{}", render_json(&reports)?);
    }
    Ok(all_ok)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metar_decoder::{MetarDecoder, RawReport};

    fn decoded(station: &str) -> DecodedReport {
        MetarDecoder::decode(RawReport {
            station: station.to_string(),
            altimeter: "3012".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_render_json_is_one_array() {
        let json = render_json(&[decoded("KLAX"), decoded("EGLL")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["Raw"]["Station"], "KLAX");
        assert_eq!(reports[1]["Raw"]["Station"], "EGLL");
        assert_eq!(reports[1]["AltimeterInhg"], "30.12");
    }

    #[test]
    fn test_render_json_without_reports() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_cli_parses_stations_and_flags() {
        let cli = Cli::parse_from(["metar-decoder", "--json", "KLAX", "lax"]);
        assert!(cli.json);
        assert_eq!(cli.stations, vec!["KLAX", "lax"]);
    }
}
