//! Decoding scenarios against realistic service payloads

use metar_decoder::client::parse_payload;
use metar_decoder::decode::{celsius_to_fahrenheit, direction_label};
use metar_decoder::{DecodedReport, Intensity, MetarDecoder, RawReport, format_icao};
use rstest::rstest;

const KDEN: &str = r#"{
    "Altimeter": "2989",
    "Cloud-List": [["VV", "008"], ["OVC", "015", "CB"], ["SCT"]],
    "Dewpoint": "M08",
    "Flight-Rules": "IFR",
    "Info": {"City": "Denver", "Country": "US", "Name": "Denver Intl", "State": "CO"},
    "Other-List": ["+SN", "VCFG", "FZ", "XX"],
    "Raw-Report": "KDEN 161753Z 36015G25KT 1/2SM +SN VCFG VV008 OVC015CB M06/M08 A2989",
    "Station": "KDEN",
    "Temperature": "M06",
    "Time": "161753Z",
    "Visibility": "1/2",
    "Wind-Direction": "360",
    "Wind-Gust": "25",
    "Wind-Speed": "15"
}"#;

fn decode_sample() -> DecodedReport {
    MetarDecoder::decode(parse_payload("KDEN", KDEN).unwrap())
}

#[test]
fn test_decode_service_payload() {
    let decoded = decode_sample();

    assert_eq!(decoded.altimeter_inhg, "29.89");
    assert_eq!(decoded.temperature_c, "-6.0");
    assert_eq!(decoded.temperature_f, "21.2");
    assert_eq!(decoded.dewpoint_c, "-8.0");
    assert_eq!(decoded.dewpoint_f, "17.6");
    assert_eq!(decoded.wind_direction_desc, "N");

    let conditions: Vec<String> = decoded.conditions.iter().map(ToString::to_string).collect();
    assert_eq!(conditions, vec!["HEAVY SNOW", "FOG IN VICINITY", "FREEZING", ""]);
    assert_eq!(decoded.conditions[0].modifier, Intensity::Heavy);

    let layers: Vec<String> = decoded.cloud_layers.iter().map(ToString::to_string).collect();
    assert_eq!(
        layers,
        vec![
            "VERTICLE VISIBILITY 800 ft",
            "OVERCAST 1500 ft CUMULONIMBUS",
            "SCATTERED 0 ft",
        ]
    );
}

#[test]
fn test_summary_lists_every_field() {
    let summary = decode_sample().to_string();

    assert!(summary.starts_with("KDEN (Denver Intl, Denver, CO, US)"));
    assert!(summary.contains("360° (N) at 15 kt, gusts 25 kt"));
    assert!(summary.contains("-6.0°C / 21.2°F"));
    assert!(summary.contains("29.89 inHg"));
    assert!(summary.contains("Weather:     HEAVY SNOW"));
    assert!(summary.contains("Clouds:      OVERCAST 1500 ft CUMULONIMBUS"));
}

#[test]
fn test_decoded_report_serializes_to_json() {
    let json = serde_json::to_value(decode_sample()).unwrap();

    assert_eq!(json["AltimeterInhg"], "29.89");
    assert_eq!(json["WindDirectionDesc"], "N");
    assert_eq!(json["Conditions"][0]["Modifier"], "HEAVY");
    assert_eq!(json["Conditions"][1]["Other"], "IN VICINITY");
    assert_eq!(json["CloudLayers"][1]["HeightFt"], 1500);
    assert_eq!(json["CloudLayers"][1]["CloudType"], "CUMULONIMBUS");
    assert_eq!(json["Raw"]["Station"], "KDEN");
    assert_eq!(json["Raw"]["Wind-Gust"], "25");
    assert!(json.get("altimeter_inhg").is_none());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_counts_match_input(#[case] n: usize) {
    let raw = RawReport {
        conditions: (0..n)
            .map(|i| (if i % 2 == 0 { "-RA" } else { "??" }).to_string())
            .collect(),
        cloud_layers: (0..n).map(|_| vec!["FEW".to_string()]).collect(),
        ..Default::default()
    };
    let decoded = MetarDecoder::decode(raw);
    assert_eq!(decoded.conditions.len(), n);
    assert_eq!(decoded.cloud_layers.len(), n);
}

#[test]
fn test_decoding_twice_gives_identical_reports() {
    let raw = parse_payload("KDEN", KDEN).unwrap();
    assert_eq!(MetarDecoder::decode(raw.clone()), MetarDecoder::decode(raw));
}

#[test]
fn test_reference_values() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);

    assert_eq!(direction_label(0), "N");
    assert_eq!(direction_label(12), "NNE");
    assert_eq!(direction_label(361), "");

    assert_eq!(format_icao("klax").unwrap(), "KLAX");
    assert_eq!(format_icao("lax").unwrap(), "KLAX");
    assert!(format_icao("la").is_err());
    assert!(format_icao("klaxx").is_err());
}
