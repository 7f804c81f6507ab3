//! WeatherAPI.com current-conditions client

use serde::Deserialize;

use crate::state::WeatherReport;

const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Why a lookup failed. Only the logs ever see the distinction; the UI
/// collapses every variant to one generic message.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// API response from WeatherAPI.com
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
    location: ApiLocation,
}

#[derive(Debug, Deserialize)]
struct Current {
    temp_c: f64,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

fn report_from_response(response: CurrentResponse) -> WeatherReport {
    WeatherReport {
        temperature_c: response.current.temp_c,
        condition: response.current.condition.text,
        location: response.location.name,
    }
}

/// Fetch current conditions for a free-text location query.
///
/// The caller guarantees `query` is trimmed and non-empty; empty input is
/// rejected in the reducer and never reaches the network.
pub async fn fetch_current(api_key: &str, query: &str) -> Result<WeatherReport, LookupError> {
    let url = format!(
        "{CURRENT_URL}?key={}&q={}",
        urlencoding::encode(api_key),
        urlencoding::encode(query)
    );

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    let body = response.text().await?;
    let data: CurrentResponse = serde_json::from_str(&body)?;
    Ok(report_from_response(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_maps_to_report() {
        let body = r#"{
            "location": {"name": "Paris", "country": "France"},
            "current": {"temp_c": 22, "condition": {"text": "Sunny", "code": 1000}}
        }"#;

        let parsed: CurrentResponse = serde_json::from_str(body).expect("fixture parses");
        let report = report_from_response(parsed);

        assert_eq!(report.temperature_c, 22.0);
        assert_eq!(report.condition, "Sunny");
        assert_eq!(report.location, "Paris");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        // Provider error bodies carry an "error" object instead of conditions
        let body = r#"{"error": {"code": 1006, "message": "No matching location found."}}"#;
        assert!(serde_json::from_str::<CurrentResponse>(body).is_err());
    }

    #[test]
    fn test_fractional_temperature_survives() {
        let body = r#"{
            "location": {"name": "Oslo"},
            "current": {"temp_c": -3.5, "condition": {"text": "Snow"}}
        }"#;

        let parsed: CurrentResponse = serde_json::from_str(body).expect("fixture parses");
        let report = report_from_response(parsed);
        assert_eq!(report.temperature_c, -3.5);
    }
}
