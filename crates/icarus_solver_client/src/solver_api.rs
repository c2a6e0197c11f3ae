use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use icarus_planner::payload::SolverPayload;

use crate::solution::{HealthStatus, RouteSolution};

#[derive(Debug, Error)]
pub enum SolverApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Solver returned an unsuccessful result")]
    Unsuccessful,
}

#[derive(Deserialize)]
struct SolveResponse {
    success: bool,
    result: Option<RouteSolution>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub const SOLVER_URL_ENV_VAR: &str = "ICARUS_SOLVER_URL";
pub const DEFAULT_SOLVER_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const SOLVE_TSP_PATH: &str = "/solve-tsp";
pub const HEALTH_PATH: &str = "/health";

pub struct SolverClientParams {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl SolverClientParams {
    /// Reads the base URL from `ICARUS_SOLVER_URL`, falling back to the
    /// local development address.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(SOLVER_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_SOLVER_URL.to_owned());

        Self {
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

pub struct SolverApiClient {
    params: SolverClientParams,
    client: reqwest::Client,
}

impl SolverApiClient {
    pub fn new(params: SolverClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.params.base_url
    }

    /// Submits a payload and waits for the optimized tour. Non-2xx
    /// responses and `success: false` envelopes both surface as errors.
    pub async fn solve(&self, payload: &SolverPayload) -> Result<RouteSolution, SolverApiError> {
        let url = format!("{}{}", self.params.base_url, SOLVE_TSP_PATH);

        debug!("SolverApi: Posting problem to {}", url);

        let response = self
            .client
            .post(url)
            .timeout(self.params.request_timeout)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let envelope: SolveResponse = response.json().await?;

        match envelope.result {
            Some(solution) if envelope.success => Ok(solution),
            _ => Err(SolverApiError::Unsuccessful),
        }
    }

    pub async fn health(&self) -> Result<HealthStatus, SolverApiError> {
        let url = format!("{}{}", self.params.base_url, HEALTH_PATH);

        debug!("SolverApi: Checking health at {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.params.request_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let status: HealthStatus = response.json().await?;

        Ok(status)
    }
}

async fn api_error(response: reqwest::Response) -> SolverApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    SolverApiError::Api {
        status,
        message: extract_error_message(body),
    }
}

/// The service wraps failures as `{"error": "..."}`; anything else is
/// reported as the raw body.
fn extract_error_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|parsed| parsed.error)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_envelope() {
        let message =
            extract_error_message(r#"{"error": "Missing required field: cities"}"#.to_owned());

        assert_eq!(message, "Missing required field: cities");
    }

    #[test]
    fn test_extract_error_message_raw_body() {
        let message = extract_error_message("502 Bad Gateway".to_owned());

        assert_eq!(message, "502 Bad Gateway");
    }

    #[test]
    fn test_solve_envelope_success() {
        let envelope: SolveResponse = serde_json::from_str(
            r#"{
                "success": true,
                "result": {
                    "route_indices": [0, 1],
                    "route_labels": ["A", "B", "A"],
                    "total_cost": 10.0,
                    "leg_breakdown": [],
                    "optimization_result": { "fval": null, "variables": null },
                    "problem_info": { "num_cities": 2, "fuel_price": 0.85, "fuel_burn_per_km": 12.0, "distance_scale": 100.0 }
                }
            }"#,
        )
        .unwrap();

        assert!(envelope.success);
        assert!(envelope.result.is_some());
    }

    #[test]
    fn test_solve_envelope_failure() {
        let envelope: SolveResponse =
            serde_json::from_str(r#"{ "success": false, "result": null }"#).unwrap();

        assert!(!envelope.success);
        assert!(envelope.result.is_none());
    }
}
