//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::adapter::generate_via_provider;
use crate::generation::mock::{mock_variations, Length};
use crate::generation::scoring::score_copy;
use crate::state::AppState;

const LIVE_PROVIDER: &str = "huggingface";
const MOCK_PROVIDER: &str = "mock";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub length: Length,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub variations: Vec<String>,
    pub is_mock: bool,
    pub message: String,
    pub provider: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Tries the live provider and substitutes demo templates on any provider
/// failure — the response is a success either way, flagged with `isMock`.
/// The body is taken raw so a malformed envelope reaches the demo-data
/// recovery below instead of a bare extractor rejection.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GenerateResponse>, AppError> {
    let request: GenerateRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!("request body did not match the generate envelope: {err}");
            return recover_malformed_body(&body);
        }
    };

    if request.input.trim().is_empty() {
        return Err(AppError::Validation("Input text is required".to_string()));
    }

    debug!(
        "generating variations: input={:?} tone={:?} length={}",
        request.input,
        request.tone,
        request.length.as_str()
    );

    let response = match generate_via_provider(
        &state.inference,
        &request.input,
        &request.tone,
        request.length,
    )
    .await
    {
        Ok(variations) => GenerateResponse {
            variations,
            is_mock: false,
            message: "Generated with Hugging Face AI".to_string(),
            provider: LIVE_PROVIDER.to_string(),
        },
        Err(err) => {
            warn!("provider generation failed, serving demo data: {err}");
            GenerateResponse {
                variations: mock_variations(&request.input, &request.tone, request.length),
                is_mock: true,
                message: "Using enhanced demo data - Check your Hugging Face API key"
                    .to_string(),
                provider: MOCK_PROVIDER.to_string(),
            }
        }
    };

    let scores: Vec<u8> = response.variations.iter().map(|v| score_copy(v)).collect();
    debug!("variation scores: {scores:?}");

    Ok(Json(response))
}

/// Second-stage recovery for bodies that fail the strict parse. A body that
/// is still a JSON object gets demo data built from whatever string fields
/// are usable; anything else is a plain validation failure.
///
/// Reachable only for type-mismatched objects (e.g. a numeric `input`);
/// missing fields already deserialize through the envelope defaults.
fn recover_malformed_body(body: &str) -> Result<Json<GenerateResponse>, AppError> {
    let invalid = || AppError::Validation("Invalid request format".to_string());

    let value: Value = serde_json::from_str(body).map_err(|_| invalid())?;
    let object = value.as_object().ok_or_else(invalid)?;

    let input = string_field(object, "input").unwrap_or("Product");
    let tone = string_field(object, "tone").unwrap_or("Friendly");
    let length = Length::from(string_field(object, "length").unwrap_or("short").to_string());

    Ok(Json(GenerateResponse {
        variations: mock_variations(input, tone, length),
        is_mock: true,
        message: "Using demo data - Service temporarily unavailable".to_string(),
        provider: MOCK_PROVIDER.to_string(),
    }))
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
