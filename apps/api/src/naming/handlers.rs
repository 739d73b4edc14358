//! Axum route handler for hōmyō generation.
//!
//! ReceiveRequest → AuthenticateCaller → ValidateShape → generate_names →
//! RespondOK, with an early `AppError` exit at every step. History is written
//! from a spawned task after the result is ready.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use tracing::{debug, info, warn};

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::models::homyo::{GenerationResult, NameRequest};
use crate::naming::generator::generate_names;
use crate::naming::validation::validate_request;
use crate::state::AppState;

/// POST /functions/v1/generate-homyo
/// POST /api/v1/homyo/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let bearer = bearer_token(&headers)?;
    let caller = state.identity.resolve(bearer).await?;

    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(format!(
            "Invalid JSON in request body: {}",
            rejection.body_text()
        ))
    })?;
    validate_request(&request)?;

    let result = generate_names(state.generator.as_ref(), &request).await?;

    info!(
        "Generated {} suggestions for caller {}",
        result.suggestions.len(),
        caller.id
    );

    if let Some(history) = state.history.clone() {
        let suggestions = result.suggestions.clone();
        tokio::spawn(async move {
            match history.record(&caller, &request, &suggestions).await {
                Ok(row) => debug!("Saved generation history {}", row.id),
                Err(e) => warn!("Failed to save generation history for {}: {e}", caller.id),
            }
        });
    }

    Ok(Json(result))
}
