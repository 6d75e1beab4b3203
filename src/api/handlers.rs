//! HTTP request handlers for the overlap engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_pairs, find_dominant_pair};
use crate::error::EngineError;
use crate::models::{IngestionResult, TokenizedTable};
use crate::parsing::{ingest, validate_upload};

use super::request::AssignmentTableRequest;
use super::response::{ApiError, ApiErrorResponse, PairsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records", post(records_handler))
        .route("/pairs", post(pairs_handler))
        .with_state(state)
}

/// Handler for POST /records.
///
/// Validates and ingests the table, returning typed records and the rows
/// whose dates were ambiguous.
async fn records_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentTableRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing records request");

    let request = match read_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match ingest_request(&state, request, correlation_id) {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /pairs.
///
/// Ingests the table, then computes per-project pair overlaps and the
/// longest-collaborating pair.
async fn pairs_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentTableRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pairs request");

    let request = match read_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let ingestion = match ingest_request(&state, request, correlation_id) {
        Ok(result) => result,
        Err(err) => return error_response(err, correlation_id),
    };

    let start_time = Instant::now();
    let pairs = aggregate_pairs(&ingestion.records);
    let dominant_pair = find_dominant_pair(&pairs);
    info!(
        correlation_id = %correlation_id,
        pairs_count = pairs.len(),
        dominant_total_days = dominant_pair.as_ref().map(|d| d.total_days),
        duration_us = start_time.elapsed().as_micros(),
        "Pair aggregation completed"
    );

    json_response(
        StatusCode::OK,
        &PairsResponse {
            records: ingestion.records,
            ambiguous_rows: ingestion.ambiguous_rows,
            pairs,
            dominant_pair,
        },
    )
}

/// Unwraps the JSON body or builds the 400 response for a bad one.
fn read_payload(
    payload: Result<Json<AssignmentTableRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<AssignmentTableRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, &error))
}

/// Runs the upload check and ingestion for one request.
fn ingest_request(
    state: &AppState,
    request: AssignmentTableRequest,
    correlation_id: Uuid,
) -> Result<IngestionResult, EngineError> {
    if let Some(file) = &request.file {
        validate_upload(&file.name, &file.media_type, state.config().upload())?;
    }

    let interpreter = state.interpreter();
    let table: TokenizedTable = request.into();

    let start_time = Instant::now();
    let result = ingest(&table, &interpreter)?;
    info!(
        correlation_id = %correlation_id,
        rows_count = table.rows.len(),
        ambiguous_count = result.ambiguous_rows.len(),
        today = %interpreter.today(),
        duration_us = start_time.elapsed().as_micros(),
        "Ingestion completed successfully"
    );

    Ok(result)
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
