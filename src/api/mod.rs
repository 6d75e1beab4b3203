//! HTTP API module for the overlap engine.
//!
//! This module exposes ingestion and pair aggregation over JSON. Clients
//! send an already-tokenized CSV table and receive typed records, pair
//! overlaps and the dominant pair.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AssignmentTableRequest, FileMetadataRequest};
pub use response::{ApiError, ApiErrorResponse, PairsResponse};
pub use state::AppState;
