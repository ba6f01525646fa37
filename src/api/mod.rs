//! Stub submission endpoint
//!
//! Accepts a coordinate payload, logs it, waits out an artificial delay and
//! acknowledges. Nothing is stored.

pub mod handlers;
pub mod models;
pub mod routes;

pub use models::{Acknowledgement, ErrorResponse, LocationPayload};
pub use routes::{create_router, ServerState};
