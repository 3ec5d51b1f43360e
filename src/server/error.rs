//! Server error types.
//!
//! `ServerError` covers process-level failures (configuration, binding);
//! `ApiError` is what a request handler returns and renders as JSON.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::InvalidContractError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid contracts")]
    InvalidContracts(Vec<InvalidContractError>),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("too many contracts: {count} exceeds limit of {limit}")]
    TooManyContracts { count: usize, limit: usize },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<InvalidContractError> for ApiError {
    fn from(err: InvalidContractError) -> Self {
        ApiError::InvalidContracts(vec![err])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidContracts(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::TooManyContracts { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let details: Vec<String> = match &self {
            ApiError::InvalidContracts(errors) => errors.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        };

        let body = Json(json!({
            "error": self.to_string(),
            "details": details,
        }));

        (status, body).into_response()
    }
}
