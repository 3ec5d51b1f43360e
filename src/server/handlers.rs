//! HTTP handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::{Contract, Solution};
use crate::scheduler::SolutionKpi;
use crate::validation::validate_contracts;

use super::config::ServerConfig;
use super::error::ApiError;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Liveness probe - /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Contract optimization endpoint - /spaceship/optimize
///
/// Body: JSON array of `{"id"|"name", "start", "duration", "price"}`.
/// Response: `{"income": <n>, "path": [<id>, ...]}`.
pub async fn optimize_contracts(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Contract>>, JsonRejection>,
) -> Result<Json<Solution>, ApiError> {
    let Json(contracts) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected request body");
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let limit = state.config.max_contracts;
    if contracts.len() > limit {
        warn!(count = contracts.len(), limit, "too many contracts");
        return Err(ApiError::TooManyContracts {
            count: contracts.len(),
            limit,
        });
    }

    if let Err(errors) = validate_contracts(&contracts) {
        warn!(invalid = errors.len(), "rejected invalid contracts");
        return Err(ApiError::InvalidContracts(errors));
    }

    let optimizer = state.config.optimizer();
    let (solution, kpi) = tokio::task::spawn_blocking(move || {
        optimizer.schedule(&contracts).map(|schedule| {
            let kpi = SolutionKpi::calculate(&schedule, &contracts);
            (Solution::from(schedule), kpi)
        })
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(
        selected = kpi.selected,
        rejected = kpi.rejected,
        income = %solution.income,
        utilization = kpi.utilization,
        "optimized contract request"
    );

    Ok(Json(solution))
}
