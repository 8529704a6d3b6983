//! Health HTTP Route

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};

use super::errors::{ApiError, ApiResult};
use super::lead_routes::LeadState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of leads currently held in memory
    pub leads: usize,
}

/// Health check route at `/health`
pub fn health_routes(state: Arc<LeadState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// A store that cannot be read reports 500 rather than a zero count
async fn health_handler(State(state): State<Arc<LeadState>>) -> ApiResult<Json<HealthResponse>> {
    let leads = state.store.len().map_err(|e| {
        let detail = e.to_string();
        log_event_with_fields(Event::InternalError, &[("detail", detail.as_str())]);
        ApiError::from(e)
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        leads,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            leads: 2,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["leads"], 2);
    }
}
