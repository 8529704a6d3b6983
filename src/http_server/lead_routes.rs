//! Lead HTTP Routes
//!
//! `POST /api/leads` stores a submission, `GET /api/leads` lists them.
//! Any other verb is answered with 405. The serverless target also
//! answers OPTIONS and stamps wildcard CORS headers on every response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue, Method, StatusCode,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::set_header::SetResponseHeaderLayer;
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};
use crate::schema;
use crate::store::{LeadStore, LeadSubmission};

use super::config::DeploymentTarget;
use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Lead state shared across handlers
pub struct LeadState {
    pub store: Arc<dyn LeadStore>,
}

impl LeadState {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

pub const LEAD_RECEIVED: &str = "Lead submission received successfully";

/// Body returned after a lead is stored
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLeadResponse {
    pub success: bool,
    pub message: String,
    pub id: u64,
}

impl CreateLeadResponse {
    fn created(id: u64) -> Self {
        Self {
            success: true,
            message: LEAD_RECEIVED.to_string(),
            id,
        }
    }
}

// ==================
// Router
// ==================

/// Create lead routes for the given deployment target
pub fn lead_routes(state: Arc<LeadState>, target: DeploymentTarget) -> Router {
    let mut leads = get(list_leads).post(create_lead);
    if target == DeploymentTarget::Serverless {
        leads = leads.options(preflight);
    }

    let router = Router::new()
        .route("/leads", leads.fallback(method_not_allowed))
        .with_state(state);

    match target {
        DeploymentTarget::Standalone => router,
        DeploymentTarget::Serverless => router
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            )),
    }
}

// ==================
// Handlers
// ==================

async fn create_lead(
    State(state): State<Arc<LeadState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreateLeadResponse>)> {
    let request_id = Uuid::new_v4().to_string();

    let record = submit(state.store.as_ref(), &body).map_err(|e| log_failure(&request_id, e))?;

    let id = record.id.to_string();
    log_event_with_fields(
        Event::LeadCreated,
        &[("request_id", request_id.as_str()), ("id", id.as_str())],
    );

    Ok((StatusCode::CREATED, Json(CreateLeadResponse::created(record.id))))
}

async fn list_leads(State(state): State<Arc<LeadState>>) -> ApiResult<Json<Vec<LeadSubmission>>> {
    let request_id = Uuid::new_v4().to_string();

    let leads = state
        .store
        .list()
        .map_err(|e| log_failure(&request_id, e.into()))?;

    let count = leads.len().to_string();
    log_event_with_fields(
        Event::LeadsListed,
        &[("request_id", request_id.as_str()), ("count", count.as_str())],
    );

    Ok(Json(leads))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed(method: Method) -> ApiError {
    log_event_with_fields(Event::MethodNotAllowed, &[("method", method.as_str())]);
    ApiError::MethodNotAllowed
}

/// Parse, validate, and store one submission
fn submit(store: &dyn LeadStore, body: &[u8]) -> ApiResult<LeadSubmission> {
    let payload = parse_body(body)?;
    let input = schema::validate(&payload)?;
    Ok(store.create(input)?)
}

/// An empty body is treated as JSON `null` so it fails schema validation
/// rather than JSON parsing.
fn parse_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

fn log_failure(request_id: &str, err: ApiError) -> ApiError {
    match &err {
        ApiError::Validation(v) => {
            let count = v.issues().len().to_string();
            let detail = v.to_string();
            log_event_with_fields(
                Event::LeadRejected,
                &[("request_id", request_id), ("issues", count.as_str()), ("detail", detail.as_str())],
            );
        }
        ApiError::MalformedBody(msg) => {
            log_event_with_fields(
                Event::LeadRejected,
                &[("request_id", request_id), ("detail", msg.as_str())],
            );
        }
        ApiError::Internal(msg) => {
            log_event_with_fields(
                Event::InternalError,
                &[("request_id", request_id), ("detail", msg.as_str())],
            );
        }
        ApiError::MethodNotAllowed => {}
    }
    err
}
