//! # HTTP Server Module
//!
//! The lead service's HTTP surface, built on Axum.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/leads` - Submit a lead
//! - `GET /api/leads` - List all leads
//! - `OPTIONS /api/leads` - CORS preflight (serverless target only)

pub mod config;
pub mod errors;
pub mod lead_routes;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, DeploymentTarget, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use lead_routes::{CreateLeadResponse, LeadState};
pub use observability_routes::HealthResponse;
pub use server::{build_router, HttpServer};
