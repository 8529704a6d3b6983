//! leadline - lead capture service for a commercial lending landing page
//!
//! A validated lead-submission endpoint backed by an in-memory store.
//!
//! - [`schema`]: validation rules shared by every caller
//! - [`store`]: identity assignment, timestamps, and retrieval
//! - [`http_server`]: the `/api/leads` HTTP contract
//! - [`observability`]: structured JSON logging
//! - [`cli`]: `serve` and `validate` commands

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
