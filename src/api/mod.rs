//! API Module
//!
//! HTTP handlers and routing for the calculator REST API.
//!
//! # Endpoints
//! - `GET /add?x=&y=` - Sum
//! - `GET /subtract?x=&y=` - Difference
//! - `GET /multiply?x=&y=` - Product
//! - `GET /divide?x=&y=` - Quotient, rejects `y=0`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
