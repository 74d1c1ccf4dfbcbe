//! Request and Response models for the calculator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! query extraction, response bodies and the cached value encoding.

pub mod calculation;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use calculation::CalculationResult;
pub use requests::OperandQuery;
pub use responses::{HealthResponse, StatsResponse};
