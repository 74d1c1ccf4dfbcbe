//! memo_calc - arithmetic over HTTP with memoized results
//!
//! Serves add, subtract, multiply and divide on query-string operands and
//! keeps each answer in a TTL-bounded in-memory cache.

pub mod api;
pub mod cache;
pub mod calc;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
