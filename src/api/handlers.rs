//! API Handlers
//!
//! One parameterized handler serves every arithmetic route; the operation
//! is bound per route in [`super::create_router`].

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use tracing::debug;

use crate::cache::CalculationCache;
use crate::calc::{cache_key, Operation};
use crate::error::Result;
use crate::models::{CalculationResult, HealthResponse, OperandQuery, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds only the cache handle and TTL; every request builds its own
/// result value.
#[derive(Clone)]
pub struct AppState {
    /// Memoization backend
    pub cache: Arc<dyn CalculationCache>,
    /// Lifetime of each stored result
    pub ttl: Duration,
}

impl AppState {
    /// Creates a new AppState over the given cache backend.
    pub fn new(cache: Arc<dyn CalculationCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }
}

/// Handler for GET /{operation}?x=..&y=..
///
/// Parses and validates the operands, then answers from the cache or
/// computes and stores the result. Cache errors fail only this request.
pub async fn calculate(
    op: Operation,
    state: AppState,
    query: OperandQuery,
) -> Result<Json<CalculationResult>> {
    let (x, y) = query.parse()?;
    op.validate(x, y)?;

    let key = cache_key(x, op, y);

    if let Some(mut hit) = state.cache.get(&key).await? {
        hit.cached = true;
        return Ok(Json(hit));
    }

    let answer = op.evaluate(x, y)?;
    let result = CalculationResult::computed(op, x, y, answer);
    state.cache.set(&key, &result, state.ttl).await?;
    debug!(key = %key, answer, "computed and stored");

    Ok(Json(result))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::CalcError;
    use async_trait::async_trait;

    /// Backend whose every call fails.
    struct BrokenCache;

    #[async_trait]
    impl CalculationCache for BrokenCache {
        async fn set(&self, _: &str, _: &CalculationResult, _: Duration) -> Result<()> {
            Err(CalcError::CacheFailure("write refused".to_string()))
        }

        async fn get(&self, _: &str) -> Result<Option<CalculationResult>> {
            Err(CalcError::CacheFailure("read refused".to_string()))
        }
    }

    fn memory_state(ttl: Duration) -> AppState {
        AppState::new(Arc::new(MemoryCache::new()), ttl)
    }

    fn query(x: &str, y: &str) -> OperandQuery {
        OperandQuery {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let state = memory_state(Duration::from_secs(60));

        let first = calculate(Operation::Add, state.clone(), query("2", "3"))
            .await
            .unwrap();
        assert_eq!(first.answer, 5.0);
        assert!(!first.cached);

        let second = calculate(Operation::Add, state, query("2", "3"))
            .await
            .unwrap();
        assert_eq!(second.answer, 5.0);
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_recomputes_after_ttl() {
        let state = memory_state(Duration::from_millis(50));

        calculate(Operation::Multiply, state.clone(), query("6", "3"))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;

        let again = calculate(Operation::Multiply, state, query("6", "3"))
            .await
            .unwrap();
        assert!(!again.cached);
        assert_eq!(again.answer, 18.0);
    }

    #[tokio::test]
    async fn test_operations_do_not_share_entries() {
        let state = memory_state(Duration::from_secs(60));

        calculate(Operation::Add, state.clone(), query("2", "3"))
            .await
            .unwrap();

        let swapped = calculate(Operation::Add, state.clone(), query("3", "2"))
            .await
            .unwrap();
        assert!(!swapped.cached);

        let other_op = calculate(Operation::Subtract, state, query("2", "3"))
            .await
            .unwrap();
        assert!(!other_op.cached);
        assert_eq!(other_op.answer, -1.0);
    }

    #[tokio::test]
    async fn test_divide_by_zero_rejected_before_cache() {
        // A broken cache would turn any lookup into a CacheFailure
        let state = AppState::new(Arc::new(BrokenCache), Duration::from_secs(60));

        let result = calculate(Operation::Divide, state, query("6", "0")).await;
        assert!(matches!(result, Err(CalcError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_cache_failure_is_request_error() {
        let state = AppState::new(Arc::new(BrokenCache), Duration::from_secs(60));

        let result = calculate(Operation::Add, state, query("2", "3")).await;
        assert!(matches!(result, Err(CalcError::CacheFailure(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = memory_state(Duration::from_secs(60));
        calculate(Operation::Add, state.clone(), query("2", "3"))
            .await
            .unwrap();
        calculate(Operation::Add, state.clone(), query("2", "3"))
            .await
            .unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
