//! Cache Module
//!
//! Provides the memoization cache: a TTL-bounded byte store behind the
//! [`CalculationCache`] capability trait.

mod entry;
mod memory;
mod stats;
mod store;


use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CalculationResult;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Cache Capability ==
/// Storage for memoized calculation results.
///
/// Handlers only depend on this trait, so the backing store can be
/// swapped without touching request logic. Implementations must be safe
/// to call from concurrent requests.
#[async_trait]
pub trait CalculationCache: Send + Sync {
    /// Stores `value` under `key`, expiring `ttl` from now.
    async fn set(&self, key: &str, value: &CalculationResult, ttl: Duration) -> Result<()>;

    /// Returns the live value for `key`, or `None` if it was never set or
    /// has expired. Errors only when a stored value cannot be decoded.
    async fn get(&self, key: &str) -> Result<Option<CalculationResult>>;

    /// Current counters. Backends that do not track them report zeros.
    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
