//! In-process cache backend
//!
//! [`CacheStore`] behind a tokio `RwLock`, storing results as JSON bytes.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, CalculationCache};
use crate::error::{CalcError, Result};
use crate::models::CalculationResult;

/// Default [`CalculationCache`] backend.
#[derive(Debug, Default)]
pub struct MemoryCache {
    store: RwLock<CacheStore>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores already-encoded bytes, bypassing serialization.
    pub async fn set_raw(&self, key: impl Into<String>, bytes: Vec<u8>, ttl: Duration) {
        self.store.write().await.set(key.into(), bytes, ttl);
    }

    /// Removes every expired entry, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl CalculationCache for MemoryCache {
    async fn set(&self, key: &str, value: &CalculationResult, ttl: Duration) -> Result<()> {
        let bytes = value
            .to_bytes()
            .map_err(|e| CalcError::CacheFailure(format!("encoding {}: {}", key, e)))?;
        self.set_raw(key, bytes, ttl).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<CalculationResult>> {
        // Write lock: lookups evict expired entries and update stats
        let bytes = match self.store.write().await.get(key) {
            Some(bytes) => bytes,
            None => {
                debug!(key, "cache miss");
                return Ok(None);
            }
        };

        debug!(key, "cache hit");
        CalculationResult::from_bytes(&bytes)
            .map(Some)
            .map_err(|e| CalcError::CacheFailure(format!("decoding {}: {}", key, e)))
    }

    async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
