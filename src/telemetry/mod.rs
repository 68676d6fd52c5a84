//! 调用遥测：每次调用完成后上报 CallStats，默认不收集。
//!
//! Call telemetry.
//!
//! The client reports one [`CallStats`] record per completed call (success or
//! failure) to a [`CallSink`]. Nothing is collected unless the application
//! installs a sink through
//! [`SwiftxClientBuilder::call_sink`](crate::client::SwiftxClientBuilder::call_sink).
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CallSink`] | Trait for stats destinations |
//! | [`NoopCallSink`] | Default no-op sink (no collection) |
//! | [`InMemoryCallSink`] | In-memory sink for testing |

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

pub use crate::client::CallStats;
use crate::Result;

#[async_trait]
pub trait CallSink: Send + Sync {
    async fn record(&self, stats: CallStats) -> Result<()>;
}

/// Sink that drops everything.
pub struct NoopCallSink;

#[async_trait]
impl CallSink for NoopCallSink {
    async fn record(&self, _stats: CallStats) -> Result<()> {
        Ok(())
    }
}

pub fn noop_sink() -> Arc<dyn CallSink> {
    Arc::new(NoopCallSink)
}

/// In-memory sink for testing. Keeps the most recent `max` records.
pub struct InMemoryCallSink {
    calls: Mutex<Vec<CallStats>>,
    max_calls: usize,
}

impl InMemoryCallSink {
    pub fn new(max: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            max_calls: max.max(1),
        }
    }

    pub fn calls(&self) -> Vec<CallStats> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<CallStats> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl CallSink for InMemoryCallSink {
    async fn record(&self, stats: CallStats) -> Result<()> {
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        calls.push(stats);
        if calls.len() > self.max_calls {
            calls.remove(0);
        }
        Ok(())
    }
}
