//! Application state for the salary engine API.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::engine::PayrollEngine;

/// Shared application state.
///
/// One engine is shared by every handler. Calculations and queries take the
/// read lock; mutations take the write lock, so a calculation never observes
/// a half-applied change.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RwLock<PayrollEngine>>,
}

impl AppState {
    /// Creates a new application state around an engine.
    pub fn new(engine: PayrollEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Acquires shared access to the engine.
    pub async fn read(&self) -> RwLockReadGuard<'_, PayrollEngine> {
        self.engine.read().await
    }

    /// Acquires exclusive access to the engine.
    pub async fn write(&self) -> RwLockWriteGuard<'_, PayrollEngine> {
        self.engine.write().await
    }
}
