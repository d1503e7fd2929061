// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index lifecycle: not built yet, ready, or failed for good.
//!
//! A [`SearchService`] is created empty, receives the outcome of exactly one
//! build through [`SearchService::install`], and hands out the shared index
//! afterwards. Queries never observe a half-built index: the index becomes
//! visible in one write, already complete.
//!
//! ```text
//! Uninitialized ──install(Ok)──▶ Ready(Arc<SearchIndex>)
//!       │
//!       └──────install(Err)──▶ Failed(message)
//! ```

use crate::error::{BuildError, ServiceError};
use crate::index::SearchIndex;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Where the index is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    Uninitialized,
    Ready(Arc<SearchIndex>),
    Failed(String),
}

impl IndexState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexState::Uninitialized => "uninitialized",
            IndexState::Ready(_) => "ready",
            IndexState::Failed(_) => "failed",
        }
    }
}

/// Shared handle to the index, cheap to clone across request handlers.
#[derive(Debug, Clone, Default)]
pub struct SearchService {
    state: Arc<RwLock<IndexState>>,
}

impl SearchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that starts out ready.
    pub fn with_index(index: SearchIndex) -> Self {
        let service = Self::new();
        service.install(Ok(index));
        service
    }

    /// Record the outcome of the build.
    ///
    /// Only the first outcome counts; a later call is logged and ignored so a
    /// ready index can never be swapped out from under running queries.
    pub fn install(&self, outcome: Result<SearchIndex, BuildError>) {
        match outcome {
            Ok(index) => self.transition(IndexState::Ready(Arc::new(index))),
            Err(err) => self.mark_failed(err.to_string()),
        }
    }

    /// Fail the build for a reason that isn't a [`BuildError`], such as the
    /// build task itself dying.
    pub fn mark_failed(&self, message: impl Into<String>) {
        self.transition(IndexState::Failed(message.into()));
    }

    fn transition(&self, next: IndexState) {
        let mut state = self.state.write();
        if !matches!(*state, IndexState::Uninitialized) {
            warn!(state = state.as_str(), "index already installed, ignoring new outcome");
            return;
        }
        match &next {
            IndexState::Ready(index) => info!(breeds = index.len(), "search index ready"),
            IndexState::Failed(message) => error!(error = %message, "search index build failed"),
            IndexState::Uninitialized => {}
        }
        *state = next;
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.read(), IndexState::Ready(_))
    }

    /// Name of the current state, for health reporting.
    pub fn state_name(&self) -> &'static str {
        self.state.read().as_str()
    }

    /// The ready index, or why there isn't one.
    pub fn index(&self) -> Result<Arc<SearchIndex>, ServiceError> {
        match &*self.state.read() {
            IndexState::Ready(index) => Ok(Arc::clone(index)),
            IndexState::Uninitialized => Err(ServiceError::NotReady),
            IndexState::Failed(message) => Err(ServiceError::BuildFailed(message.clone())),
        }
    }
}
