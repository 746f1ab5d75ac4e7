//! Composer error and statistics types

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use thiserror::Error;

/// Composition failures surfaced to the caller
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required order section: {0}")]
    MissingSection(&'static str),
}

impl ComposeError {
    /// Short label for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            ComposeError::Validation(_) => "validation",
            ComposeError::MissingSection(_) => "missing_section",
        }
    }
}

/// Result type for composer operations
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Counters for the composer
#[derive(Debug, Default)]
pub struct ComposerStats {
    /// Inputs that produced a dispatch
    pub composed: AtomicU64,
    /// Inputs that resolved to no template
    pub skipped: AtomicU64,
    /// Inputs rejected by validation or missing sections
    pub rejected: AtomicU64,
    /// Dispatches acknowledged by the endpoint
    pub dispatched: AtomicU64,
    /// Dispatches that failed
    pub dispatch_failed: AtomicU64,
}

impl ComposerStats {
    pub fn snapshot(&self) -> ComposerStatsSnapshot {
        ComposerStatsSnapshot {
            composed: self.composed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            dispatched: self.dispatched.load(Ordering::Relaxed),
            dispatch_failed: self.dispatch_failed.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of composer statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposerStatsSnapshot {
    pub composed: u64,
    pub skipped: u64,
    pub rejected: u64,
    pub dispatched: u64,
    pub dispatch_failed: u64,
}
