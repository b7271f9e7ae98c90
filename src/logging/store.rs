//! The log store
//!
//! Single gate for log traffic: filters entries against the current
//! threshold, retains formatted lines in a bounded history and forwards them
//! to the platform sink. Safe to share between threads as `Arc<LogStore>`.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::history::{HistoryBuffer, MAX_SIZE};
use super::level::Severity;
use super::sink::{forward, PlatformSink, APP_TAG};
use crate::config::Config;

/// Thread-safe leveled log store with a bounded history
pub struct LogStore {
    /// Minimum accepted severity, stored as `Severity::as_u8`
    threshold: AtomicU8,
    /// Retained formatted lines
    history: RwLock<HistoryBuffer>,
    /// Platform facility every accepted line is forwarded to
    sink: Arc<dyn PlatformSink>,
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("threshold", &self.threshold())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl LogStore {
    /// Create a store retaining up to `MAX_SIZE` lines
    pub fn new(threshold: Severity, sink: Arc<dyn PlatformSink>) -> Self {
        Self::with_capacity(threshold, MAX_SIZE, sink)
    }

    /// Create a store with a custom history capacity
    pub fn with_capacity(
        threshold: Severity,
        capacity: usize,
        sink: Arc<dyn PlatformSink>,
    ) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.as_u8()),
            history: RwLock::new(HistoryBuffer::with_capacity(capacity)),
            sink,
        }
    }

    /// Create a store whose initial threshold comes from the configuration
    pub fn from_config(config: &Config, sink: Arc<dyn PlatformSink>) -> Self {
        Self::new(config.initial_threshold(), sink)
    }

    /// Record an entry
    ///
    /// Entries below the current threshold are dropped without touching the
    /// history or the sink. An accepted entry produces the line
    /// `[logger_name] SEVERITY: message`; a `detail` adds a second line
    /// `[logger_name] SEVERITY(details): detail` which is always forwarded at
    /// `Severity::Error`. Both lines enter the history together.
    pub fn record(
        &self,
        severity: Severity,
        logger_name: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        if severity < self.threshold() {
            return;
        }

        let line = format!("[{}] {}: {}", logger_name, severity.as_str(), message);
        let detail_line = detail.map(|detail| {
            format!("[{}] {}(details): {}", logger_name, severity.as_str(), detail)
        });

        {
            let mut history = self.write_history();
            history.push(line.clone());
            if let Some(detail_line) = &detail_line {
                history.push(detail_line.clone());
            }
        }

        forward(self.sink.as_ref(), severity, APP_TAG, &line);
        if let Some(detail_line) = &detail_line {
            forward(self.sink.as_ref(), Severity::Error, APP_TAG, detail_line);
        }
    }

    pub fn trace(&self, logger_name: &str, message: &str, detail: Option<&str>) {
        self.record(Severity::Traffic, logger_name, message, detail);
    }

    pub fn debug(&self, logger_name: &str, message: &str, detail: Option<&str>) {
        self.record(Severity::Debug, logger_name, message, detail);
    }

    pub fn info(&self, logger_name: &str, message: &str, detail: Option<&str>) {
        self.record(Severity::Info, logger_name, message, detail);
    }

    pub fn warn(&self, logger_name: &str, message: &str, detail: Option<&str>) {
        self.record(Severity::Warning, logger_name, message, detail);
    }

    pub fn error(&self, logger_name: &str, message: &str, detail: Option<&str>) {
        self.record(Severity::Error, logger_name, message, detail);
    }

    /// Snapshot of the retained lines, oldest first
    pub fn history(&self) -> Vec<String> {
        self.read_history().snapshot()
    }

    /// Replace the threshold for all subsequent `record` calls
    pub fn set_threshold(&self, severity: Severity) {
        self.threshold.store(severity.as_u8(), Ordering::Relaxed);
    }

    /// Current minimum accepted severity
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Number of retained lines
    pub fn len(&self) -> usize {
        self.read_history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of retained lines
    pub fn capacity(&self) -> usize {
        self.read_history().capacity()
    }

    // Poisoned locks still guard a consistent buffer: a push is one
    // pop_front/push_back pair.
    fn read_history(&self) -> RwLockReadGuard<'_, HistoryBuffer> {
        self.history.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_history(&self) -> RwLockWriteGuard<'_, HistoryBuffer> {
        self.history.write().unwrap_or_else(PoisonError::into_inner)
    }
}
