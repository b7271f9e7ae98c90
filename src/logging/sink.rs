//! Platform log sink
//!
//! The store forwards every accepted line to a platform logging facility with
//! one entry point per severity. `TracingSink` is the default facility and
//! emits the lines as `tracing` events.

use std::panic::{self, AssertUnwindSafe};

use super::level::Severity;

/// Tag passed to the platform sink on every call
pub const APP_TAG: &str = "yubico-authenticator";

/// External logging facility, one method per severity
pub trait PlatformSink: Send + Sync {
    fn verbose(&self, tag: &str, line: &str);
    fn debug(&self, tag: &str, line: &str);
    fn info(&self, tag: &str, line: &str);
    fn warn(&self, tag: &str, line: &str);
    fn error(&self, tag: &str, line: &str);
}

/// Call the sink method matching `severity`
///
/// The call is fire-and-forget: a panicking sink is contained here and never
/// reaches the caller of the store.
pub fn forward(sink: &dyn PlatformSink, severity: Severity, tag: &str, line: &str) {
    let _ = panic::catch_unwind(AssertUnwindSafe(|| match severity {
        Severity::Traffic => sink.verbose(tag, line),
        Severity::Debug => sink.debug(tag, line),
        Severity::Info => sink.info(tag, line),
        Severity::Warning => sink.warn(tag, line),
        Severity::Error => sink.error(tag, line),
    }));
}

/// Sink that emits lines through the installed `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl PlatformSink for TracingSink {
    fn verbose(&self, tag: &str, line: &str) {
        tracing::trace!(target: "authlog::platform", tag, "{}", line);
    }

    fn debug(&self, tag: &str, line: &str) {
        tracing::debug!(target: "authlog::platform", tag, "{}", line);
    }

    fn info(&self, tag: &str, line: &str) {
        tracing::info!(target: "authlog::platform", tag, "{}", line);
    }

    fn warn(&self, tag: &str, line: &str) {
        tracing::warn!(target: "authlog::platform", tag, "{}", line);
    }

    fn error(&self, tag: &str, line: &str) {
        tracing::error!(target: "authlog::platform", tag, "{}", line);
    }
}
