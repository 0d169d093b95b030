//! Lifecycle logging port consumed by the pipeline and operations.
//!
//! The pipeline never talks to the logging backend directly: it receives
//! this capability at construction time, so tests swap in a recording
//! double while the composition root installs the `tracing` adapter. The
//! port mirrors the original sink's two-method surface.

use std::sync::Arc;

use tracing::{error, info};

/// Process-agnostic logging capability.
///
/// `context` names the phase or component emitting the event (for example
/// `auth-processing`); `message`/`payload` carry the event line.
pub trait LifecycleLog: Send + Sync {
    /// Record an informational lifecycle event.
    fn info(&self, context: &str, message: &str);

    /// Record a failure with its diagnostic payload.
    fn error(&self, context: &str, payload: &str);
}

impl<L: LifecycleLog + ?Sized> LifecycleLog for Arc<L> {
    fn info(&self, context: &str, message: &str) {
        L::info(self, context, message);
    }

    fn error(&self, context: &str, payload: &str) {
        L::error(self, context, payload);
    }
}

/// Production adapter forwarding lifecycle events to the `tracing` sink.
///
/// The context travels as a structured field so downstream formatters and
/// filters can group the two pipeline phases.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLifecycleLog;

impl LifecycleLog for TracingLifecycleLog {
    fn info(&self, context: &str, message: &str) {
        info!(context, "{message}");
    }

    fn error(&self, context: &str, payload: &str) {
        error!(context, "{payload}");
    }
}
