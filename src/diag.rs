//! Diagnostic sink for dispatch tracing
//!
//! The dispatcher reports what it resolves and spawns through a sink passed
//! to its constructor, so embedders and tests can capture the trace instead
//! of fishing it out of a process-global logger.

/// Receiver for dispatch-time diagnostics.
pub trait DiagSink {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagSink for Silent {
    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}
}
