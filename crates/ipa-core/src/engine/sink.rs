/// Receives diagnostics produced during translation.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Discards everything. Used when no sink is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warn(&self, _message: &str) {}
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
