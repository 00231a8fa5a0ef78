use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "capabilities";

/// [`Logger`] port backed by `tracing`.
///
/// Events are emitted under the `capabilities` target with a `scope` field
/// naming the area of the layer that logged them (`auth`, `detection`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger {
    scope: &'static str,
}

impl TracingLogger {
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("core")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, scope = self.scope, "{}", message);
    }
}
