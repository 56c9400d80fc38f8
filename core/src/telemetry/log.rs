use log::{debug, info, warn};

/// Thin wrapper over the `log` facade shared by the analysis stages.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::with_target("oectcore::analysis")
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// One-line summary per analysis.
    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn detail(&self, message: &str) {
        debug!(target: self.target, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
