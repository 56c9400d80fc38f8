use std::sync::Mutex;

/// Counts analyzed and rejected sweeps across callers.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub analyzed: usize,
    pub rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_analyzed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.analyzed += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
