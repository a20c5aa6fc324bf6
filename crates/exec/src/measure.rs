// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timing of git executions. Observational only.

use std::future::Future;
use std::time::{Duration, Instant};

/// Receives the wall-clock duration of each execution.
pub trait PerfRecorder: Send + Sync + 'static {
    fn record(&self, label: &str, elapsed: Duration);
}

/// Emits timings as `tracing` debug events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRecorder;

impl PerfRecorder for TracingRecorder {
    fn record(&self, label: &str, elapsed: Duration) {
        tracing::debug!(label, elapsed_ms = elapsed.as_millis() as u64, "git timing");
    }
}

/// Run `fut` and report how long it took under `label`.
pub(crate) async fn measure<F: Future>(
    recorder: &dyn PerfRecorder,
    label: &str,
    fut: F,
) -> F::Output {
    let start = Instant::now();
    let output = fut.await;
    recorder.record(label, start.elapsed());
    output
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::PerfRecorder;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorder that keeps every timing for assertions
    #[derive(Clone, Default)]
    pub struct RecordingRecorder {
        records: Arc<Mutex<Vec<(String, Duration)>>>,
    }

    impl RecordingRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn labels(&self) -> Vec<String> {
            self.records.lock().iter().map(|(label, _)| label.clone()).collect()
        }
    }

    impl PerfRecorder for RecordingRecorder {
        fn record(&self, label: &str, elapsed: Duration) {
            self.records.lock().push((label.to_string(), elapsed));
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::RecordingRecorder;
