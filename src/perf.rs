//! Gesture latency instrumentation.
//!
//! Pointer handlers run on every input frame, so they carry
//! `profile_scope!` timers that compile to nothing unless the `profiling`
//! feature is on. `HandlerStats` keeps rolling per-event-kind latency for
//! the engine regardless of the feature.
//!
//! ```ignore
//! fn handle_pointer_move(..) {
//!     profile_scope!("pointer_move");
//!     // ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;

/// Budget for one pointer handler; a frame at 60 FPS is about 16.7ms and
/// the view layer needs most of it.
pub const HANDLER_BUDGET_MS: f64 = 4.0;

/// Number of samples kept per handler
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time the enclosing scope when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::HANDLER_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs a warning on drop if the scope ran longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

// ============================================================================
// Handler Statistics
// ============================================================================

/// Rolling latency samples for one handler.
#[derive(Debug, Clone)]
pub struct LatencyStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl LatencyStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total invocations, including samples that rolled out of the window.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Slowest invocation ever recorded.
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Average over the recent window.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the recent window.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }
}

/// Per-handler latency, keyed by pointer event kind.
#[derive(Debug, Clone, Default)]
pub struct HandlerStats {
    handlers: HashMap<&'static str, LatencyStats>,
}

impl HandlerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, handler: &'static str, elapsed_ms: f64) {
        self.handlers.entry(handler).or_default().record(elapsed_ms);
    }

    pub fn get(&self, handler: &str) -> Option<&LatencyStats> {
        self.handlers.get(handler)
    }

    /// Handlers ordered from slowest to fastest average.
    pub fn slowest(&self) -> Vec<(&'static str, &LatencyStats)> {
        let mut ops: Vec<_> = self.handlers.iter().map(|(k, v)| (*k, v)).collect();
        ops.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ops
    }

    pub fn reset(&mut self) {
        self.handlers.clear();
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
