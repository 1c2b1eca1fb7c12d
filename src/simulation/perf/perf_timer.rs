//! Wall-clock timing that works both in the browser and natively

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch that costs nothing while perf metrics are off.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: Option<f64>,
}

impl PerfTimer {
    pub(crate) fn start(enabled: bool) -> Self {
        PerfTimer {
            start_ms: enabled.then(now_ms),
        }
    }

    /// Milliseconds since `start`, or 0 when disabled.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        match self.start_ms {
            Some(start) => (now_ms() - start).max(0.0),
            None => 0.0,
        }
    }
}
