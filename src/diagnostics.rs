/// Wall-clock stopwatch that works in the browser as well as natively.
/// `std::time::Instant` is unavailable on wasm32-unknown-unknown.
#[derive(Debug, Clone, Copy)]
pub struct PerfTimer {
    started_at_ms: f64,
}

impl PerfTimer {
    pub fn start() -> Self {
        Self {
            started_at_ms: now_ms(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        (now_ms() - self.started_at_ms).max(0.0).round() as u64
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[inline]
pub fn log_perf(scope: &str, timer: &PerfTimer, details: &str) {
    let elapsed_ms = timer.elapsed_ms();
    if details.trim().is_empty() {
        tracing::debug!(target: "perf", scope, elapsed_ms, "{scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!(target: "perf", scope, elapsed_ms, "{scope} took {elapsed_ms}ms | {details}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_never_goes_negative() {
        let timer = PerfTimer {
            started_at_ms: now_ms() + 60_000.0,
        };
        assert_eq!(timer.elapsed_ms(), 0);
    }
}
