use chrono::Utc;

/// Time source for request timestamps.
///
/// The reporting service expects epoch milliseconds on every start and finish
/// payload. Tests substitute a fixed implementation for deterministic bodies.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
