//! Time sources for reading timestamps
//!
//! Rate-of-change validation needs to know how far apart two readings are.
//! Deployments differ in where that time comes from:
//! - System clock (gateway or server ingest)
//! - Monotonic counter (probe firmware without an RTC)
//! - Fixed time (tests)

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// Monotonic time source backed by a device tick counter
///
/// Starts at 0 on boot, always increases. Suitable for rate checks but not
/// for persisting reading timestamps.
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    start_ms: Timestamp,
}

impl MonotonicTime {
    /// Create a monotonic source starting at zero
    pub fn new() -> Self {
        Self { start_ms: 0 }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        // In firmware this reads the hardware tick counter
        self.start_ms
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedTime {
    now_ms: Timestamp,
}

impl FixedTime {
    /// Create a source frozen at the given timestamp
    pub fn new(now_ms: Timestamp) -> Self {
        Self { now_ms }
    }

    /// Advance the frozen clock by `delta_ms`
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.now_ms
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
