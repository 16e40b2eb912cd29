//! Fixed-Size Circular Buffer for Reading History
//!
//! ## Overview
//!
//! Rate-of-change validation needs the previous few readings for a parameter.
//! This ring buffer keeps a sliding window of timestamped readings in a fixed
//! amount of memory chosen at compile time, so it works identically on a
//! probe microcontroller and on an ingest server.
//!
//! Properties:
//! - O(1) insertion, overwriting the oldest reading when full
//! - O(1) access to the most recent reading
//! - Chronological iteration from oldest to newest
//! - Zero heap allocation
//!
//! When full, new readings silently evict the oldest. For sensor history the
//! recent window is the valuable part, so eviction is the right default
//! rather than an error.
//!
//! ## Usage
//!
//! ```rust
//! use aquaindex_core::buffer::CircularBuffer;
//! use aquaindex_core::traits::TimestampedReading;
//!
//! let mut history: CircularBuffer<8> = CircularBuffer::new();
//! history.push(TimestampedReading { value: 7.1, timestamp: 1000 });
//! history.push(TimestampedReading { value: 7.2, timestamp: 2000 });
//!
//! assert_eq!(history.last().unwrap().value, 7.2);
//! ```

use crate::traits::TimestampedReading;

/// Fixed-size circular buffer for time-series readings
///
/// `N` is the window size, fixed at compile time. Powers of two let the
/// compiler turn the wrap-around modulo into a mask.
///
/// Invariants:
/// - `write_pos < N`
/// - `len <= N`
/// - iteration yields readings in chronological order
///
/// Not thread-safe; wrap in a mutex if shared.
#[derive(Clone)]
pub struct CircularBuffer<const N: usize> {
    /// Storage; `Option` marks uninitialized slots without unsafe code
    data: [Option<TimestampedReading>; N],

    /// Index of the next write, wraps to 0 at N
    write_pos: usize,

    /// Number of valid readings, saturates at N
    len: usize,
}

impl<const N: usize> CircularBuffer<N> {
    /// Creates a new empty buffer
    ///
    /// Const, so buffers can live in statics.
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a reading, overwriting the oldest when full
    pub fn push(&mut self, reading: TimestampedReading) {
        self.data[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Get number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Get the most recent reading
    pub fn last(&self) -> Option<&TimestampedReading> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one slot behind the write position
        let idx = if self.write_pos == 0 {
            N - 1
        } else {
            self.write_pos - 1
        };

        self.data[idx].as_ref()
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
            count: 0,
        }
    }

    /// Clear all readings
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Reading by logical index: 0 = oldest, len-1 = newest
    ///
    /// When the buffer is full the oldest element sits at `write_pos`, so
    /// logical indices are offset from physical ones.
    fn get(&self, index: usize) -> Option<&TimestampedReading> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over circular buffer contents
pub struct CircularBufferIter<'a, const N: usize> {
    buffer: &'a CircularBuffer<N>,
    index: usize,
    count: usize,
}

impl<'a, const N: usize> Iterator for CircularBufferIter<'a, N> {
    type Item = &'a TimestampedReading;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.buffer.len() {
            return None;
        }

        let item = self.buffer.get(self.index)?;
        self.index += 1;
        self.count += 1;
        Some(item)
    }
}

impl<const N: usize> Default for CircularBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
