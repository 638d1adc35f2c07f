//! Timed result records and their staged builders.
//!
//! One record per algorithm invocation: the three phase timings plus the
//! algorithm's payload, frozen at `build()`. Timings are observability,
//! not correctness — fields never set default to zero rather than fail.

use std::time::Instant;

use serde::Serialize;

/// Run `f`, storing its wall-clock duration in `slot`.
fn time_into<T>(slot: &mut u64, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = f();
    *slot = started.elapsed().as_millis() as u64;
    out
}

// ─────────────────────────────────────────────
// ShortestPathsResult
// ─────────────────────────────────────────────

/// Immutable record of one shortest-path invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathsResult {
    pub load_millis: u64,
    pub compute_millis: u64,
    pub write_millis: u64,
    /// Distance per internal id; `f64::INFINITY` marks unreachable nodes.
    pub distances: Vec<f64>,
}

impl ShortestPathsResult {
    pub fn builder() -> ShortestPathsResultBuilder {
        ShortestPathsResultBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ShortestPathsResultBuilder {
    load_millis: u64,
    compute_millis: u64,
    write_millis: u64,
    distances: Vec<f64>,
}

impl ShortestPathsResultBuilder {
    /// Run the load phase, recording its duration.
    pub fn time_load<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.load_millis, f)
    }

    /// Run the compute phase, recording its duration.
    pub fn time_compute<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.compute_millis, f)
    }

    /// Run the write phase, recording its duration.
    pub fn time_write<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.write_millis, f)
    }

    pub fn with_load_millis(&mut self, millis: u64) -> &mut Self {
        self.load_millis = millis;
        self
    }

    pub fn with_compute_millis(&mut self, millis: u64) -> &mut Self {
        self.compute_millis = millis;
        self
    }

    pub fn with_write_millis(&mut self, millis: u64) -> &mut Self {
        self.write_millis = millis;
        self
    }

    pub fn with_distances(&mut self, distances: Vec<f64>) -> &mut Self {
        self.distances = distances;
        self
    }

    /// Freeze the record. Hands the payload over; intended to be called
    /// once per invocation.
    pub fn build(&mut self) -> ShortestPathsResult {
        ShortestPathsResult {
            load_millis: self.load_millis,
            compute_millis: self.compute_millis,
            write_millis: self.write_millis,
            distances: std::mem::take(&mut self.distances),
        }
    }
}

// ─────────────────────────────────────────────
// SccResult
// ─────────────────────────────────────────────

/// Immutable record of one SCC decomposition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SccResult {
    pub load_millis: u64,
    pub compute_millis: u64,
    pub write_millis: u64,
    pub set_count: usize,
    pub min_set_size: usize,
    pub max_set_size: usize,
}

impl SccResult {
    pub fn builder() -> SccResultBuilder {
        SccResultBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct SccResultBuilder {
    load_millis: u64,
    compute_millis: u64,
    write_millis: u64,
    set_count: usize,
    min_set_size: usize,
    max_set_size: usize,
}

impl SccResultBuilder {
    /// Run the load phase, recording its duration.
    pub fn time_load<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.load_millis, f)
    }

    /// Run the compute phase, recording its duration.
    pub fn time_compute<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.compute_millis, f)
    }

    /// Run the write phase, recording its duration.
    pub fn time_write<T>(&mut self, f: impl FnOnce() -> T) -> T {
        time_into(&mut self.write_millis, f)
    }

    pub fn with_load_millis(&mut self, millis: u64) -> &mut Self {
        self.load_millis = millis;
        self
    }

    pub fn with_compute_millis(&mut self, millis: u64) -> &mut Self {
        self.compute_millis = millis;
        self
    }

    pub fn with_write_millis(&mut self, millis: u64) -> &mut Self {
        self.write_millis = millis;
        self
    }

    pub fn with_set_count(&mut self, set_count: usize) -> &mut Self {
        self.set_count = set_count;
        self
    }

    pub fn with_min_set_size(&mut self, min_set_size: usize) -> &mut Self {
        self.min_set_size = min_set_size;
        self
    }

    pub fn with_max_set_size(&mut self, max_set_size: usize) -> &mut Self {
        self.max_set_size = max_set_size;
        self
    }

    /// Freeze the record.
    pub fn build(&mut self) -> SccResult {
        SccResult {
            load_millis: self.load_millis,
            compute_millis: self.compute_millis,
            write_millis: self.write_millis,
            set_count: self.set_count,
            min_set_size: self.min_set_size,
            max_set_size: self.max_set_size,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn unset_fields_default_to_zero() {
        let result = SccResult::builder().build();
        assert_eq!(result.load_millis, 0);
        assert_eq!(result.compute_millis, 0);
        assert_eq!(result.write_millis, 0);
        assert_eq!(result.set_count, 0);
        assert_eq!(result.min_set_size, 0);
        assert_eq!(result.max_set_size, 0);
    }

    #[test]
    fn setters_carry_into_the_record() {
        let result = SccResult::builder()
            .with_load_millis(3)
            .with_compute_millis(5)
            .with_write_millis(7)
            .with_set_count(4)
            .with_min_set_size(1)
            .with_max_set_size(9)
            .build();

        assert_eq!(result.load_millis, 3);
        assert_eq!(result.compute_millis, 5);
        assert_eq!(result.write_millis, 7);
        assert_eq!(result.set_count, 4);
        assert_eq!(result.min_set_size, 1);
        assert_eq!(result.max_set_size, 9);
    }

    #[test]
    fn phase_timers_pass_values_through_and_record() {
        let mut builder = ShortestPathsResult::builder();

        let answer = builder.time_compute(|| {
            thread::sleep(Duration::from_millis(20));
            42
        });
        assert_eq!(answer, 42);

        let result = builder.build();
        assert!(result.compute_millis >= 10);
        assert_eq!(result.load_millis, 0);
    }

    #[test]
    fn distances_payload_is_handed_over() {
        let result = ShortestPathsResult::builder()
            .with_distances(vec![0.0, 2.5, f64::INFINITY])
            .build();
        assert_eq!(result.distances.len(), 3);
        assert_eq!(result.distances[1], 2.5);
    }
}
