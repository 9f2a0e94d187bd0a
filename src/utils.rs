//! Timing support for the perf binaries.

use std::time::Instant;

/// Collects wall-clock timings across repeated runs of the same workload
/// and reports per-operation statistics.
///
/// Call [`start`](Self::start) and [`stop`](Self::stop) around each run;
/// [`summary`](Self::summary) then averages over `n_ops` operations per
/// run.
pub struct RunTimer {
    timings: Vec<u128>,
    started: Instant,
    n_ops: usize,
}

impl RunTimer {
    pub fn new(n_runs: usize, n_ops: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            started: Instant::now(),
            n_ops,
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.timings.push(self.started.elapsed().as_nanos());
    }

    /// Returns minimum, maximum, and average time per operation in
    /// nanoseconds over the recorded runs.
    pub fn summary(&self) -> (u128, u128, u128) {
        let per_run = self.n_ops.max(1) as u128;
        let min = self.timings.iter().min().copied().unwrap_or(0) / per_run;
        let max = self.timings.iter().max().copied().unwrap_or(0) / per_run;
        let avg = if self.timings.is_empty() {
            0
        } else {
            self.timings.iter().sum::<u128>() / (self.timings.len() as u128 * per_run)
        };
        (min, max, avg)
    }
}
