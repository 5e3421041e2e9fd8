// SPDX-License-Identifier: Apache-2.0

//! Wall-clock harness for comparing representation cost.
//!
//! The harness owns no matching logic: it splits a corpus into lines, builds
//! one [`Pattern`], and runs [`is_match`] per line under the chosen view,
//! timing the loop with [`Instant`] (monotonic, immune to wall-clock
//! adjustments). Intended use is one call per view over the same corpus,
//! comparing the elapsed times.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::matcher::is_match;
use crate::pattern::Pattern;
use crate::view::TextView;

/// Outcome of one harness run: what was matched, under which view, how fast.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// View name ([`TextView::NAME`]).
    pub representation: &'static str,
    /// Lines in the corpus.
    pub lines: usize,
    /// Lines the pattern matched.
    pub matches: usize,
    /// Wall-clock time spent inside the match loop.
    pub elapsed: Duration,
}

/// Time `pattern` against every line of `corpus` under view `R`.
pub fn benchmark_report<R>(pattern: &str, corpus: &str) -> BenchReport
where
    R: for<'a> TextView<'a>,
{
    let pattern = Pattern::new(pattern);
    let lines: Vec<&str> = corpus.lines().collect();
    let mut matches = 0usize;

    let start = Instant::now();
    for line in &lines {
        if is_match::<R>(&pattern, line) {
            matches += 1;
        }
    }
    let elapsed = start.elapsed();
    // Keep the loop observable to the optimizer.
    black_box(matches);

    BenchReport {
        representation: name_of::<R>(),
        lines: lines.len(),
        matches,
        elapsed,
    }
}

/// [`benchmark_report`] reduced to the elapsed time.
pub fn benchmark<R>(pattern: &str, corpus: &str) -> Duration
where
    R: for<'a> TextView<'a>,
{
    benchmark_report::<R>(pattern, corpus).elapsed
}

fn name_of<R: for<'a> TextView<'a>>() -> &'static str {
    <R as TextView<'static>>::NAME
}
