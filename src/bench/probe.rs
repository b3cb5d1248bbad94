use std::time::{Duration, Instant};

use crate::core::error::Result;
use crate::memory::tracking;

/// Run `f`, reporting its value, wall-clock duration, and the peak
/// live-heap delta relative to a snapshot taken just before the span.
/// A failing closure propagates its error; no partial measurement leaks.
pub fn measure<T>(f: impl FnOnce() -> Result<T>) -> Result<(T, Duration, usize)> {
    let baseline = tracking::reset_peak();
    let start = Instant::now();

    let value = f()?;

    let elapsed = start.elapsed();
    let peak_delta = tracking::peak().saturating_sub(baseline);

    Ok((value, elapsed, peak_delta))
}
