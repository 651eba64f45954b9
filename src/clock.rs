//! Monotonic time reads.
//!
//! `CLOCK_MONOTONIC` never decreases within a process run and is immune to
//! NTP corrections and manual wall-clock changes. The value has no
//! meaningful epoch; use it only for measuring elapsed durations.

use nix::sys::time::TimeSpec;
use nix::time::{clock_gettime, ClockId};

use crate::error::{Error, Result};

/// Raw monotonic clock read, shared with the jitter seeder.
pub(crate) fn monotonic() -> Result<TimeSpec> {
    clock_gettime(ClockId::CLOCK_MONOTONIC)
        .map_err(|errno| Error::clock_with_source("Failed to read monotonic clock", errno))
}

/// Current monotonic time in seconds (integer seconds plus nanosecond
/// fraction).
///
/// Non-decreasing across calls within one process run. Timeouts and jitter
/// seeding are built on this read, so an unreadable clock is unrecoverable:
/// the error is fatal and the documented handling is
/// [`OrExit`](crate::OrExit).
///
/// # Errors
///
/// Returns [`Error::Clock`] if the clock source cannot be read.
#[allow(clippy::cast_precision_loss)]
pub fn now_seconds() -> Result<f64> {
    let ts = monotonic()?;
    Ok(ts.tv_sec() as f64 + ts.tv_nsec() as f64 / 1e9)
}
