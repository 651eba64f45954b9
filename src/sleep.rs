//! Interruptible sleep.
//!
//! A daemon nap must end the moment a termination signal arrives.
//! `std::thread::sleep` loops until the full duration has elapsed even when
//! interrupted, so this module calls the OS sleep directly and treats an
//! interrupted sleep as complete.

use std::time::Duration;

use nix::errno::Errno;
use nix::sys::time::TimeSpec;
use nix::time::{clock_nanosleep, ClockId, ClockNanosleepFlags};
use tracing::warn;

/// Block the calling thread for approximately `secs` seconds.
///
/// Zero, negative, and non-finite durations are a no-op, so callers may
/// pass computed backoff deltas without branching. If a signal interrupts
/// the sleep, the call returns immediately without resuming the remainder;
/// a shorter sleep is the price of fast shutdown. Any other failure is
/// logged as a warning and absorbed.
pub fn sleep_seconds(secs: f64) {
    if secs <= 0.0 || !secs.is_finite() {
        return;
    }

    let Ok(duration) = Duration::try_from_secs_f64(secs) else {
        warn!(secs, "sleep duration not representable, skipping");
        return;
    };

    let request = TimeSpec::from_duration(duration);
    match clock_nanosleep(
        ClockId::CLOCK_MONOTONIC,
        ClockNanosleepFlags::empty(),
        &request,
    ) {
        Ok(_) => {}
        // Interrupted: wake early, do not retry the remainder
        Err(Errno::EINTR) => {}
        Err(errno) => warn!(error = %errno, "sleep failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_non_positive_durations_are_noops() {
        let start = Instant::now();
        sleep_seconds(0.0);
        sleep_seconds(-1.0);
        sleep_seconds(-0.001);
        sleep_seconds(f64::NAN);
        sleep_seconds(f64::NEG_INFINITY);
        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn test_sleeps_for_requested_duration() {
        let start = Instant::now();
        sleep_seconds(0.05);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(45), "slept {elapsed:?}");
        assert!(elapsed < Duration::from_secs(1), "slept {elapsed:?}");
    }

    #[test]
    fn test_fractional_seconds() {
        let start = Instant::now();
        sleep_seconds(0.012);
        assert!(start.elapsed() >= Duration::from_millis(11));
    }

    /// A signal landing mid-sleep must wake the thread immediately; the
    /// remainder is not resumed.
    #[test]
    fn test_signal_interrupts_sleep_without_retry() {
        use nix::sys::pthread::{pthread_kill, pthread_self};
        use nix::sys::signal::Signal;
        use std::sync::atomic::AtomicBool;
        use std::sync::{mpsc, Arc};

        // A handler must exist or SIGUSR1 would kill the test process.
        let seen = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(signal_hook::consts::SIGUSR1, Arc::clone(&seen))
            .expect("register SIGUSR1 handler");

        let (tid_tx, tid_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();
        let (exit_tx, exit_rx) = mpsc::channel::<()>();

        let sleeper = std::thread::spawn(move || {
            tid_tx.send(pthread_self()).unwrap();
            let start = Instant::now();
            sleep_seconds(5.0);
            done_tx.send(start.elapsed()).unwrap();
            // Stay alive until the test is done delivering signals.
            let _ = exit_rx.recv();
        });

        let tid = tid_rx.recv().unwrap();
        let elapsed = loop {
            pthread_kill(tid, Signal::SIGUSR1).expect("deliver SIGUSR1");
            match done_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(elapsed) => break elapsed,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(err) => panic!("sleeper thread vanished: {err}"),
            }
        };
        exit_tx.send(()).unwrap();
        sleeper.join().unwrap();

        assert!(
            elapsed < Duration::from_secs(4),
            "sleep was not cut short by the signal: {elapsed:?}"
        );
    }
}
