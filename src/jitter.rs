//! Pseudo-random timing jitter.
//!
//! Many near-simultaneous daemon starts must not retry in lockstep, so each
//! process derives a generator seed from its own monotonic clock reading.
//! The generator is deliberately not cryptographic; it only needs to
//! decorrelate timing decisions across processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::clock;

/// Seed used when the clock cannot be read at construction time. A shared
/// seed degrades jitter quality but keeps the daemon running.
const FALLBACK_SEED: u64 = 0;

/// Shared pseudo-random generator state for timing jitter.
///
/// Construct one per process (or per component) and pass it where needed;
/// there is no ambient global. The type does no internal locking: a
/// multi-threaded caller wraps it in its own mutex.
#[derive(Debug)]
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    /// Seed a generator from the monotonic clock.
    ///
    /// The seed is the 32-bit integer-seconds component rotated left by 29
    /// bits, XOR-ed with the 32-bit nanoseconds component, so processes
    /// started within the same second still diverge. If the clock cannot
    /// be read this logs a warning and falls back to a fixed seed; seeding
    /// failure is soft, unlike direct clock reads.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_clock() -> Self {
        match clock::monotonic() {
            Ok(ts) => {
                let secs = ts.tv_sec() as u32;
                let nanos = ts.tv_nsec() as u32;
                Self::from_seed(u64::from(secs.rotate_left(29) ^ nanos))
            }
            Err(err) => {
                warn!(error = %err, "failed to seed jitter source, falling back to default seed");
                Self::from_seed(FALLBACK_SEED)
            }
        }
    }

    /// Seed a generator deterministically, for tests and reproducible runs.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One sample uniformly distributed over the closed interval `[-1, 1]`.
    ///
    /// Callers scale this into whatever timing decision needs spreading,
    /// e.g. `delay * (1.0 + 0.1 * jitter.symmetric_unit())`.
    pub fn symmetric_unit(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
