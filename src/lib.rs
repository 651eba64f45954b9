#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! # daemon-osutil: OS utility layer for background network daemons
//!
//! A small, synchronous library covering the OS-facing chores every
//! long-running daemon needs but none wants to reimplement:
//!
//! - **Logging**: one-shot process-wide channel initialization routing
//!   [`tracing`] events to the system log in production or to a compact
//!   stderr line format for diagnostics ([`log`])
//! - **Format validators**: fixed-length lowercase hex and base32
//!   membership checks ([`verify`])
//! - **Environment config**: fail-fast retrieval of required environment
//!   variables with suffix concatenation ([`env`])
//! - **Timing jitter**: a clock-seeded pseudo-random source sampling the
//!   closed interval `[-1, 1]` ([`jitter`])
//! - **Monotonic clock**: elapsed-seconds reads immune to wall-clock
//!   adjustment ([`clock`])
//! - **Interruptible sleep**: a sleep that wakes early on signal delivery
//!   instead of resuming, for fast shutdown ([`sleep`])
//!
//! Every component is a leaf: none calls another except through the shared
//! logging channel, and none spawns concurrent work.
//!
//! ## Error model
//!
//! Fallible operations return [`Result`] with a distinguished [`Error`].
//! Errors from this layer are non-recoverable misconfiguration; the
//! [`OrExit`] extension restores the conventional daemon behavior of
//! logging the failure and terminating with a non-zero status:
//!
//! ```rust,no_run
//! use daemon_osutil::{Config, OrExit};
//!
//! let config = Config::load().or_exit();
//! daemon_osutil::log::init(&config).or_exit();
//!
//! let socket = daemon_osutil::env::require_with_suffix("DAEMON_HOME", "/run.sock").or_exit();
//! let mut jitter = daemon_osutil::Jitter::from_clock();
//! let delay = 5.0 + jitter.symmetric_unit();
//! daemon_osutil::sleep::sleep_seconds(delay);
//! ```
//!
//! ## Threading
//!
//! No internal synchronization is promised beyond what each type documents.
//! [`Jitter`] is a plain owned context; a multi-threaded caller wraps it in
//! its own lock. Log emission is safe from any thread once initialized.

// Private modules
mod error;

// Public modules
pub mod clock;
pub mod config;
pub mod env;
pub mod jitter;
pub mod log;
pub mod sleep;
pub mod verify;

// Public exports
pub use config::{Config, ConfigBuilder, LogLevel, LogMode};
pub use error::{Error, ErrorCode, OrExit, Result};
pub use jitter::Jitter;

/// Version of the daemon-osutil library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable prefix for crate configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "OSUTIL_";
