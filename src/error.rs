//! Error handling for the daemon-osutil layer.
//!
//! Every failure this layer can report is non-recoverable misconfiguration
//! of the host process: a required environment variable is absent, the
//! monotonic clock cannot be read, or the logging channel cannot be opened.
//! Operations therefore return a distinguished [`Error`] rather than an
//! error a caller is expected to handle and continue from.
//!
//! The conventional daemon treatment of these failures is to log and
//! terminate. The [`OrExit`] extension trait restores that behavior at the
//! top level:
//!
//! ```rust,no_run
//! use daemon_osutil::OrExit;
//!
//! let home = daemon_osutil::env::require_with_suffix("DAEMON_HOME", "/queue").or_exit();
//! ```
//!
//! Soft conditions (clock unreadable while seeding the jitter source, a
//! sleep failing for a reason other than interruption) are logged as
//! warnings inside the affected component and never surface here.

/// Result type alias for daemon-osutil operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error code enum for categorizing and identifying errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Configuration errors: 1000-1999
    /// Crate configuration failed validation
    ConfigInvalid = 1000,
    /// Crate configuration could not be loaded or parsed
    ConfigParse = 1001,

    // Environment errors: 2000-2999
    /// A required environment variable is not set
    EnvMissing = 2000,
    /// A required environment variable holds non-Unicode data
    EnvNotUnicode = 2001,

    // Logging errors: 3000-3999
    /// The process-wide logging channel could not be opened
    LogInitFailed = 3000,

    // Clock errors: 4000-4999
    /// The monotonic clock source could not be read
    ClockUnavailable = 4000,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.as_str(), *self as i32)
    }
}

impl ErrorCode {
    /// Convert error code to string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::ConfigParse => "CONFIG_PARSE",
            Self::EnvMissing => "ENV_MISSING",
            Self::EnvNotUnicode => "ENV_NOT_UNICODE",
            Self::LogInitFailed => "LOG_INIT_FAILED",
            Self::ClockUnavailable => "CLOCK_UNAVAILABLE",
        }
    }
}

/// Error type for all daemon-osutil operations.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Crate configuration errors
    #[error("Configuration error [{code}]: {message}")]
    Config {
        /// Error code for structured error handling
        code: ErrorCode,
        /// Human-readable error message
        message: String,
    },

    /// Required environment variable errors
    #[error("Environment error [{code}]: variable {name} {message}")]
    Env {
        /// Error code for structured error handling
        code: ErrorCode,
        /// Name of the offending environment variable
        name: String,
        /// Human-readable error message
        message: String,
    },

    /// Logging channel initialization errors
    #[error("Logging error [{code}]: {message}")]
    Log {
        /// Error code for structured error handling
        code: ErrorCode,
        /// Human-readable error message
        message: String,
    },

    /// Monotonic clock errors
    #[error("Clock error [{code}]: {message}")]
    Clock {
        /// Error code for structured error handling
        code: ErrorCode,
        /// Human-readable error message
        message: String,
        /// Underlying OS error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl Error {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            code: ErrorCode::ConfigInvalid,
            message: message.into(),
        }
    }

    /// Create an error for a missing required environment variable.
    pub fn env_missing<S: Into<String>>(name: S) -> Self {
        Self::Env {
            code: ErrorCode::EnvMissing,
            name: name.into(),
            message: String::from("is not set"),
        }
    }

    /// Create an error for an environment variable holding non-Unicode data.
    pub fn env_not_unicode<S: Into<String>>(name: S) -> Self {
        Self::Env {
            code: ErrorCode::EnvNotUnicode,
            name: name.into(),
            message: String::from("is not valid Unicode"),
        }
    }

    /// Create a new logging initialization error.
    pub fn log_init<S: Into<String>>(message: S) -> Self {
        Self::Log {
            code: ErrorCode::LogInitFailed,
            message: message.into(),
        }
    }

    /// Create a new clock error with the underlying OS error.
    pub fn clock_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Clock {
            code: ErrorCode::ClockUnavailable,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Config { code, .. }
            | Self::Env { code, .. }
            | Self::Log { code, .. }
            | Self::Clock { code, .. } => *code,
        }
    }

    /// Check if this error represents unrecoverable misconfiguration.
    ///
    /// Fatal errors must not be retried; the documented handling is
    /// [`OrExit::or_exit`] or an equivalent top-level abort.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Env { .. } | Self::Clock { .. } | Self::Log { .. }
        )
    }

    /// Get the error category for metrics/logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Env { .. } => "env",
            Self::Log { .. } => "log",
            Self::Clock { .. } => "clock",
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config {
            code: ErrorCode::ConfigParse,
            message: format!("Configuration loading failed: {err}"),
        }
    }
}

/// Extension trait terminating the process on a fatal error.
///
/// This is the default top-level handler for this layer's errors: the
/// failure is emitted through the logging channel (if initialized) and the
/// process exits with a failure status. Callers that propagate instead of
/// calling [`or_exit`](OrExit::or_exit) must still treat the error as
/// non-recoverable.
pub trait OrExit<T> {
    /// Unwrap the value, or log the error and terminate the process.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(code = %err.code(), "{err}");
                std::process::exit(1);
            }
        }
    }
}
