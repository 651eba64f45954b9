//! Fail-fast environment configuration access.
//!
//! A daemon that starts without its required environment is misconfigured
//! beyond repair; the contract here is "succeed or abort", never a sentinel
//! the caller has to remember to check.

use crate::error::{Error, Result};

/// Look up the required environment variable `var` and return its value
/// with `suffix` appended (no separator).
///
/// The returned `String` is freshly allocated and owned by the caller. The
/// happy path never yields an empty sentinel: if `var` is unset (or holds
/// non-Unicode data) the result is a fatal [`Error`] naming the variable.
/// Route it through [`OrExit`](crate::OrExit) to get the conventional
/// log-and-terminate daemon behavior.
///
/// # Errors
///
/// Returns [`Error::Env`] when the variable is absent or not valid
/// Unicode. Both are non-recoverable misconfiguration.
pub fn require_with_suffix(var: &str, suffix: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) => {
            let mut buf = String::with_capacity(value.len() + suffix.len());
            buf.push_str(&value);
            buf.push_str(suffix);
            Ok(buf)
        }
        Err(std::env::VarError::NotPresent) => Err(Error::env_missing(var)),
        Err(std::env::VarError::NotUnicode(_)) => Err(Error::env_not_unicode(var)),
    }
}
