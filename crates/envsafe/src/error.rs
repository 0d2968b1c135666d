//! Error type for environment retrieval and parsing.
//!
//! Responsibilities:
//! - Define the single error surfaced by every operation in this crate.
//! - Render errors as `[envsafe] {key}: {reason}` for display and logging.
//!
//! Does NOT handle:
//! - Dotenv file failures (tolerated and logged in loader.rs, never
//!   surfaced as errors).
//!
//! Invariants:
//! - Every error carries the variable name it was raised for.
//! - Reason codes are a closed set; the rendered text of each code is
//!   stable and part of the public contract.

use std::fmt;
use thiserror::Error;

/// Why an environment lookup or parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The variable is not set and no default was supplied.
    Missing,
    /// The value could not be parsed as a base-10 integer.
    ExpectedInt,
    /// The value could not be parsed as a floating-point number.
    ExpectedFloat,
    /// The value is not in the accepted truthy/falsy sets.
    ExpectedBool,
    /// The value is not valid JSON.
    ExpectedJson,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::Missing => "missing",
            Reason::ExpectedInt => "expected int",
            Reason::ExpectedFloat => "expected float",
            Reason::ExpectedBool => "expected bool",
            Reason::ExpectedJson => "expected valid JSON",
        };
        f.write_str(text)
    }
}

/// Error for a failed environment variable lookup or parse.
///
/// Callers can match on [`EnvError::reason`] instead of inspecting the
/// rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[envsafe] {key}: {reason}")]
pub struct EnvError {
    /// Name of the environment variable the failure is about.
    pub key: String,
    /// Fixed reason code for the failure.
    pub reason: Reason,
}

impl EnvError {
    pub fn new(key: impl Into<String>, reason: Reason) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }

    pub(crate) fn missing(key: &str) -> Self {
        Self::new(key, Reason::Missing)
    }
}
