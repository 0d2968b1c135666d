//! Typed accessor over the process environment.
//!
//! Responsibilities:
//! - Retrieve raw environment values with optional defaulting.
//! - Delegate parsing to the type-specific parsers (see parsers.rs).
//! - Validate required keys and trigger the one-time `.env` load.
//!
//! Does NOT handle:
//! - `.env` discovery or filling (see loader.rs).
//!
//! Invariants:
//! - A variable set to the empty string is present, not missing; raw
//!   values are never trimmed or filtered before parsing.
//! - Defaults are returned verbatim and never pass through a parser;
//!   callers supply defaults already in the target type.
//! - `require` consults the environment directly and ignores defaults.

use serde_json::Value;

use crate::error::EnvError;
use crate::loader;
use crate::parsers;

/// Handle for typed environment variable access.
///
/// Reads go straight to the process environment; the handle itself holds
/// no state. `Env` never mutates the environment except through
/// [`Env::load_dotenv`], which only fills gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Env {
    pub fn new() -> Self {
        Self
    }

    /// Load `.env` into the process environment, at most once per
    /// process. See [`crate::load_env_once`].
    pub fn load_dotenv(&self) {
        loader::load_env_once();
    }

    /// Raw lookup. A non-unicode value is treated as absent.
    fn raw(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    /// Get a variable as a string.
    ///
    /// Returns the raw value if set, the default if given, and an error
    /// with reason [`Reason::Missing`](crate::Reason::Missing) otherwise.
    pub fn get_str(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
        match self.raw(key) {
            Some(val) => Ok(val),
            None => default
                .map(str::to_owned)
                .ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Get a variable parsed as a base-10 integer.
    ///
    /// The default, if used, is returned as-is without parsing.
    pub fn get_int(&self, key: &str, default: Option<i64>) -> Result<i64, EnvError> {
        match self.raw(key) {
            Some(val) => parsers::parse_int(key, &val),
            None => default.ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Get a variable parsed as a floating-point number.
    ///
    /// The default, if used, is returned as-is without parsing.
    pub fn get_float(&self, key: &str, default: Option<f64>) -> Result<f64, EnvError> {
        match self.raw(key) {
            Some(val) => parsers::parse_float(key, &val),
            None => default.ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Get a variable parsed as a boolean.
    ///
    /// Accepts, case-insensitively, "1"/"true"/"yes"/"on" and
    /// "0"/"false"/"no"/"off". The default, if used, is returned as-is
    /// without parsing.
    pub fn get_bool(&self, key: &str, default: Option<bool>) -> Result<bool, EnvError> {
        match self.raw(key) {
            Some(val) => parsers::parse_bool(key, &val),
            None => default.ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Get a variable split on commas into a list of trimmed, non-empty
    /// fragments. An empty value yields an empty list.
    ///
    /// The default, if used, is returned as-is without splitting.
    pub fn get_list(
        &self,
        key: &str,
        default: Option<Vec<String>>,
    ) -> Result<Vec<String>, EnvError> {
        self.get_list_sep(key, ",", default)
    }

    /// Like [`Env::get_list`] with a caller-supplied separator.
    pub fn get_list_sep(
        &self,
        key: &str,
        sep: &str,
        default: Option<Vec<String>>,
    ) -> Result<Vec<String>, EnvError> {
        match self.raw(key) {
            Some(val) => Ok(parsers::parse_list(&val, sep)),
            None => default.ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Get a variable parsed as a JSON value.
    ///
    /// The default, if used, is returned as-is without parsing.
    pub fn get_json(&self, key: &str, default: Option<Value>) -> Result<Value, EnvError> {
        match self.raw(key) {
            Some(val) => parsers::parse_json(key, &val),
            None => default.ok_or_else(|| EnvError::missing(key)),
        }
    }

    /// Fail with the first key, left to right, that is not set in the
    /// environment. Defaults are never consulted.
    pub fn require(&self, keys: &[&str]) -> Result<(), EnvError> {
        for key in keys {
            if std::env::var_os(key).is_none() {
                return Err(EnvError::missing(key));
            }
        }
        Ok(())
    }
}
