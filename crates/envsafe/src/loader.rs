//! One-time seeding of the process environment from a `.env` file.
//!
//! Responsibilities:
//! - Discover the nearest `.env` file and merge it into the process
//!   environment without overriding existing variables.
//! - Guarantee the discovery-and-fill sequence runs at most once per
//!   process, even under concurrent first calls.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Typed retrieval or parsing of variables (see env.rs).
//!
//! Invariants:
//! - Variables already present in the environment are never overwritten
//!   by file contents.
//! - A missing `.env` file is not an error; malformed files are tolerated
//!   and logged, never surfaced to the caller.
//! - Log output never includes raw `.env` line contents.
//! - The once-flag is never reset; a failed or skipped attempt still
//!   counts as the one load.

use std::sync::Once;

static LOADED: Once = Once::new();

/// Load `.env` into the process environment, at most once per process.
///
/// Discovery walks up from the current working directory to the nearest
/// file named `.env`; if that finds nothing, the working directory's
/// `.env` is tried directly. Existing environment variables always win
/// over file contents. Repeated calls are no-ops.
///
/// Setting `DOTENV_DISABLED` to `1` or `true` skips the file entirely.
pub fn load_env_once() {
    LOADED.call_once(seed_from_dotenv);
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

fn seed_from_dotenv() {
    if dotenv_disabled() {
        tracing::debug!("DOTENV_DISABLED set, skipping .env load");
        return;
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), ".env file loaded");
            return;
        }
        Err(e) if is_not_found(&e) => {}
        Err(e) => {
            warn_load_failure(&e);
            return;
        }
    }

    // Upward discovery found nothing; try the working directory candidate
    // directly.
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    let fallback = cwd.join(".env");
    match dotenvy::from_path(&fallback) {
        Ok(()) => tracing::debug!(path = %fallback.display(), ".env file loaded"),
        Err(e) if is_not_found(&e) => {}
        Err(e) => warn_load_failure(&e),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Log a tolerated load failure. Only the parse position or I/O error
/// kind is logged, never the offending line.
fn warn_load_failure(err: &dotenvy::Error) {
    match err {
        dotenvy::Error::LineParse(_, index) => {
            tracing::warn!(error_index = *index, "malformed .env file, load skipped");
        }
        dotenvy::Error::Io(io_err) => {
            tracing::warn!(kind = %io_err.kind(), "could not read .env file");
        }
        _ => tracing::warn!("could not load .env file"),
    }
}
