//! Typed access to process environment variables.
//!
//! This crate provides typed getters over the process environment with
//! optional defaults and required-key validation, plus a one-time,
//! non-overriding load of a local `.env` file.
//!
//! ```no_run
//! use envsafe::Env;
//!
//! let env = Env::new();
//! env.load_dotenv();
//!
//! let port = env.get_int("PORT", Some(8080))?;
//! let debug = env.get_bool("DEBUG", Some(false))?;
//! env.require(&["DATABASE_URL"])?;
//! # Ok::<(), envsafe::EnvError>(())
//! ```

mod env;
mod error;
mod loader;
mod parsers;

pub use env::Env;
pub use error::{EnvError, Reason};
pub use loader::load_env_once;
