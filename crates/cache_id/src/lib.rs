//! Reasonably unique identifier tokens.
//!
//! A token looks like `1700000000000.0000000000000001-1a2b3c4d.myhost`: the
//! wall clock in milliseconds, a per-generator counter, a pseudo-random
//! value, and the local host name. Tokens suit cache keys and log
//! correlation; they are not security tokens.

pub mod core;
pub mod error;
pub mod hostname;

// Re-export commonly used types at the crate root
pub use crate::core::*;
pub use error::{HostnameError, IdError, TokenParseError};
pub use hostname::{FALLBACK_HOSTNAME, HostnameResolver, StaticHostname, SystemHostname};

use once_cell::sync::OnceCell;

static SHARED: OnceCell<IdGenerator> = OnceCell::new();

/// Process-wide generator, built with defaults on first use.
pub fn shared() -> Result<&'static IdGenerator, IdError> {
    SHARED.get_or_try_init(IdGenerator::new)
}

/// Draw a token from the [`shared`] generator.
pub fn generate() -> Result<String, IdError> {
    Ok(shared()?.generate())
}
