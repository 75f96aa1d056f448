pub mod resolver;

pub use resolver::{HostnameResolver, StaticHostname, SystemHostname, resolve_local_hostname};

use crate::error::HostnameError;

/// Host name used when the local one cannot be resolved.
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// Check that a host name can be used as the last token segment.
pub fn validate_hostname(hostname: &str) -> Result<(), HostnameError> {
    if hostname.is_empty() {
        return Err(HostnameError::invalid(hostname, "empty"));
    }
    if hostname.chars().any(char::is_whitespace) {
        return Err(HostnameError::invalid(hostname, "contains whitespace"));
    }
    Ok(())
}

/// Resolve through `resolver`, substituting [`FALLBACK_HOSTNAME`] on any failure.
///
/// Returns the chosen name and whether the fallback was used.
pub(crate) fn resolve_or_fallback(resolver: &dyn HostnameResolver) -> (String, bool) {
    match resolver
        .resolve()
        .and_then(|name| validate_hostname(&name).map(|()| name))
    {
        Ok(name) => (name, false),
        Err(err) => {
            tracing::debug!(error = %err, fallback = FALLBACK_HOSTNAME, "hostname resolution failed");
            (FALLBACK_HOSTNAME.to_string(), true)
        }
    }
}
