use std::time::SystemTimeError;
use thiserror::Error;

/// Errors raised while constructing an [`IdGenerator`](crate::IdGenerator).
///
/// Generation itself never fails; once a generator exists every call
/// produces a token.
#[derive(Debug, Error)]
pub enum IdError {
    /// The wall clock reads before the Unix epoch, so the random source
    /// has nothing to be seeded with.
    #[error("cannot seed random source: system clock is before the Unix epoch ({0})")]
    Clock(#[source] SystemTimeError),

    /// An explicitly configured host name would break the token format.
    #[error("invalid configured hostname: {0}")]
    InvalidHostname(#[source] HostnameError),
}

/// Failure to obtain the local host name.
///
/// Never surfaced by the generator: construction substitutes
/// [`FALLBACK_HOSTNAME`](crate::hostname::FALLBACK_HOSTNAME) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostnameError {
    #[error("local hostname is unavailable")]
    Unavailable,

    #[error("hostname '{hostname}' is not usable in a token: {reason}")]
    Invalid { hostname: String, reason: String },
}

impl HostnameError {
    pub(crate) fn invalid<T: std::fmt::Display>(hostname: &str, reason: T) -> Self {
        Self::Invalid {
            hostname: hostname.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_hostname_keeps_its_source() {
        let err = IdError::InvalidHostname(HostnameError::invalid("a b", "contains whitespace"));
        assert_eq!(
            err.to_string(),
            "invalid configured hostname: hostname 'a b' is not usable in a token: contains whitespace"
        );
        let source = err.source().expect("source");
        assert_eq!(
            source.to_string(),
            "hostname 'a b' is not usable in a token: contains whitespace"
        );
    }

    #[test]
    fn display_names_the_hostname() {
        let err = HostnameError::invalid("", "empty");
        assert_eq!(err.to_string(), "hostname '' is not usable in a token: empty");
    }
}
