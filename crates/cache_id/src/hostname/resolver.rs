use crate::error::HostnameError;

/// Source of the local host name.
pub trait HostnameResolver: Send + Sync {
    fn resolve(&self) -> Result<String, HostnameError>;
}

/// Asks the operating system for the host name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameResolver for SystemHostname {
    fn resolve(&self) -> Result<String, HostnameError> {
        resolve_local_hostname()
    }
}

/// Always resolves to the same name.
#[derive(Debug, Clone)]
pub struct StaticHostname(String);

impl StaticHostname {
    pub fn new<S: Into<String>>(hostname: S) -> Self {
        Self(hostname.into())
    }
}

impl HostnameResolver for StaticHostname {
    fn resolve(&self) -> Result<String, HostnameError> {
        Ok(self.0.clone())
    }
}

/// Platform hostname lookup.
pub fn resolve_local_hostname() -> Result<String, HostnameError> {
    sysinfo::System::host_name()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(HostnameError::Unavailable)
}
