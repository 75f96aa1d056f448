use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::token::write_token;
use crate::error::IdError;
use crate::hostname::{self, HostnameResolver, SystemHostname};


/// Construction options for [`IdGenerator`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Host name to embed instead of resolving the local one (default: resolve)
    pub hostname: Option<String>,
    /// Seed for the random source (default: wall clock in milliseconds)
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit host name
    pub fn hostname<S: Into<String>>(mut self, hostname: S) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set an explicit random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

struct State {
    counter: u64,
    rng: StdRng,
}

/// Produces reasonably unique tokens of the form
/// `<epoch-millis>.<16 hex counter>-<8 hex random>.<hostname>`.
///
/// One instance is meant to be shared across threads. Each call takes the
/// internal lock once, so counter values handed out are strictly increasing
/// in lock order and never repeat.
pub struct IdGenerator {
    hostname: String,
    state: Mutex<State>,
}

fn millis_since_epoch(now: SystemTime) -> Result<u64, SystemTimeError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

fn epoch_millis() -> Result<u64, SystemTimeError> {
    millis_since_epoch(SystemTime::now())
}

/// Explicit seed if configured, otherwise the clock reading `now`.
fn seed_at(seed: Option<u64>, now: SystemTime) -> Result<u64, IdError> {
    match seed {
        Some(seed) => Ok(seed),
        None => millis_since_epoch(now).map_err(IdError::Clock),
    }
}

impl IdGenerator {
    /// Resolve the local host name and seed from the wall clock.
    pub fn new() -> Result<Self, IdError> {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Result<Self, IdError> {
        Self::with_resolver(config, &SystemHostname)
    }

    /// Build with a custom host name source. The resolver is consulted only
    /// when the config carries no explicit host name; its failures fall back
    /// to [`FALLBACK_HOSTNAME`](crate::hostname::FALLBACK_HOSTNAME).
    pub fn with_resolver(
        config: GeneratorConfig,
        resolver: &dyn HostnameResolver,
    ) -> Result<Self, IdError> {
        let (hostname, fallback) = match config.hostname {
            Some(name) => {
                hostname::validate_hostname(&name).map_err(IdError::InvalidHostname)?;
                (name, false)
            }
            None => hostname::resolve_or_fallback(resolver),
        };

        let seed = seed_at(config.seed, SystemTime::now())?;

        tracing::debug!(
            hostname = hostname.as_str(),
            fallback,
            explicit_seed = config.seed.is_some(),
            "id generator ready"
        );

        Ok(Self {
            hostname,
            state: Mutex::new(State {
                counter: 0,
                rng: StdRng::seed_from_u64(seed),
            }),
        })
    }

    /// Host name embedded in every token of this generator.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Append one token to `buffer`, leaving its existing contents intact.
    pub fn generate_into(&self, buffer: &mut String) {
        // A panic cannot leave State half-updated, so a poisoned lock is still usable.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.counter = state.counter.wrapping_add(1);
        let counter = state.counter;
        let random: i32 = state.rng.random();
        let now = epoch_millis().unwrap_or_default();
        // Writing into a String cannot fail.
        let _ = write_token(buffer, now, counter, random as u32, &self.hostname);
    }

    /// Return a freshly allocated token.
    pub fn generate(&self) -> String {
        let mut buffer = String::new();
        self.generate_into(&mut buffer);
        buffer
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("hostname", &self.hostname)
            .finish_non_exhaustive()
    }
}
