use std::fmt;
use std::str::FromStr;

use crate::error::TokenParseError;
use crate::hostname::validate_hostname;

const COUNTER_DIGITS: usize = 16;
const RANDOM_DIGITS: usize = 8;

/// Parsed form of a generated token:
/// `<epoch-millis>.<16 hex counter>-<8 hex random>.<hostname>`.
///
/// Tokens are only probabilistically unique. The counter gives an ordering
/// between tokens of the same generator; nothing orders tokens of different
/// generators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub timestamp_ms: u64,
    pub counter: u64,
    /// Bit pattern of the signed random draw.
    pub random: u32,
    pub hostname: String,
}

impl Token {
    /// The random draw as the signed value it was produced as.
    pub fn random_signed(&self) -> i32 {
        self.random as i32
    }
}

/// Append the textual form of one token.
pub(crate) fn write_token<W: fmt::Write>(
    out: &mut W,
    timestamp_ms: u64,
    counter: u64,
    random: u32,
    hostname: &str,
) -> fmt::Result {
    write!(
        out,
        "{}.{:0cw$x}-{:0rw$x}.{}",
        timestamp_ms,
        counter,
        random,
        hostname,
        cw = COUNTER_DIGITS,
        rw = RANDOM_DIGITS,
    )
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, self.timestamp_ms, self.counter, self.random, &self.hostname)
    }
}

fn is_lower_hex(segment: &str, digits: usize) -> bool {
    segment.len() == digits && segment.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn expect_byte(
    rest: &str,
    index: usize,
    expected: char,
    offset: usize,
) -> Result<(), TokenParseError> {
    match rest.as_bytes().get(index) {
        Some(&b) if b as char == expected => Ok(()),
        _ => Err(TokenParseError::Separator {
            expected,
            position: offset + index,
        }),
    }
}

impl FromStr for Token {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ts, rest) = s.split_once('.').ok_or(TokenParseError::MissingTimestamp)?;
        if ts.is_empty() || !ts.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenParseError::Timestamp(ts.to_string()));
        }
        let timestamp_ms = ts
            .parse::<u64>()
            .map_err(|_| TokenParseError::Timestamp(ts.to_string()))?;
        let offset = ts.len() + 1;

        let counter_end = COUNTER_DIGITS;
        let counter_hex = rest.get(..counter_end).unwrap_or(rest);
        if !is_lower_hex(counter_hex, COUNTER_DIGITS) {
            return Err(TokenParseError::Counter(counter_hex.to_string()));
        }
        let counter = u64::from_str_radix(counter_hex, 16)
            .map_err(|_| TokenParseError::Counter(counter_hex.to_string()))?;
        expect_byte(rest, counter_end, '-', offset)?;

        let random_start = counter_end + 1;
        let random_end = random_start + RANDOM_DIGITS;
        let random_hex = rest
            .get(random_start..random_end)
            .or_else(|| rest.get(random_start..))
            .unwrap_or_default();
        if !is_lower_hex(random_hex, RANDOM_DIGITS) {
            return Err(TokenParseError::Random(random_hex.to_string()));
        }
        let random = u32::from_str_radix(random_hex, 16)
            .map_err(|_| TokenParseError::Random(random_hex.to_string()))?;
        expect_byte(rest, random_end, '.', offset)?;

        let hostname = rest.get(random_end + 1..).unwrap_or_default();
        validate_hostname(hostname).map_err(|_| TokenParseError::Hostname(hostname.to_string()))?;

        Ok(Self {
            timestamp_ms,
            counter,
            random,
            hostname: hostname.to_string(),
        })
    }
}
