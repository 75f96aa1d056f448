use thiserror::Error;

/// Reasons a string is not a well-formed token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenParseError {
    #[error("missing '.' after the timestamp")]
    MissingTimestamp,

    #[error("invalid timestamp '{0}'")]
    Timestamp(String),

    #[error("invalid counter segment '{0}': expected 16 lowercase hex digits")]
    Counter(String),

    #[error("invalid random segment '{0}': expected 8 lowercase hex digits")]
    Random(String),

    #[error("expected '{expected}' at byte {position}")]
    Separator { expected: char, position: usize },

    #[error("invalid hostname '{0}'")]
    Hostname(String),
}
