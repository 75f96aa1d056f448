mod id_error;
mod parse_error;

pub use id_error::{HostnameError, IdError};
pub use parse_error::TokenParseError;
