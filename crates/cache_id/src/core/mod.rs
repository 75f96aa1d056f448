pub mod generator;
pub mod token;

pub use generator::{GeneratorConfig, IdGenerator};
pub use token::Token;
