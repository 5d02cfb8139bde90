/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include malformed numeric literals, unexpected
/// tokens, missing parentheses, and trailing input.
pub mod parse_error;

pub use parse_error::ParseError;
