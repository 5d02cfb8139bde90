#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A run of characters looked like a number but is not a valid decimal
    /// literal.
    IllegalNumber {
        /// The offending text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A number or parenthesized expression was expected but not found.
    ExpectedNumber {
        /// The token encountered instead, or a description of end of input.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalNumber { literal, line } => {
                write!(f, "Error on line {line}: Illegal format for a number: {literal}.")
            },

            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected a number or parenthesis, found {found}.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
