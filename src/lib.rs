//! # maxcalc
//!
//! maxcalc is a small arithmetic expression interpreter written in Rust.
//! It parses expressions built from numbers, the binary operators
//! `+ - * / ^ #`, and parentheses into a syntax tree, then evaluates the
//! tree to a single `f64`. The `#` operator takes the maximum of its two
//! operands and binds loosest of all operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// together represent a parsed expression as a binary tree. The tree is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the leaf (numeric literal) and internal (binary operation) node
///   shapes.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised before evaluation:
/// malformed numeric literals, token mismatches, and trailing input.
/// Each error carries the source line and renders a human-readable message.
///
/// # Responsibilities
/// - Defines the `ParseError` enum for all failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing, and evaluation.
///
/// This module ties together the lexer, parser, and evaluator that turn an
/// input string into a numeric result. It contains no state of its own;
/// every `parse` call owns its token stream and tree.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;

pub use crate::interpreter::evaluator::evaluate;

/// Parses an expression string into a syntax tree.
///
/// The input is tokenized in full first; a malformed numeric literal aborts
/// with [`ParseError::IllegalNumber`] before parsing begins. The parser then
/// consumes the whole token stream; any tokens left over after a complete
/// expression are an error, so a returned tree always covers the entire
/// input.
///
/// # Errors
/// Returns a [`ParseError`] describing the first lexical or syntactic
/// failure. No partial tree is returned.
///
/// # Examples
/// ```
/// use maxcalc::parse;
///
/// assert!(parse("(1 + 2) * 3").is_ok());
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::IllegalNumber { literal: lexer.slice().to_string(),
                                                   line:    lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }

    Ok(expr)
}

/// Parses and evaluates an expression string in one step.
///
/// # Errors
/// Returns a [`ParseError`] if the input fails to lex or parse. Evaluation
/// itself cannot fail; division by zero follows IEEE-754 semantics and
/// yields an infinity or NaN result instead of an error.
///
/// # Examples
/// ```
/// use maxcalc::interpret;
///
/// // `^` is right-associative: 2^(3^2), not (2^3)^2.
/// assert_eq!(interpret("2^3^2").unwrap(), 512.0);
///
/// // `#` is the binary maximum, binding loosest.
/// assert_eq!(interpret("2+3#4-1").unwrap(), 5.0);
/// ```
pub fn interpret(source: &str) -> Result<f64, ParseError> {
    let tree = parse(source)?;
    Ok(evaluate(&tree))
}
