use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_max},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the maximum operator `#`, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := max`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_max(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - parenthesized expressions
///
/// Grammar: `primary := NUMBER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`], or [`ParseError::ExpectedNumber`] when the
/// current token (or end of input) cannot begin a primary expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), line)) => {
            let literal = Expr::Literal { value: *value,
                                          line:  *line, };
            tokens.next();
            Ok(literal)
        },
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((token, line)) => {
            Err(ParseError::ExpectedNumber { found: token.to_string(),
                                             line:  *line, })
        },
        None => {
            Err(ParseError::ExpectedNumber { found: "end of input".to_string(),
                                             line:  0, })
        },
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// The opening parenthesis must be the current token. A missing closing
/// parenthesis yields [`ParseError::ExpectedClosingParen`] reported at the
/// line of the opening parenthesis.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `(` token.
///
/// # Returns
/// The inner expression; the surrounding parentheses leave no node behind.
pub fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    tokens.next(); // consume '('

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
