/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the tree post-order and combines child values with
/// the operator at each internal node. It is infallible: only trees produced
/// by a successful parse ever reach it.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Follows IEEE-754 semantics for division by zero and indeterminate
///   forms.
pub mod evaluator;
/// The lexer module tokenizes an expression string for further parsing.
///
/// The lexer reads the raw input text and produces a stream of tokens:
/// numeric literals, single-character operators, and parentheses. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric literals and operators.
/// - Reports lexical errors for malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a binary tree that encodes operator precedence and
/// associativity. It uses one token of lookahead and never backtracks.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar, reporting errors with location info.
pub mod parser;
