/// Core parsing logic: the expression entry point and atomic expressions.
///
/// Contains the shared result type, the top-level `parse_expression`
/// function, and parsing of literals and parenthesized groups.
pub mod core;

/// Binary operator parsing.
///
/// Implements the operator-precedence ladder, from the loosest-binding
/// maximum operator `#` down to right-associative exponentiation.
pub mod binary;
