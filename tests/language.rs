use maxcalc::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpret, parse,
};

fn assert_evaluates(src: &str, expected: f64) {
    match interpret(src) {
        Ok(value) => {
            assert_eq!(value, expected, "wrong result for {src:?}");
        },
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

fn literal(value: f64) -> Box<Expr> {
    Box::new(Expr::Literal { value, line: 1 })
}

#[test]
fn single_literals() {
    assert_evaluates("0", 0.0);
    assert_evaluates("42", 42.0);
    assert_evaluates("3.25", 3.25);
    assert_evaluates(".5", 0.5);
    assert_evaluates("1e3", 1000.0);
    assert_evaluates("  7\t", 7.0);
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("(1+2)*3", 9.0);
    assert_evaluates("2+3*2^2", 14.0);
    assert_evaluates("10/4", 2.5);
    assert_evaluates("8-5-2", 1.0);
}

#[test]
fn maximum_operator_binds_loosest() {
    assert_evaluates("2#3", 3.0);
    assert_evaluates("2+3#4-1", 5.0);
    assert_evaluates("1#2#0", 2.0);
    assert_evaluates("1+2^3/4-5+6/2+(2-4)^2#6", 6.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_evaluates("2^3", 8.0);
    assert_evaluates("2^3^2", 512.0);
    assert_evaluates("2^1^2#3^1", 3.0);
    assert_evaluates("2^2^2^2", 65536.0);
}

#[test]
fn mixed_end_to_end_expressions() {
    assert_evaluates("2+3/2^2#3/2*4+2^3", 14.0);
    assert_evaluates("2^(2^2#3^1)", 16.0);
    assert_evaluates("(2+3)/2^(2#3)/2*(4+2)^3", 67.5);
    assert_evaluates("1+2^3/4-5+6/2+(2-4)^2", 5.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("2 + 3\t* 4", 14.0);
    assert_evaluates("2\n+\n3", 5.0);
    assert_evaluates("\r\n 2^3 \r\n", 8.0);
}

#[test]
fn division_follows_ieee_semantics() {
    assert_eq!(interpret("1/0").unwrap(), f64::INFINITY);
    assert!(interpret("0/0").unwrap().is_nan());
    // NaN propagates through ancestor computations.
    assert!(interpret("1+0/0*2").unwrap().is_nan());
}

#[test]
fn parse_builds_expected_tree_shape() {
    let tree = parse("1+2*3").unwrap();
    assert_eq!(tree,
               Expr::BinaryOp { left:  literal(1.0),
                                op:    BinaryOperator::Add,
                                right: Box::new(Expr::BinaryOp { left:  literal(2.0),
                                                                 op:    BinaryOperator::Mul,
                                                                 right: literal(3.0),
                                                                 line:  1, }),
                                line:  1, });
    assert!(!tree.is_leaf());
}

#[test]
fn exponent_chain_groups_from_the_right() {
    let tree = parse("2^3^2").unwrap();
    assert_eq!(tree,
               Expr::BinaryOp { left:  literal(2.0),
                                op:    BinaryOperator::Pow,
                                right: Box::new(Expr::BinaryOp { left:  literal(3.0),
                                                                 op:    BinaryOperator::Pow,
                                                                 right: literal(2.0),
                                                                 line:  1, }),
                                line:  1, });
}

#[test]
fn missing_operand_is_error() {
    assert_eq!(interpret("2+"),
               Err(ParseError::ExpectedNumber { found: "end of input".to_string(),
                                                line:  0, }));
    assert_eq!(interpret("2+*3"),
               Err(ParseError::ExpectedNumber { found: "*".to_string(),
                                                line:  1, }));
    assert_failure("");
    assert_failure("2^-3");
}

#[test]
fn trailing_text_is_error() {
    assert_eq!(interpret("2 3"),
               Err(ParseError::UnexpectedTrailingTokens { token: "3".to_string(),
                                                          line:  1, }));
    assert_eq!(interpret("2+3)"),
               Err(ParseError::UnexpectedTrailingTokens { token: ")".to_string(),
                                                          line:  1, }));
}

#[test]
fn malformed_literal_is_lex_error() {
    assert_eq!(interpret("2.3.4"),
               Err(ParseError::IllegalNumber { literal: "2.3.4".to_string(),
                                               line:    1, }));
    assert_eq!(interpret("1+2a"),
               Err(ParseError::IllegalNumber { literal: "2a".to_string(),
                                               line:    1, }));
    assert_failure("$");
    // `-` is a delimiter, so a signed exponent splits the literal apart
    // and leaves a malformed `2.1e` behind.
    assert_eq!(interpret("2.1e-10"),
               Err(ParseError::IllegalNumber { literal: "2.1e".to_string(),
                                               line:    1, }));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(interpret("(2+3"),
               Err(ParseError::ExpectedClosingParen { line: 1 }));
    assert_failure("(");
    assert_failure("2+3(");
}

#[test]
fn errors_report_the_offending_line() {
    assert_eq!(interpret("1+\n*2"),
               Err(ParseError::ExpectedNumber { found: "*".to_string(),
                                                line:  2, }));
    let message = interpret("1+\n*2").unwrap_err().to_string();
    assert!(message.starts_with("Error on line 2:"), "got: {message}");
}
