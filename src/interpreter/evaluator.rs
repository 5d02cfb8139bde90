use crate::ast::{BinaryOperator, Expr};

/// Evaluates a parse tree to a single number.
///
/// The tree is walked post-order: both children are evaluated first, then
/// combined with the operator at the node. Leaves evaluate to their literal
/// value. Standard IEEE-754 `f64` semantics apply throughout: division by
/// zero yields a signed infinity, `0/0` yields NaN, and both propagate
/// through ancestor computations without special-casing.
///
/// # Example
/// ```
/// use maxcalc::{evaluate, parse};
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(evaluate(&tree), 14.0);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal { value, .. } => *value,
        Expr::BinaryOp { left, op, right, .. } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
                BinaryOperator::Pow => left.powf(right),
                BinaryOperator::Max => left.max(right),
            }
        },
    }
}
