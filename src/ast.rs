/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` is a binary tree: a node is either a numeric literal leaf or an
/// internal node holding a binary operator and exactly two children. No
/// other shape is representable, so a successfully parsed tree can always
/// be evaluated without structural checks.
///
/// Nodes are built once by the parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
        /// Line number in the source input.
        line:  usize,
    },
    /// A binary operation (addition, maximum, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source input.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use maxcalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 2.5, line: 3 };
    ///
    /// assert_eq!(expr.line_number(), 3);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// Returns `true` if this node is a literal leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Maximum of both operands (`#`)
    Max,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Max => "#",
        };
        write!(f, "{operator}")
    }
}
