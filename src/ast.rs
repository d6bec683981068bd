use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its children exclusively. A tree is built once by the
/// parser, walked once by the evaluator, and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, already classified as integer or real.
    Literal {
        /// The constant value.
        value:    Value,
        /// Character offset of the literal in the source.
        position: usize,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Character offset of the operator in the source.
        position: usize,
    },
    /// A single binary operation. The parser uses it for `^`, which is
    /// right-associative.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character offset of the operator in the source.
        position: usize,
    },
    /// A left-associative run of operators of equal precedence, such as
    /// `a - b + c`, meaning `(a - b) + c`.
    ///
    /// Chains are stored flat so that a long sum adds no depth to the tree.
    Chain {
        /// The leftmost operand.
        first: Box<Self>,
        /// The remaining operators and operands in source order. Never empty.
        rest:  Vec<Link>,
    },
}

/// One operator and its right operand inside an [`Expr::Chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The operator joining this operand to everything on its left.
    pub op:       BinaryOperator,
    /// The right operand.
    pub operand:  Expr,
    /// Character offset of the operator in the source.
    pub position: usize,
}

/// Represents a binary operator.
///
/// This is the complete set of binary operations the evaluator will ever
/// perform. Nothing outside this enum can be reached from source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`^` or `**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
