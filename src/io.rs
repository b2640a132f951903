use crate::{
    tree::{BinaryOp, BinaryOp::*, Expr, Expr::*, UnaryOp::*},
    value::Value,
};

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(val) => write!(f, "{}", val),
            // Debug formatting always shows the fractional part, e.g. `5.0`.
            Value::Real(val) => write!(f, "{:?}", val),
        }
    }
}

impl BinaryOp {
    /// The infix symbol used when rendering this op.
    pub fn symbol(&self) -> &'static str {
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Pow => "**",
        }
    }
}

/// Fully parenthesized rendering. This string is also the canonical sort
/// key used when simplifying, so it must stay deterministic.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant(val) => write!(f, "{}", val),
            Variable(name) => write!(f, "{}", name),
            Unary(op, input) => match op {
                Negate => write!(f, "(-{})", input),
                Abs => write!(f, "abs({})", input),
                Log => write!(f, "log({})", input),
                Exp => write!(f, "exp({})", input),
                Sign => write!(f, "sgn({})", input),
            },
            Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}
