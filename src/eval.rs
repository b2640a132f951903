use crate::{
    error::EvalError,
    tree::{
        BinaryOp::{self, *},
        Expr::{self, *},
        UnaryOp::{self, *},
    },
};
use std::collections::{BTreeMap, HashMap};

/// A set of values assigned to variables, looked up by exact name.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<f64>;
}

/// No variables are bound.
impl Bindings for () {
    fn lookup(&self, _name: &str) -> Option<f64> {
        None
    }
}

impl Bindings for HashMap<String, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Bindings for BTreeMap<String, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Bindings for [(&str, f64)] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Bindings for [(&str, f64); N] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

impl UnaryOp {
    /// Compute the result of the operation on `value`.
    pub fn apply(&self, value: f64) -> Result<f64, EvalError> {
        Ok(match self {
            Negate => -value,
            Abs => f64::abs(value),
            Log => {
                if value <= 0. {
                    return Err(EvalError::LogDomainError(value));
                }
                f64::ln(value)
            }
            Exp => f64::exp(value),
            Sign => {
                if value == 0. {
                    0.
                } else {
                    f64::signum(value)
                }
            }
        })
    }
}

impl BinaryOp {
    /// Compute the result of the operation on `lhs` and `rhs`.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        Ok(match self {
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => {
                if rhs == 0. {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
            Pow => {
                if lhs == 0. && rhs < 0. {
                    return Err(EvalError::DivisionByZero);
                }
                let result = f64::powf(lhs, rhs);
                if result.is_nan() && !lhs.is_nan() && !rhs.is_nan() {
                    return Err(EvalError::InvalidPower(lhs, rhs));
                }
                result
            }
        })
    }
}

/// Compute the value of `expr` with the variables assigned the values in
/// `bindings`. The recursion depth is the depth of the tree.
pub fn evaluate<B: Bindings + ?Sized>(expr: &Expr, bindings: &B) -> Result<f64, EvalError> {
    match expr {
        Constant(val) => Ok(val.to_f64()),
        Variable(name) => bindings
            .lookup(name)
            .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
        Unary(op, input) => op.apply(evaluate(input, bindings)?),
        Binary(op, lhs, rhs) => op.apply(evaluate(lhs, bindings)?, evaluate(rhs, bindings)?),
    }
}

impl Expr {
    /// Compute the value of this expression. See `evaluate`.
    pub fn eval<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, EvalError> {
        evaluate(self, bindings)
    }
}
