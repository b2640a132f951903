use crate::{
    tree::{Expr, Expr::*},
    value::Value,
};
use std::hash::{Hash, Hasher};

impl Value {
    /// Bits of the numeric value, with both zeros mapped to the same bits.
    fn hash_bits(&self) -> u64 {
        let val = self.to_f64();
        if val == 0. { 0 } else { val.to_bits() }
    }
}

impl PartialEq for Value {
    /// Values are equal if they are numerically equal, irrespective of
    /// whether they are integers or reals.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_bits().hash(state);
    }
}

impl PartialEq for Expr {
    /// Structural equality. The nodes must have the same variant and
    /// payload, and their children must be structurally equal. This doesn't
    /// check for mathematical equivalence.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constant(a), Constant(b)) => a == b,
            (Variable(a), Variable(b)) => a == b,
            (Unary(op1, a), Unary(op2, b)) => op1 == op2 && a == b,
            (Binary(op1, l1, r1), Binary(op2, l2, r2)) => op1 == op2 && l1 == l2 && r1 == r2,
            (Constant(_), _) | (Variable(_), _) | (Unary(..), _) | (Binary(..), _) => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Constant(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            Variable(name) => {
                1u8.hash(state);
                name.hash(state);
            }
            Unary(op, input) => {
                2u8.hash(state);
                op.index().hash(state);
                input.hash(state);
            }
            Binary(op, lhs, rhs) => {
                3u8.hash(state);
                op.index().hash(state);
                lhs.hash(state);
                rhs.hash(state);
            }
        }
    }
}
