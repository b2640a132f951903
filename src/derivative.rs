use crate::{
    tree::{
        BinaryOp::*, Expr, Expr::*, UnaryOp::*, add, constant, div, exp, log, mul, neg,
        pow_or_raw, sign, sub,
    },
    value::Value,
};

/// Compute the symbolic derivative of `expr` with respect to the variable
/// named `var`. The derivative is assembled from the smart constructors, so
/// it comes out locally simplified. This never fails, and never evaluates
/// anything numerically.
pub fn differentiate(expr: &Expr, var: &str) -> Expr {
    match expr {
        Constant(_) => constant(0),
        Variable(name) => constant(if name == var { 1 } else { 0 }),
        Unary(op, input) => {
            let input = input.as_ref();
            let dinput = differentiate(input, var);
            match op {
                Negate => neg(dinput),
                Abs => mul(dinput, sign(input.clone())),
                Log => div(dinput, input.clone()),
                Exp => mul(exp(input.clone()), dinput), // Chain rule.
                // Zero everywhere, including the discontinuity at zero.
                Sign => constant(0),
            }
        }
        Binary(op, lhs, rhs) => {
            let (lhs, rhs) = (lhs.as_ref(), rhs.as_ref());
            match op {
                Add => add(differentiate(lhs, var), differentiate(rhs, var)),
                Subtract => sub(differentiate(lhs, var), differentiate(rhs, var)),
                Multiply => add(
                    mul(differentiate(lhs, var), rhs.clone()),
                    mul(lhs.clone(), differentiate(rhs, var)),
                ),
                Divide => div(
                    sub(
                        mul(differentiate(lhs, var), rhs.clone()),
                        mul(lhs.clone(), differentiate(rhs, var)),
                    ),
                    pow_or_raw(rhs.clone(), constant(2)),
                ),
                Pow => match rhs {
                    Constant(c) if *c == 0. => constant(0),
                    Constant(c) => mul(
                        mul(
                            rhs.clone(),
                            pow_or_raw(lhs.clone(), Constant(c.sub(Value::Integer(1)))),
                        ),
                        differentiate(lhs, var),
                    ),
                    // d(u^v) = u^v * (v' * log(u) + v * (u' / u)).
                    _ => mul(
                        expr.clone(),
                        add(
                            mul(differentiate(rhs, var), log(lhs.clone())),
                            mul(rhs.clone(), div(differentiate(lhs, var), lhs.clone())),
                        ),
                    ),
                },
            }
        }
    }
}

impl Expr {
    /// Compute the symbolic derivative of this expression with respect to
    /// `var`. See `differentiate`.
    pub fn deriv(&self, var: &str) -> Expr {
        differentiate(self, var)
    }
}
