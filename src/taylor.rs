use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::{
    derivative::differentiate,
    error::{FactorialError, TaylorError},
    eval::evaluate,
    tree::{
        Expr::{self, Constant},
        add, constant, mul, pow_or_raw, sub,
    },
    value::Value,
};

/// Factorial of a non negative integer, computed exactly.
pub fn factorial(n: Value) -> Result<BigUint, FactorialError> {
    let n = match n {
        Value::Integer(n) => n,
        Value::Real(val) => return Err(FactorialError::NotAnInteger(val)),
    };
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    Ok((1..=n as u64).fold(BigUint::one(), |acc, k| acc * k))
}

/**
Expand `expr` into a Taylor polynomial of the given `order` around `point`,
with respect to `variable`:

```text
sum for k in 0..=order of f^(k)(point) / k! * (variable - point) ^ k
```

The derivatives are evaluated with only `variable` bound, so any other free
variable in `expr` fails the evaluation. The terms are summed with the smart
constructors, so zero terms vanish, but the result is not simplified.
*/
pub fn taylor_series(
    expr: &Expr,
    variable: &Expr,
    point: f64,
    order: i64,
) -> Result<Expr, TaylorError> {
    let name = variable
        .as_variable()
        .ok_or_else(|| TaylorError::NotAVariable(variable.to_string()))?;
    if !point.is_finite() {
        return Err(TaylorError::InvalidExpansionPoint(point));
    }
    if order < 0 {
        return Err(TaylorError::InvalidOrder(order));
    }
    let bindings = [(name, point)];
    let mut current = expr.clone();
    let mut poly = constant(0);
    for k in 0..=order {
        if k > 0 {
            current = differentiate(&current, name);
        }
        let value = evaluate(&current, &bindings)?;
        // Past 170! the divisor is infinite and the coefficient is zero.
        let divisor = factorial(Value::Integer(k))?
            .to_f64()
            .unwrap_or(f64::INFINITY);
        let coeff = value / divisor;
        log::trace!("term {k} of the expansion of {expr}: {coeff}");
        let term = if k == 0 {
            constant(1)
        } else {
            pow_or_raw(
                sub(variable.clone(), constant(point)),
                Constant(Value::Integer(k)),
            )
        };
        poly = add(poly, mul(constant(coeff), term));
    }
    return Ok(poly);
}

impl Expr {
    /// Expand this expression into a Taylor polynomial. See `taylor_series`.
    pub fn taylor(&self, variable: &Expr, point: f64, order: i64) -> Result<Expr, TaylorError> {
        taylor_series(self, variable, point, order)
    }
}
