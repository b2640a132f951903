use crate::{
    derivative::differentiate,
    error::IntegrationError,
    tree::{
        BinaryOp::*,
        Expr::{self, *},
        UnaryOp::*,
        abs, add, constant, div, log, mul, neg, pow_or_raw, sub, variable,
    },
    value::Value,
};

fn unsupported(what: &str, expr: &Expr) -> IntegrationError {
    let err = IntegrationError::Unsupported(format!("{what} in `{expr}`"));
    log::debug!("{err}");
    return err;
}

/// Compute an antiderivative of `expr` with respect to the variable named
/// `var`, without the constant of integration. Only a narrow table of exact
/// rules is supported, every other shape returns an error describing the
/// construct that could not be integrated.
pub fn integrate(expr: &Expr, var: &str) -> Result<Expr, IntegrationError> {
    let x = || variable(var);
    Ok(match expr {
        Constant(_) => mul(expr.clone(), x()),
        Variable(name) if name == var => div(pow_or_raw(x(), constant(2)), constant(2)),
        Variable(_) => mul(expr.clone(), x()),
        Unary(op, input) => match op {
            Negate => neg(integrate(input, var)?),
            Log if input.is_variable(var) => sub(mul(x(), log(x())), x()),
            Log => return Err(unsupported("logarithm of a non trivial argument", expr)),
            Exp if input.is_variable(var) => expr.clone(),
            Exp => return Err(unsupported("exponential of a non trivial argument", expr)),
            Abs => return Err(unsupported("absolute value", expr)),
            Sign => return Err(unsupported("sign function", expr)),
        },
        Binary(op, lhs, rhs) => match op {
            Add => add(integrate(lhs, var)?, integrate(rhs, var)?),
            Subtract => sub(integrate(lhs, var)?, integrate(rhs, var)?),
            Multiply => match (lhs.as_ref(), rhs.as_ref()) {
                (Constant(_), _) => mul(lhs.as_ref().clone(), integrate(rhs, var)?),
                (_, Constant(_)) => mul(integrate(lhs, var)?, rhs.as_ref().clone()),
                _ => return Err(unsupported("product of non constant factors", expr)),
            },
            Divide => return Err(unsupported("division", expr)),
            Pow => match rhs.as_ref() {
                Constant(n) if lhs.is_variable(var) && *n == -1. => log(abs(x())),
                Constant(n) if lhs.is_variable(var) => {
                    let n = n.add(Value::Integer(1));
                    div(pow_or_raw(x(), Constant(n)), Constant(n))
                }
                // Independent of the variable.
                _ if differentiate(expr, var).is_constant(0.) => mul(expr.clone(), x()),
                _ => return Err(unsupported("power", expr)),
            },
        },
    })
}

impl Expr {
    /// Compute an antiderivative of this expression with respect to `var`. See
    /// `integrate`.
    pub fn integrate(&self, var: &str) -> Result<Expr, IntegrationError> {
        integrate(self, var)
    }
}
