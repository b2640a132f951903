use crate::{
    derivative::differentiate,
    error::SolveError,
    simplify::simplify,
    tree::{
        BinaryOp::*,
        Expr::{self, *},
        UnaryOp::*,
        add, constant, div, mul, neg, sub,
    },
};

/// The solutions of an equation in one variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Exactly one value satisfies the equation.
    Unique(Expr),
    /// The equation holds irrespective of the value of the variable.
    AllReals,
    /// No value satisfies the equation.
    Empty,
}

fn is_independent(expr: &Expr, var: &str) -> bool {
    differentiate(expr, var).is_constant(0.)
}

/**
Write `expr` as `a * var + b`, where `a` and `b` do not depend on `var`, and
return `(a, b)`. Returns `None` if `expr` is not linear in `var`, or has a
shape that is not recognized. This works best on simplified expressions.
*/
pub fn linear_coeffs(expr: &Expr, var: &str) -> Option<(Expr, Expr)> {
    match expr {
        Constant(_) => return Some((constant(0), expr.clone())),
        Variable(name) if name == var => return Some((constant(1), constant(0))),
        Variable(_) => return Some((constant(0), expr.clone())),
        Binary(Add, lhs, rhs) => {
            let (al, bl) = linear_coeffs(lhs, var)?;
            let (ar, br) = linear_coeffs(rhs, var)?;
            return Some((simplify(&add(al, ar)), simplify(&add(bl, br))));
        }
        Binary(Subtract, lhs, rhs) => {
            let (al, bl) = linear_coeffs(lhs, var)?;
            let (ar, br) = linear_coeffs(rhs, var)?;
            return Some((simplify(&sub(al, ar)), simplify(&sub(bl, br))));
        }
        Unary(Negate, input) => {
            let (a, b) = linear_coeffs(input, var)?;
            return Some((simplify(&neg(a)), simplify(&neg(b))));
        }
        Binary(Multiply, lhs, rhs) => {
            let (lhs, rhs) = (lhs.as_ref(), rhs.as_ref());
            let (kl, kr) = (is_independent(lhs, var), is_independent(rhs, var));
            let (factor, other) = match (kl, kr) {
                (true, true) => return Some((constant(0), simplify(expr))),
                (true, false) => (lhs, rhs),
                (false, true) => (rhs, lhs),
                (false, false) => return None,
            };
            let (a, b) = linear_coeffs(other, var)?;
            if !is_independent(&a, var) {
                return None;
            }
            let (a, b) = if kl {
                (mul(factor.clone(), a), mul(factor.clone(), b))
            } else {
                (mul(a, factor.clone()), mul(b, factor.clone()))
            };
            return Some((simplify(&a), simplify(&b)));
        }
        Binary(Pow, lhs, rhs) if lhs.is_variable(var) && rhs.is_constant(1.) => {
            return Some((constant(1), constant(0)));
        }
        Binary(Pow, lhs, rhs) if lhs.is_variable(var) && rhs.is_constant(0.) => {
            return Some((constant(0), constant(1)));
        }
        Unary(..) | Binary(..) => {}
    }
    if is_independent(expr, var) {
        Some((constant(0), expr.clone()))
    } else {
        None
    }
}

/// Solve the equation `expr = target` for the variable `var`, where `target`
/// defaults to zero. Only equations that are linear in `var` after
/// simplification can be solved.
pub fn solve(expr: &Expr, var: &str, target: Option<Expr>) -> Result<Solution, SolveError> {
    let equation = match target {
        Some(target) => simplify(&sub(expr.clone(), target)),
        None => simplify(expr),
    };
    let (a, b) = match linear_coeffs(&equation, var) {
        Some(coeffs) => coeffs,
        None => {
            let err = SolveError::NonLinear(equation.to_string(), var.to_string());
            log::debug!("{err}, free variables {:?}", equation.variables());
            return Err(err);
        }
    };
    let (a, b) = (simplify(&a), simplify(&b));
    if a.is_constant(0.) {
        return Ok(if b.is_constant(0.) {
            Solution::AllReals
        } else {
            Solution::Empty
        });
    }
    Ok(Solution::Unique(simplify(&div(neg(b), a))))
}

impl Expr {
    /// Solve `self = target` for `var`. See `solve`.
    pub fn solve(&self, var: &str, target: Option<Expr>) -> Result<Solution, SolveError> {
        solve(self, var, target)
    }
}
