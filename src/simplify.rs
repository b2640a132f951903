use crate::{
    tree::{
        BinaryOp::{self, *},
        Expr::{self, *},
        UnaryOp::{self, *},
        abs, add, binary, constant, div, exp, log, mul, neg, pow_or_raw, sign, sub,
    },
    value::Value,
};
use std::collections::{HashMap, VecDeque};

/// Rewrite `expr` into a canonical form that is mathematically
/// equivalent. Sums and products are flattened, their constants are folded
/// and their operands are sorted by their rendered strings. Sums also have
/// their like terms collected, i.e. `2 * x + 3 * x` becomes `5.0 * x`.
///
/// Repeated factors in a product are not merged into powers, so `x * x`
/// stays a product. Recursion depth is the depth of the tree.
pub fn simplify(expr: &Expr) -> Expr {
    let result = match expr {
        Constant(_) | Variable(_) => expr.clone(),
        Unary(op, input) => simplify_unary(*op, simplify(input)),
        Binary(op, lhs, rhs) => {
            let (lhs, rhs) = (simplify(lhs), simplify(rhs));
            match op {
                Add => simplify_sum(lhs, rhs),
                Multiply => simplify_product(lhs, rhs),
                Subtract => sub(lhs, rhs),
                Divide => div(lhs, rhs),
                Pow => pow_or_raw(lhs, rhs),
            }
        }
    };
    log::trace!("simplified {} to {}", expr, result);
    return result;
}

impl Expr {
    /// Get the simplified, canonical form of this expression. See
    /// `simplify`.
    pub fn simplified(&self) -> Expr {
        simplify(self)
    }
}

fn simplify_unary(op: UnaryOp, input: Expr) -> Expr {
    if let Constant(val) = &input {
        let folded = match op {
            Negate => Some(val.neg()),
            Abs => Some(val.abs()),
            Log => val.ln(),
            Exp => Some(val.exp()),
            Sign => Some(val.signum()),
        };
        if let Some(folded) = folded {
            return Constant(folded);
        }
    }
    match op {
        Negate => neg(input),
        Abs => abs(input),
        Log => log(input),
        Exp => exp(input),
        Sign => sign(input),
    }
}

/// Push the operands of the chain of `op` nodes rooted at `expr` into `dst`,
/// from left to right.
fn flatten(expr: Expr, op: BinaryOp, dst: &mut Vec<Expr>) {
    match expr {
        Binary(bop, lhs, rhs) if bop == op => {
            flatten(*lhs, op, dst);
            flatten(*rhs, op, dst);
        }
        _ => dst.push(expr),
    }
}

/// Split the operands into the constant values and the rest.
fn partition_constants(operands: Vec<Expr>) -> (Vec<Value>, Vec<Expr>) {
    let mut constants = Vec::new();
    let mut others = Vec::new();
    for operand in operands {
        match operand {
            Constant(val) => constants.push(val),
            _ => others.push(operand),
        }
    }
    (constants, others)
}

/// Sort the expressions by their rendered strings. The sort is stable.
fn sort_by_string(exprs: Vec<Expr>) -> Vec<Expr> {
    let mut keyed: Vec<(String, Expr)> = exprs.into_iter().map(|e| (e.to_string(), e)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Split a term of a sum into a constant coefficient and the non constant
/// base, e.g. `3 * x * y` into `(3.0, x * y)`. The factors of the base are
/// sorted by their rendered strings, so the same base is produced
/// irrespective of the order of the factors.
fn coefficient_and_base(term: &Expr) -> (f64, Expr) {
    match term {
        Constant(val) => (val.to_f64(), constant(1)),
        Binary(Multiply, ..) => {
            let mut coeff = 1.;
            let mut factors: Vec<Expr> = Vec::new();
            let mut queue: VecDeque<&Expr> = VecDeque::from([term]);
            while let Some(current) = queue.pop_front() {
                match current {
                    Binary(Multiply, lhs, rhs) => {
                        for child in [lhs.as_ref(), rhs.as_ref()] {
                            match child {
                                Constant(val) => coeff *= val.to_f64(),
                                Binary(Multiply, ..) => queue.push_back(child),
                                _ => factors.push(child.clone()),
                            }
                        }
                    }
                    Constant(val) => coeff *= val.to_f64(),
                    _ => factors.push(current.clone()),
                }
            }
            let mut factors = sort_by_string(factors).into_iter();
            let base = match factors.next() {
                Some(first) => factors.fold(first, |acc, f| binary(Multiply, acc, f)),
                None => constant(1),
            };
            (coeff, base)
        }
        Variable(_) | Unary(..) | Binary(..) => (1., term.clone()),
    }
}

fn simplify_sum(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) => return Constant(a.add(*b)),
        (Constant(a), _) if *a == 0. => return rhs,
        (_, Constant(b)) if *b == 0. => return lhs,
        _ => {}
    }
    let mut terms = Vec::new();
    flatten(lhs, Add, &mut terms);
    flatten(rhs, Add, &mut terms);
    let (constants, terms) = partition_constants(terms);
    let mut total = constants.iter().fold(0., |acc, c| acc + c.to_f64());
    // Collect like terms. The first occurrence of a base is kept as its
    // representative.
    let mut coeffs: HashMap<Expr, f64> = HashMap::new();
    let mut bases: Vec<Expr> = Vec::new();
    for term in &terms {
        let (coeff, base) = coefficient_and_base(term);
        if base.is_constant(1.) {
            total += coeff;
            continue;
        }
        match coeffs.get_mut(&base) {
            Some(sum) => *sum += coeff,
            None => {
                coeffs.insert(base.clone(), coeff);
                bases.push(base);
            }
        }
    }
    let mut rebuilt: Vec<Expr> = Vec::with_capacity(bases.len() + 1);
    if total != 0. || bases.is_empty() {
        rebuilt.push(constant(total));
    }
    for base in sort_by_string(bases) {
        let coeff = coeffs.get(&base).copied().unwrap_or(0.);
        if coeff == 0. {
            continue;
        } else if coeff == 1. {
            rebuilt.push(base);
        } else {
            rebuilt.push(simplify_product(constant(coeff), base));
        }
    }
    let mut rebuilt = rebuilt.into_iter();
    match rebuilt.next() {
        Some(first) => rebuilt.fold(first, add),
        None => constant(0.),
    }
}

fn simplify_product(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) => return Constant(a.mul(*b)),
        (Constant(a), _) if *a == 0. => return constant(0),
        (Constant(a), _) if *a == 1. => return rhs,
        (_, Constant(b)) if *b == 0. => return constant(0),
        (_, Constant(b)) if *b == 1. => return lhs,
        _ => {}
    }
    let mut factors = Vec::new();
    flatten(lhs, Multiply, &mut factors);
    flatten(rhs, Multiply, &mut factors);
    let (constants, factors) = partition_constants(factors);
    let product = constants
        .into_iter()
        .fold(Value::Integer(1), |acc, c| acc.mul(c));
    if product == 0. {
        return constant(0);
    }
    let factors = sort_by_string(factors);
    let mut rebuilt: Vec<Expr> = Vec::with_capacity(factors.len() + 1);
    if product != 1. || factors.is_empty() {
        rebuilt.push(Constant(product));
    }
    rebuilt.extend(factors);
    let mut rebuilt = rebuilt.into_iter();
    match rebuilt.next() {
        Some(first) => rebuilt.fold(first, mul),
        None => constant(1),
    }
}
