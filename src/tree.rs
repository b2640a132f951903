use crate::{error::ConstructionError, value::Value};

/// Represents an operation with one input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Abs,
    Log,
    Exp,
    Sign,
}

/// Represents an operation with two inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
}

impl UnaryOp {
    /// The index of the variant for comparison and hashing.
    pub fn index(&self) -> u8 {
        use UnaryOp::*;
        match self {
            Negate => 0,
            Abs => 1,
            Log => 2,
            Exp => 3,
            Sign => 4,
        }
    }
}

impl BinaryOp {
    /// The index of the variant for comparison and hashing.
    pub fn index(&self) -> u8 {
        use BinaryOp::*;
        match self {
            Add => 0,
            Subtract => 1,
            Multiply => 2,
            Divide => 3,
            Pow => 4,
        }
    }
}

use {BinaryOp::*, UnaryOp::*};

/// An immutable symbolic expression. Every node owns its children, and no
/// node is modified after it is constructed. Transformations always return
/// new trees.
///
/// The variants can be constructed directly, but the functions in this
/// module (`add`, `mul`, `pow` etc.) should be preferred because they
/// simplify obviously redundant structure away as the tree is built.
#[derive(Debug, Clone)]
pub enum Expr {
    Constant(Value),
    Variable(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

pub use Expr::*;

pub type MaybeExpr = Result<Expr, ConstructionError>;

impl Expr {
    /// Check if this node is a constant with the value `val`.
    pub fn is_constant(&self, val: f64) -> bool {
        matches!(self, Constant(c) if *c == val)
    }

    /// The name of this node if it is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Variable(name) => Some(name),
            Constant(_) | Unary(..) | Binary(..) => None,
        }
    }

    /// Check if this node is the variable with the given `name`.
    pub fn is_variable(&self, name: &str) -> bool {
        matches!(self, Variable(v) if v == name)
    }

    /// Get a unique list of all variable names in this tree, in the order in
    /// which they first appear in a depth first traversal.
    pub fn variables(&self) -> Vec<&str> {
        fn collect<'a>(expr: &'a Expr, dst: &mut Vec<&'a str>) {
            match expr {
                Constant(_) => {}
                Variable(name) => {
                    if !dst.contains(&name.as_str()) {
                        dst.push(name);
                    }
                }
                Unary(_, input) => collect(input, dst),
                Binary(_, lhs, rhs) => {
                    collect(lhs, dst);
                    collect(rhs, dst);
                }
            }
        }
        let mut names = Vec::new();
        collect(self, &mut names);
        return names;
    }

    pub fn pow(self, exponent: Expr) -> MaybeExpr {
        pow(self, exponent)
    }

    pub fn log(self) -> Expr {
        log(self)
    }

    pub fn exp(self) -> Expr {
        exp(self)
    }

    pub fn abs(self) -> Expr {
        abs(self)
    }

    pub fn sign(self) -> Expr {
        sign(self)
    }
}

/// Allocate a unary node without applying any simplifications.
pub(crate) fn unary(op: UnaryOp, input: Expr) -> Expr {
    Unary(op, Box::new(input))
}

/// Allocate a binary node without applying any simplifications.
pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Binary(op, Box::new(lhs), Box::new(rhs))
}

pub fn constant(val: impl Into<Value>) -> Expr {
    Constant(val.into())
}

pub fn variable(name: impl Into<String>) -> Expr {
    Variable(name.into())
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) => Constant(a.add(*b)),
        (_, Constant(b)) if *b == 0. => lhs,
        (Constant(a), _) if *a == 0. => rhs,
        _ => binary(Add, lhs, rhs),
    }
}

pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) => Constant(a.sub(*b)),
        (_, Constant(b)) if *b == 0. => lhs,
        _ if lhs == rhs => constant(0),
        _ => binary(Subtract, lhs, rhs),
    }
}

pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) => Constant(a.mul(*b)),
        (_, Constant(b)) if *b == 0. => constant(0),
        (Constant(a), _) if *a == 0. => constant(0),
        (_, Constant(b)) if *b == 1. => lhs,
        (Constant(a), _) if *a == 1. => rhs,
        _ => binary(Multiply, lhs, rhs),
    }
}

/// Division. A constant zero divisor is never folded; evaluating such a tree
/// fails instead.
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    let zero_divisor = rhs.is_constant(0.);
    match (&lhs, &rhs) {
        (Constant(a), Constant(b)) if !zero_divisor => Constant(a.div(*b)),
        (Constant(a), _) if *a == 0. && !zero_divisor => constant(0),
        _ if lhs == rhs && !zero_divisor => constant(1),
        _ => binary(Divide, lhs, rhs),
    }
}

/// Exponentiation. Folding two constants fails if zero is raised to a
/// negative power, or if the result is not a real number.
pub fn pow(base: Expr, exponent: Expr) -> MaybeExpr {
    match (&base, &exponent) {
        (Constant(a), Constant(b)) => Ok(Constant(a.pow(*b)?)),
        _ => Ok(pow_rules(base, exponent)),
    }
}

/// Same as `pow`, except when folding constants fails, the raw power node is
/// returned so the error surfaces when the tree is evaluated.
pub(crate) fn pow_or_raw(base: Expr, exponent: Expr) -> Expr {
    match (&base, &exponent) {
        (Constant(a), Constant(b)) => match a.pow(*b) {
            Ok(val) => Constant(val),
            Err(_) => binary(Pow, base, exponent),
        },
        _ => pow_rules(base, exponent),
    }
}

/// Identities of `pow` for operands that are not both constants.
fn pow_rules(base: Expr, exponent: Expr) -> Expr {
    match (&base, &exponent) {
        (_, Constant(b)) if *b == 0. => constant(1),
        (_, Constant(b)) if *b == 1. => base,
        (Constant(a), _) if *a == 1. => constant(1),
        _ => binary(Pow, base, exponent),
    }
}

pub fn neg(input: Expr) -> Expr {
    match input {
        Constant(val) => Constant(val.neg()),
        Unary(Negate, inner) => *inner,
        _ => unary(Negate, input),
    }
}

macro_rules! unary_func {
    ($name:ident, $op:ident) => {
        pub fn $name(input: Expr) -> Expr {
            unary($op, input)
        }
    };
}

unary_func!(abs, Abs);
unary_func!(log, Log);
unary_func!(exp, Exp);
unary_func!(sign, Sign);

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Constant(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        constant(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        constant(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        variable(name)
    }
}

macro_rules! binary_trait {
    ($trait:ident, $method:ident, $func:ident) => {
        impl std::ops::$trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<&Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                $func(self.clone(), rhs.clone())
            }
        }

        impl std::ops::$trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                $func(self, constant(rhs))
            }
        }
    };
}

binary_trait!(Add, add, add);
binary_trait!(Sub, sub, sub);
binary_trait!(Mul, mul, mul);
binary_trait!(Div, div, div);

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        neg(self)
    }
}

impl std::ops::Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        neg(self.clone())
    }
}
