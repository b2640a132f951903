use thiserror::Error;

/// Errors encountered while computing the numeric value of an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A variable was not assigned a value before evaluating.
    #[error("variable `{0}` is not bound")]
    UnboundVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    /// The logarithm of a non-positive value.
    #[error("logarithm undefined for non-positive value {0}")]
    LogDomainError(f64),
    /// The power has no real result, e.g. a negative base with a fractional
    /// exponent.
    #[error("{0} raised to the power {1} is not a real number")]
    InvalidPower(f64, f64),
}

/// Errors raised by the smart constructors for constant expressions that
/// are provably invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("cannot raise zero to the negative power {0}")]
    ZeroToNegativePower(f64),
    #[error("{0} raised to the power {1} is not a real number")]
    NonRealPower(f64, f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// The shape of the expression is outside the supported rule table. The
    /// payload describes the construct.
    #[error("unsupported integral: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorialError {
    #[error("factorial of negative integer {0}")]
    Negative(i64),
    #[error("factorial is only defined for integers, found {0}")]
    NotAnInteger(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaylorError {
    #[error("order must be a non-negative integer, found {0}")]
    InvalidOrder(i64),
    #[error("expansion point must be a finite number, found {0}")]
    InvalidExpansionPoint(f64),
    /// The expression passed as the expansion variable is not a variable.
    #[error("expansion variable must be a variable, found `{0}`")]
    NotAVariable(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Factorial(#[from] FactorialError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The equation is not linear in the variable being solved for.
    #[error("equation `{0} = 0` is not linear in `{1}`")]
    NonLinear(String, String),
}
