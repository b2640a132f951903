pub mod derivative;
pub mod error;
pub mod eval;
pub mod integrate;
pub mod simplify;
pub mod solve;
pub mod taylor;
pub mod tree;
pub mod value;

mod hash;
mod io;

#[doc(hidden)]
pub mod macros;

pub use derivative::differentiate;
pub use error::{
    ConstructionError, EvalError, FactorialError, IntegrationError, SolveError, TaylorError,
};
pub use eval::{Bindings, evaluate};
pub use integrate::integrate;
pub use simplify::simplify;
pub use solve::{Solution, linear_coeffs, solve};
pub use taylor::{factorial, taylor_series};
pub use tree::{
    BinaryOp, Expr, MaybeExpr, UnaryOp, abs, add, constant, div, exp, log, mul, neg, pow, sign,
    sub, variable,
};
pub use value::Value;

#[cfg(test)]
mod test;

#[cfg(test)]
mod proptests;
