/// Constructors lifted to accept and return `MaybeExpr`, so `deftree!` can
/// propagate construction errors. Not meant to be used directly.
#[doc(hidden)]
pub mod lift {
    use crate::tree::{self, MaybeExpr};

    macro_rules! lift_unary {
        ($name:ident) => {
            pub fn $name(input: MaybeExpr) -> MaybeExpr {
                Ok(tree::$name(input?))
            }
        };
    }

    macro_rules! lift_binary {
        ($name:ident) => {
            pub fn $name(lhs: MaybeExpr, rhs: MaybeExpr) -> MaybeExpr {
                Ok(tree::$name(lhs?, rhs?))
            }
        };
    }

    lift_unary!(neg);
    lift_unary!(abs);
    lift_unary!(log);
    lift_unary!(exp);
    lift_unary!(sign);

    lift_binary!(add);
    lift_binary!(sub);
    lift_binary!(mul);
    lift_binary!(div);

    pub fn pow(base: MaybeExpr, exponent: MaybeExpr) -> MaybeExpr {
        tree::pow(base?, exponent?)
    }

    pub fn deriv(expr: MaybeExpr, var: &str) -> MaybeExpr {
        Ok(crate::derivative::differentiate(&expr?, var))
    }
}

/// Construct an expression from the lisp expresion. Every form goes through
/// the smart constructors, so the result is locally simplified. Evaluates to
/// a `MaybeExpr`, because folding constant powers can fail.
#[macro_export]
macro_rules! deftree {
    () => {}; // empty;
    (($($a:tt)*)) => { // Unwrap redundant parens.
        $crate::deftree!($($a)*)
    };
    ($a:block) => { // Block expressions.
        $a
    };
    // Derivatives.
    (deriv $tree:tt $var:ident) => {
        $crate::macros::lift::deriv($crate::deftree!($tree), stringify!($var))
    };
    // Constants.
    (const $tt:expr) => {{
        let out: $crate::MaybeExpr = Ok($crate::constant({$tt}));
        out
    }};
    // Unary ops with functions names.
    ($unary_op:ident $a:tt) => {
        $crate::macros::lift::$unary_op($crate::deftree!($a))
    };
    // Binary ops with function names.
    ($binary_op:ident $a:tt $b:tt) => {
        $crate::macros::lift::$binary_op($crate::deftree!($a), $crate::deftree!($b))
    };
    // Operators.
    (- $a:tt) => {
        $crate::macros::lift::neg($crate::deftree!($a))
    };
    (- $a:tt $b:tt) => {
        $crate::macros::lift::sub($crate::deftree!($a), $crate::deftree!($b))
    };
    (+ $a:tt $b:tt) => {
        $crate::macros::lift::add($crate::deftree!($a), $crate::deftree!($b))
    };
    (/ $a:tt $b:tt) => {
        $crate::macros::lift::div($crate::deftree!($a), $crate::deftree!($b))
    };
    (* $a:tt $b:tt) => {
        $crate::macros::lift::mul($crate::deftree!($a), $crate::deftree!($b))
    };
    // Constants
    ($a:literal) => {{
        let out: $crate::MaybeExpr = Ok($crate::constant($a));
        out
    }};
    // Variables
    ($a:ident) => {{
        let out: $crate::MaybeExpr = Ok($crate::variable(stringify!($a)));
        out
    }};
}

/// Assert that the floating point numbers are equal within the given epsilon.
#[macro_export]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = f64::abs(a - b);
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        $crate::assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        $crate::assert_float_eq!($a, $b, f64::EPSILON)
    };
}
