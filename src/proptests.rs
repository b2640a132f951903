//! Property based tests over randomly generated expression trees.

use proptest::prelude::*;

use crate::{
    derivative::differentiate,
    simplify::simplify,
    tree::{BinaryOp::*, Expr, UnaryOp::*, *},
};

// Small integer constants and the variables x and y.
fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-3i32..=3).prop_map(|val| constant(val)),
        prop_oneof![Just("x"), Just("y")].prop_map(|name| variable(name)),
    ]
}

// Trees made of raw nodes, so the simplifier sees redundant structure.
// Only operations that are defined everywhere are used.
fn raw_tree() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Add, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Subtract, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Multiply, a, b)),
            inner.clone().prop_map(|a| unary(Negate, a)),
            inner.clone().prop_map(|a| unary(Abs, a)),
            inner.prop_map(|a| unary(Sign, a)),
        ]
    })
}

// Trees made of every kind of raw node. Their values may be undefined, so
// these are only fit for checking the shape of the output.
fn any_raw_tree() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Add, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Subtract, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Multiply, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Divide, a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| binary(Pow, a, b)),
            inner.clone().prop_map(|a| unary(Negate, a)),
            inner.clone().prop_map(|a| unary(Abs, a)),
            inner.clone().prop_map(|a| unary(Log, a)),
            inner.clone().prop_map(|a| unary(Exp, a)),
            inner.prop_map(|a| unary(Sign, a)),
        ]
    })
}

// Multiples of 0.25, so the arithmetic in the tests is exact.
fn sample() -> impl Strategy<Value = f64> {
    (-8i32..=8).prop_map(|val| val as f64 / 4.)
}

fn close(a: f64, b: f64) -> bool {
    f64::abs(a - b) <= 1e-9 * (1. + f64::abs(a))
}

proptest! {
    #[test]
    fn simplify_is_idempotent(tree in raw_tree()) {
        let once = simplify(&tree);
        let twice = simplify(&once);
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn simplify_is_idempotent_for_all_nodes(tree in any_raw_tree()) {
        let once = simplify(&tree);
        let twice = simplify(&once);
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn simplify_preserves_value(tree in raw_tree(), x in sample(), y in sample()) {
        let bindings = [("x", x), ("y", y)];
        let expected = tree.eval(&bindings).unwrap();
        let actual = simplify(&tree).eval(&bindings).unwrap();
        prop_assert!(close(expected, actual), "{} != {} for {}", expected, actual, tree);
    }

    #[test]
    fn constant_folding(a in -1000i32..1000, b in -1000i32..1000) {
        let (fa, fb) = (a as f64, b as f64);
        prop_assert_eq!(add(constant(a), constant(b)).eval(&()), Ok(fa + fb));
        prop_assert_eq!(sub(constant(a), constant(b)).eval(&()), Ok(fa - fb));
        prop_assert_eq!(mul(constant(a), constant(b)).eval(&()), Ok(fa * fb));
        if b != 0 {
            prop_assert_eq!(div(constant(a), constant(b)).eval(&()), Ok(fa / fb));
        }
    }

    #[test]
    fn self_difference_and_quotient(tree in raw_tree()) {
        prop_assert!(sub(tree.clone(), tree.clone()).is_constant(0.));
        let quotient = div(tree.clone(), tree.clone());
        if tree.is_constant(0.) {
            prop_assert!(matches!(quotient, Binary(Divide, ..)));
        } else {
            prop_assert!(quotient.is_constant(1.));
        }
    }

    #[test]
    fn derivative_is_linear(
        a in raw_tree(),
        b in raw_tree(),
        k in -3i32..=3,
        x in sample(),
        y in sample()
    ) {
        let bindings = [("x", x), ("y", y)];
        let combined = binary(Add, binary(Multiply, constant(k), a.clone()), b.clone());
        let lhs = differentiate(&combined, "x").eval(&bindings).unwrap();
        let da = differentiate(&a, "x").eval(&bindings).unwrap();
        let db = differentiate(&b, "x").eval(&bindings).unwrap();
        prop_assert!(close(lhs, k as f64 * da + db), "{} != {}", lhs, k as f64 * da + db);
    }

    #[test]
    fn derivative_commutes_with_simplify(tree in raw_tree(), x in sample(), y in sample()) {
        let bindings = [("x", x), ("y", y)];
        let expected = differentiate(&tree, "x").eval(&bindings).unwrap();
        let actual = differentiate(&simplify(&tree), "x").eval(&bindings).unwrap();
        prop_assert!(close(expected, actual), "{} != {} for {}", expected, actual, tree);
    }
}
