//! Property-based tests for the session arena
//!
//! This module tests:
//! - Literal and application uniqueness under hash-consing
//! - Distinctness of variables
//! - Rollback restoring the session exactly

use num_bigint::BigInt;
use proptest::prelude::*;
use symstr_core::{Kind, Literal, Opcode, Session};

/// Strategy for small integers
fn small_int_strategy() -> impl Strategy<Value = i64> {
    -100i64..100i64
}

/// Strategy for short byte strings
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..8)
}

proptest! {
    // =====================================
    // Hash-consing
    // =====================================

    /// Creating the same integer literal twice yields the same handle
    #[test]
    fn integer_literal_uniqueness(n in small_int_strategy()) {
        let mut ss = Session::new();
        let a = ss.mk_literal(Literal::Int(BigInt::from(n)));
        let b = ss.mk_literal(Literal::Int(BigInt::from(n)));
        prop_assert_eq!(a, b);
        prop_assert_eq!(ss.len(), 1);
    }

    /// Distinct string literals never share a handle
    #[test]
    fn distinct_literals_are_distinct(a in bytes_strategy(), b in bytes_strategy()) {
        let mut ss = Session::new();
        let ha = ss.mk_literal(Literal::Str(a.clone()));
        let hb = ss.mk_literal(Literal::Str(b.clone()));
        prop_assert_eq!(ha == hb, a == b);
    }

    /// Applications over the same operands are shared
    #[test]
    fn application_uniqueness(s in bytes_strategy(), n in small_int_strategy()) {
        let mut ss = Session::new();
        let hs = ss.mk_literal(Literal::Str(s));
        let hn = ss.mk_literal(Literal::Int(BigInt::from(n)));
        let a = ss.mk_app(Opcode::StrAt, &[hs, hn]).unwrap();
        let b = ss.mk_app(Opcode::StrAt, &[hs, hn]).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(ss.kind_of(a), Some(Kind::String));
    }

    // =====================================
    // Variables
    // =====================================

    /// Every declaration yields a fresh variable, even for a repeated name
    #[test]
    fn variables_never_collide(count in 1usize..20) {
        let mut ss = Session::new();
        let handles: Vec<_> = (0..count).map(|_| ss.declare("x", Kind::Int)).collect();
        let mut sorted = handles.clone();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), count);
        prop_assert_eq!(ss.vars().count(), count);
    }

    // =====================================
    // Rollback
    // =====================================

    /// Rolling back undoes an arbitrary batch of work and the arena can be
    /// rebuilt identically afterwards
    #[test]
    fn rollback_restores_sizes(values in prop::collection::vec(small_int_strategy(), 0..10)) {
        let mut ss = Session::new();
        let x = ss.declare("x", Kind::Int);
        let cp = ss.checkpoint();

        let mut built = Vec::new();
        for &v in &values {
            let lit = ss.mk_literal(Literal::Int(BigInt::from(v)));
            let le = ss.mk_app(Opcode::Le, &[x, lit]).unwrap();
            ss.assert_internal(le).unwrap();
            built.push(le);
        }
        let _ = ss.fresh_internal_var(Kind::Char);

        ss.rollback(cp);
        prop_assert_eq!(ss.len(), 1);
        prop_assert_eq!(ss.vars().count(), 1);
        prop_assert!(ss.assertions().is_empty());

        for (&v, &old) in values.iter().zip(&built) {
            let lit = ss.mk_literal(Literal::Int(BigInt::from(v)));
            let le = ss.mk_app(Opcode::Le, &[x, lit]).unwrap();
            prop_assert_eq!(le, old);
        }
    }
}
