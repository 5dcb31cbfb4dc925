//! Property-based tests for the lifting protocol
//!
//! This module tests:
//! - Folding agrees with host arithmetic and creates no nodes
//! - Disabled folding builds nodes over literal operands
//! - Boolean short-circuits match the truth tables

use num_bigint::BigInt;
use proptest::prelude::*;
use symstr_core::ops::{add, and, eq, ge, gt, ite, le, lt, not, or, sub};
use symstr_core::{Literal, Opcode, SBool, SInteger, Session, SessionConfig};

/// Strategy for small integers
fn small_int_strategy() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

proptest! {
    // =====================================
    // Folding
    // =====================================

    /// Concrete arithmetic matches the host and leaves the arena empty
    #[test]
    fn arithmetic_folds(a in small_int_strategy(), b in small_int_strategy()) {
        let mut ss = Session::new();
        let (x, y) = (SInteger::from(a), SInteger::from(b));
        prop_assert_eq!(add(&mut ss, &x, &y), SInteger::from(a + b));
        prop_assert_eq!(sub(&mut ss, &x, &y), SInteger::from(a - b));
        prop_assert_eq!(le(&mut ss, &x, &y), SBool::from(a <= b));
        prop_assert_eq!(lt(&mut ss, &x, &y), SBool::from(a < b));
        prop_assert_eq!(ge(&mut ss, &x, &y), SBool::from(a >= b));
        prop_assert_eq!(gt(&mut ss, &x, &y), SBool::from(a > b));
        prop_assert_eq!(eq(&mut ss, &x, &y), SBool::from(a == b));
        prop_assert!(ss.is_empty());
        prop_assert_eq!(ss.stats().folds, 7);
    }

    /// Without folding the same operation becomes a node over literals
    #[test]
    fn unfolded_arithmetic_builds_nodes(a in small_int_strategy(), b in small_int_strategy()) {
        let mut ss = Session::with_config(SessionConfig::symbolic_only());
        let r = add(&mut ss, &SInteger::from(a), &SInteger::from(b));
        let node = ss.get(r.as_handle().unwrap()).unwrap().clone();
        prop_assert_eq!(node.opcode(), Some(Opcode::Add));
        prop_assert_eq!(ss.literal_of(node.args[0]), Some(&Literal::Int(BigInt::from(a))));
        prop_assert_eq!(ss.literal_of(node.args[1]), Some(&Literal::Int(BigInt::from(b))));
        prop_assert_eq!(ss.stats().folds, 0);
    }

    // =====================================
    // Booleans
    // =====================================

    /// Boolean connectives on concrete operands follow the truth tables
    #[test]
    fn boolean_truth_tables(p in any::<bool>(), q in any::<bool>()) {
        let mut ss = Session::new();
        let (a, b) = (SBool::from(p), SBool::from(q));
        prop_assert_eq!(and(&mut ss, &a, &b), SBool::from(p && q));
        prop_assert_eq!(or(&mut ss, &a, &b), SBool::from(p || q));
        prop_assert_eq!(not(&mut ss, &a), SBool::from(!p));
        prop_assert!(ss.is_empty());
    }

    /// A concrete operand decides or disappears from a connective over a
    /// variable
    #[test]
    fn boolean_identities_with_variable(p in any::<bool>()) {
        let mut ss = Session::new();
        let v = SBool::declare(&mut ss, "v");
        let c = SBool::from(p);
        let conj = and(&mut ss, &v, &c);
        let disj = or(&mut ss, &c, &v);
        if p {
            prop_assert_eq!(conj, v.clone());
            prop_assert_eq!(disj, SBool::from(true));
        } else {
            prop_assert_eq!(conj, SBool::from(false));
            prop_assert_eq!(disj, v.clone());
        }
        prop_assert_eq!(ss.len(), 1);
    }

    /// ite with a concrete condition selects without building anything
    #[test]
    fn ite_selects(p in any::<bool>(), a in small_int_strategy(), b in small_int_strategy()) {
        let mut ss = Session::new();
        let x = SInteger::declare(&mut ss, "x");
        let r = ite(&mut ss, &SBool::from(p), &x, &SInteger::from(b));
        prop_assert_eq!(r, if p { x.clone() } else { SInteger::from(b) });
        let r = ite(&mut ss, &SBool::from(p), &SInteger::from(a), &SInteger::from(b));
        prop_assert_eq!(r, SInteger::from(if p { a } else { b }));
        prop_assert_eq!(ss.len(), 1);
    }
}
