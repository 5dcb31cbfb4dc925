//! Property-based tests for the symbolic path
//!
//! Operands are variables. The built terms are evaluated under random models
//! and must agree with the host semantics, and emulated characters must be
//! pinned down by their internal assertions.

use num_bigint::BigInt;
use proptest::prelude::*;
use symstr_core::ops::{self, add, eq};
use symstr_core::{SBool, SChar, SInteger, SString, Session, SessionConfig, Sym, SymType};
use symstr_theories::model::{Evaluator, Model, satisfies};
use symstr_theories::string::{self, concrete};

/// Strategy for short strings over a small alphabet
fn small_string() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ab0".to_vec()), 0..6)
}

/// Strategy for indices around the length of a short string
fn small_index() -> impl Strategy<Value = i64> {
    -3i64..9i64
}

/// Helper to evaluate a value that only depends on assigned variables
fn value_of<T: SymType>(ss: &Session, model: &Model, v: &Sym<T>) -> T {
    Evaluator::new(ss, model)
        .eval_sym(v)
        .expect("well-sorted term")
        .expect("all variables assigned")
}

proptest! {
    // =====================================
    // Characters
    // =====================================

    /// The character extracted from a symbolic singleton is forced to be its
    /// source character
    #[test]
    fn extracted_char_is_pinned(c in any::<u8>(), other in any::<u8>()) {
        let mut ss = Session::new();
        let cv = SChar::declare(&mut ss, "c");
        let unit = string::char_to_str(&mut ss, &cv);
        let d = string::str_to_char_at(&mut ss, &unit, &SInteger::from(0));

        let len = string::length(&mut ss, &unit);
        let mut model = Model::new();
        model.set(&cv, c);
        prop_assert_eq!(value_of(&ss, &model, &len), BigInt::from(1));

        model.set(&d, c);
        prop_assert_eq!(satisfies(&ss, &model), Ok(Some(true)));
        if other != c {
            model.set(&d, other);
            prop_assert_eq!(satisfies(&ss, &model), Ok(Some(false)));
        }
    }

    /// head of a symbolic string holds the first character when there is one
    /// and is unconstrained otherwise
    #[test]
    fn head_is_underspecified_on_empty(s in small_string(), guess in any::<u8>()) {
        let mut ss = Session::new();
        let sv = SString::declare(&mut ss, "s");
        let h = string::head(&mut ss, &sv);

        let mut model = Model::new();
        model.set(&sv, s.clone());
        model.set(&h, guess);
        let expected = s.first().is_none_or(|&first| first == guess);
        prop_assert_eq!(satisfies(&ss, &model), Ok(Some(expected)));
    }

    // =====================================
    // Length and emptiness
    // =====================================

    /// Length is additive over symbolic concatenation
    #[test]
    fn concat_length_is_additive(a in small_string(), b in small_string()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let y = SString::declare(&mut ss, "y");
        let xy = string::concat(&mut ss, &x, &y);
        let lxy = string::length(&mut ss, &xy);
        let lx = string::length(&mut ss, &x);
        let ly = string::length(&mut ss, &y);
        let sum = add(&mut ss, &lx, &ly);
        let same = eq(&mut ss, &lxy, &sum);

        let mut model = Model::new();
        model.set(&x, a);
        model.set(&y, b);
        prop_assert!(value_of(&ss, &model, &same));
    }

    /// null, zero length and equality with "" agree
    #[test]
    fn null_iff_length_zero(s in small_string()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let null = string::null(&mut ss, &x);
        let len = string::length(&mut ss, &x);
        let zero_len = eq(&mut ss, &len, &SInteger::from(0));

        let mut model = Model::new();
        model.set(&x, s.clone());
        prop_assert_eq!(value_of(&ss, &model, &null), s.is_empty());
        prop_assert_eq!(value_of(&ss, &model, &zero_len), s.is_empty());
    }

    /// tail of a non-empty string is one shorter, and tail of a cons is the rest
    #[test]
    fn tail_laws(h in any::<u8>(), s in small_string()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let c = SChar::declare(&mut ss, "c");
        let unit = string::char_to_str(&mut ss, &c);
        let cons = string::concat(&mut ss, &unit, &x);
        let rest = string::tail(&mut ss, &cons);

        let t = string::tail(&mut ss, &x);
        let lt = string::length(&mut ss, &t);

        let mut model = Model::new();
        model.set(&x, s.clone());
        model.set(&c, h);
        prop_assert_eq!(value_of(&ss, &model, &rest), s.clone());
        if !s.is_empty() {
            prop_assert_eq!(value_of(&ss, &model, &lt), BigInt::from(s.len() - 1));
        }
    }

    // =====================================
    // Predicates
    // =====================================

    /// The middle of a concatenation is an infix, the front a prefix
    #[test]
    fn infix_and_prefix(a in small_string(), b in small_string(), c in small_string()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let y = SString::declare(&mut ss, "y");
        let z = SString::declare(&mut ss, "z");
        let xyz = string::concat_all(&mut ss, &[x.clone(), y.clone(), z.clone()]);
        let infix = string::is_infix_of(&mut ss, &y, &xyz);
        let prefix = string::is_prefix_of(&mut ss, &x, &xyz);
        let suffix = string::is_suffix_of(&mut ss, &z, &xyz);

        let mut model = Model::new();
        model.set(&x, a);
        model.set(&y, b);
        model.set(&z, c);
        prop_assert!(value_of(&ss, &model, &infix));
        prop_assert!(value_of(&ss, &model, &prefix));
        prop_assert!(value_of(&ss, &model, &suffix));
    }

    // =====================================
    // Slicing
    // =====================================

    /// take and drop split a string for every count
    #[test]
    fn take_drop_split(s in small_string(), i in small_index()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let n = SInteger::declare(&mut ss, "n");
        let front = string::take(&mut ss, &n, &x);
        let back = string::drop(&mut ss, &n, &x);
        let joined = string::concat(&mut ss, &front, &back);
        let front_len = string::length(&mut ss, &front);

        let mut model = Model::new();
        model.set(&x, s.clone());
        model.set(&n, i);
        prop_assert_eq!(value_of(&ss, &model, &joined), s.clone());
        if i >= 0 {
            prop_assert!(value_of(&ss, &model, &front_len) <= BigInt::from(i));
        }
        prop_assert_eq!(value_of(&ss, &model, &front), concrete::take(&BigInt::from(i), &s));
    }

    /// Two in-range substrings reassemble the string
    #[test]
    fn substr_round_trip(s in small_string(), cut in 0usize..6) {
        let mut ss = Session::new();
        let cut = cut.min(s.len());
        let x = SString::declare(&mut ss, "x");
        let i = SInteger::declare(&mut ss, "i");
        let len = string::length(&mut ss, &x);
        let rest = ops::sub(&mut ss, &len, &i);
        let front = string::substr(&mut ss, &x, &SInteger::from(0), &i);
        let back = string::substr(&mut ss, &x, &i, &rest);
        let joined = string::concat(&mut ss, &front, &back);

        let mut model = Model::new();
        model.set(&x, s.clone());
        model.set(&i, BigInt::from(cut));
        prop_assert_eq!(value_of(&ss, &model, &joined), s);
    }

    /// Building without folding and evaluating agrees with folding wherever
    /// the fold is defined
    #[test]
    fn unfolded_substr_agrees_with_fold(s in small_string(), o in small_index(), l in small_index()) {
        let mut ss = Session::with_config(SessionConfig::symbolic_only());
        let r = string::substr(
            &mut ss,
            &SString::from(s.clone()),
            &SInteger::from(o),
            &SInteger::from(l),
        );
        prop_assert!(r.as_handle().is_some());

        let value = value_of(&ss, &Model::new(), &r);
        let (o, l) = (BigInt::from(o), BigInt::from(l));
        if let Some(folded) = concrete::substr(&s, &o, &l) {
            prop_assert_eq!(value, folded);
        } else {
            prop_assert_eq!(value, concrete::substr_total(&s, &o, &l));
        }
    }

    // =====================================
    // Search and rewrite
    // =====================================

    /// Replacing the empty string prepends the replacement
    #[test]
    fn replace_empty_prepends(s in small_string(), dst in small_string()) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let d = SString::declare(&mut ss, "d");
        let r = string::replace(&mut ss, &x, &string::empty(), &d);

        let mut model = Model::new();
        model.set(&x, s.clone());
        model.set(&d, dst.clone());
        prop_assert_eq!(value_of(&ss, &model, &r), concrete::concat(&dst, &s));
    }

    /// An offset past the end finds nothing
    #[test]
    fn offset_past_end_is_minus_one(s in small_string(), sub in small_string(), extra in 0usize..4) {
        let mut ss = Session::new();
        let x = SString::declare(&mut ss, "x");
        let y = SString::declare(&mut ss, "y");
        let off = SInteger::declare(&mut ss, "off");
        let r = string::offset_index_of(&mut ss, &x, &y, &off);

        let mut model = Model::new();
        model.set(&x, s.clone());
        model.set(&y, sub.clone());
        model.set(&off, BigInt::from(s.len() + 1 + extra));
        prop_assert_eq!(value_of(&ss, &model, &r), BigInt::from(-1));

        if !sub.is_empty() {
            model.set(&off, BigInt::from(s.len() + extra));
            prop_assert_eq!(value_of(&ss, &model, &r), BigInt::from(-1));
        }
    }

    /// isDigit holds exactly on ASCII digits
    #[test]
    fn is_digit_matches_host(c in any::<u8>()) {
        let mut ss = Session::new();
        let cv = SChar::declare(&mut ss, "c");
        let digit = string::is_digit(&mut ss, &cv);

        let mut model = Model::new();
        model.set(&cv, c);
        prop_assert_eq!(value_of(&ss, &model, &digit), c.is_ascii_digit());
        prop_assert_eq!(
            string::is_digit(&mut ss, &SChar::from(c)),
            SBool::from(c.is_ascii_digit())
        );
    }
}
