//! Boolean and integer operations shared by every theory.

use crate::ast::Opcode;
use crate::lift::{defer3, lift1, lift2};
use crate::session::Session;
use crate::value::{SBool, SInteger, Sym, SymType};
use num_bigint::BigInt;

/// Equality over any kind.
pub fn eq<T: SymType>(ss: &mut Session, a: &Sym<T>, b: &Sym<T>) -> SBool {
    if let (Sym::Symbolic(x), Sym::Symbolic(y)) = (a, b)
        && x == y
    {
        return SBool::Concrete(true);
    }
    lift2(ss, Opcode::Eq, Some(|x: &T, y: &T| x == y), a, b)
}

/// Disequality over any kind.
pub fn ne<T: SymType>(ss: &mut Session, a: &Sym<T>, b: &Sym<T>) -> SBool {
    let e = eq(ss, a, b);
    not(ss, &e)
}

/// Boolean negation.
pub fn not(ss: &mut Session, a: &SBool) -> SBool {
    lift1(ss, Opcode::Not, Some(|x: &bool| !x), a)
}

/// Conjunction, short-circuiting on a concrete operand.
pub fn and(ss: &mut Session, a: &SBool, b: &SBool) -> SBool {
    match (a.concrete(ss), b.concrete(ss)) {
        (Some(false), _) | (_, Some(false)) => SBool::Concrete(false),
        (Some(true), _) => b.clone(),
        (_, Some(true)) => a.clone(),
        _ => lift2(ss, Opcode::And, Some(|x: &bool, y: &bool| *x && *y), a, b),
    }
}

/// Disjunction, short-circuiting on a concrete operand.
pub fn or(ss: &mut Session, a: &SBool, b: &SBool) -> SBool {
    match (a.concrete(ss), b.concrete(ss)) {
        (Some(true), _) | (_, Some(true)) => SBool::Concrete(true),
        (Some(false), _) => b.clone(),
        (_, Some(false)) => a.clone(),
        _ => lift2(ss, Opcode::Or, Some(|x: &bool, y: &bool| *x || *y), a, b),
    }
}

/// If-then-else. A concrete condition selects a branch without building a
/// node, even when the branches are symbolic.
pub fn ite<T: SymType>(ss: &mut Session, c: &SBool, t: &Sym<T>, e: &Sym<T>) -> Sym<T> {
    match c.concrete(ss) {
        Some(true) => return t.clone(),
        Some(false) => return e.clone(),
        None => {}
    }
    if t == e {
        return t.clone();
    }
    defer3(ss, Opcode::Ite, c, t, e)
}

/// Integer addition.
pub fn add(ss: &mut Session, a: &SInteger, b: &SInteger) -> SInteger {
    lift2(ss, Opcode::Add, Some(|x: &BigInt, y: &BigInt| x + y), a, b)
}

/// Integer subtraction.
pub fn sub(ss: &mut Session, a: &SInteger, b: &SInteger) -> SInteger {
    lift2(ss, Opcode::Sub, Some(|x: &BigInt, y: &BigInt| x - y), a, b)
}

/// Integer `a <= b`.
pub fn le(ss: &mut Session, a: &SInteger, b: &SInteger) -> SBool {
    lift2(ss, Opcode::Le, Some(|x: &BigInt, y: &BigInt| x <= y), a, b)
}

/// Integer `a < b`.
pub fn lt(ss: &mut Session, a: &SInteger, b: &SInteger) -> SBool {
    lift2(ss, Opcode::Lt, Some(|x: &BigInt, y: &BigInt| x < y), a, b)
}

/// Integer `a >= b`.
pub fn ge(ss: &mut Session, a: &SInteger, b: &SInteger) -> SBool {
    lift2(ss, Opcode::Ge, Some(|x: &BigInt, y: &BigInt| x >= y), a, b)
}

/// Integer `a > b`.
pub fn gt(ss: &mut Session, a: &SInteger, b: &SInteger) -> SBool {
    lift2(ss, Opcode::Gt, Some(|x: &BigInt, y: &BigInt| x > y), a, b)
}
