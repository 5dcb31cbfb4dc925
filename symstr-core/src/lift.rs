//! Lifting host functions over symbolic values.
//!
//! Every operation in the library goes through one of the `lift` entry
//! points. When all operands are concrete and a host function is supplied the
//! result is computed immediately and no node is created. Otherwise concrete
//! operands are interned as literals and the application node is requested from
//! the session's hash-consing table, so repeated sub-expressions share one
//! handle.

use crate::ast::Opcode;
use crate::session::Session;
use crate::value::{Sym, SymType};

#[inline]
fn fold_enabled(ss: &Session) -> bool {
    ss.config().fold_constants
}

/// Lift a unary operation.
pub fn lift1<A, R, F>(ss: &mut Session, op: Opcode, fold: Option<F>, a: &Sym<A>) -> Sym<R>
where
    A: SymType,
    R: SymType,
    F: FnOnce(&A) -> R,
{
    debug_assert_eq!(op.result_kind(&[A::KIND]), Ok(R::KIND));
    if let Some(f) = fold
        && fold_enabled(ss)
        && let Some(x) = a.concrete(ss)
    {
        let r = f(x);
        ss.stats_mut().folds += 1;
        return Sym::Concrete(r);
    }
    let ha = a.handle(ss);
    Sym::Symbolic(ss.intern(op, &[ha], R::KIND))
}

/// Lift a binary operation.
pub fn lift2<A, B, R, F>(
    ss: &mut Session,
    op: Opcode,
    fold: Option<F>,
    a: &Sym<A>,
    b: &Sym<B>,
) -> Sym<R>
where
    A: SymType,
    B: SymType,
    R: SymType,
    F: FnOnce(&A, &B) -> R,
{
    debug_assert_eq!(op.result_kind(&[A::KIND, B::KIND]), Ok(R::KIND));
    if let Some(f) = fold
        && fold_enabled(ss)
        && let (Some(x), Some(y)) = (a.concrete(ss), b.concrete(ss))
    {
        let r = f(x, y);
        ss.stats_mut().folds += 1;
        return Sym::Concrete(r);
    }
    let ha = a.handle(ss);
    let hb = b.handle(ss);
    Sym::Symbolic(ss.intern(op, &[ha, hb], R::KIND))
}

/// Lift a ternary operation.
pub fn lift3<A, B, C, R, F>(
    ss: &mut Session,
    op: Opcode,
    fold: Option<F>,
    a: &Sym<A>,
    b: &Sym<B>,
    c: &Sym<C>,
) -> Sym<R>
where
    A: SymType,
    B: SymType,
    C: SymType,
    R: SymType,
    F: FnOnce(&A, &B, &C) -> R,
{
    debug_assert_eq!(op.result_kind(&[A::KIND, B::KIND, C::KIND]), Ok(R::KIND));
    if let Some(f) = fold
        && fold_enabled(ss)
        && let (Some(x), Some(y), Some(z)) = (a.concrete(ss), b.concrete(ss), c.concrete(ss))
    {
        let r = f(x, y, z);
        ss.stats_mut().folds += 1;
        return Sym::Concrete(r);
    }
    let ha = a.handle(ss);
    let hb = b.handle(ss);
    let hc = c.handle(ss);
    Sym::Symbolic(ss.intern(op, &[ha, hb, hc], R::KIND))
}

/// Lift a ternary operation whose host function is partial.
///
/// Inputs the host function rejects are underspecified: the node is built with
/// literal operands and the solver picks the value.
pub fn lift3_partial<A, B, C, R, F>(
    ss: &mut Session,
    op: Opcode,
    fold: F,
    a: &Sym<A>,
    b: &Sym<B>,
    c: &Sym<C>,
) -> Sym<R>
where
    A: SymType,
    B: SymType,
    C: SymType,
    R: SymType,
    F: FnOnce(&A, &B, &C) -> Option<R>,
{
    if fold_enabled(ss)
        && let (Some(x), Some(y), Some(z)) = (a.concrete(ss), b.concrete(ss), c.concrete(ss))
        && let Some(r) = fold(x, y, z)
    {
        ss.stats_mut().folds += 1;
        return Sym::Concrete(r);
    }
    defer3(ss, op, a, b, c)
}

/// Fold a derived binary operation that has no node of its own.
///
/// `None` when folding is disabled or an operand is symbolic. The caller then
/// builds the operation from primitive nodes.
pub fn fold2<A, B, R, F>(ss: &mut Session, fold: F, a: &Sym<A>, b: &Sym<B>) -> Option<Sym<R>>
where
    A: SymType,
    B: SymType,
    R: SymType,
    F: FnOnce(&A, &B) -> R,
{
    if !fold_enabled(ss) {
        return None;
    }
    let r = fold(a.concrete(ss)?, b.concrete(ss)?);
    ss.stats_mut().folds += 1;
    Some(Sym::Concrete(r))
}

/// Fold a derived operation over a list of operands, see [`fold2`].
pub fn fold_all<A, R, F>(ss: &mut Session, fold: F, xs: &[Sym<A>]) -> Option<Sym<R>>
where
    A: SymType,
    R: SymType,
    F: FnOnce(&[A]) -> R,
{
    if !fold_enabled(ss) {
        return None;
    }
    let values = xs
        .iter()
        .map(|x| x.concrete(ss).cloned())
        .collect::<Option<Vec<A>>>()?;
    let r = fold(&values);
    ss.stats_mut().folds += 1;
    Some(Sym::Concrete(r))
}

/// Build a unary node without a host function.
pub fn defer1<A: SymType, R: SymType>(ss: &mut Session, op: Opcode, a: &Sym<A>) -> Sym<R> {
    lift1::<A, R, fn(&A) -> R>(ss, op, None, a)
}

/// Build a binary node without a host function.
pub fn defer2<A: SymType, B: SymType, R: SymType>(
    ss: &mut Session,
    op: Opcode,
    a: &Sym<A>,
    b: &Sym<B>,
) -> Sym<R> {
    lift2::<A, B, R, fn(&A, &B) -> R>(ss, op, None, a, b)
}

/// Build a ternary node without a host function.
pub fn defer3<A: SymType, B: SymType, C: SymType, R: SymType>(
    ss: &mut Session,
    op: Opcode,
    a: &Sym<A>,
    b: &Sym<B>,
    c: &Sym<C>,
) -> Sym<R> {
    lift3::<A, B, C, R, fn(&A, &B, &C) -> R>(ss, op, None, a, b, c)
}
