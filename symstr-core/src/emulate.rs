//! Emulation of operators the solver theory cannot express directly.
//!
//! An emulated operator introduces a fresh internal variable and asserts a
//! defining equivalence over it, instead of inventing a new primitive. The
//! variable, the nodes built by the definition and the assertion are
//! registered as one unit: if the definition fails, the session is rolled back
//! to where it was before the variable was allocated.
//!
//! Results are memoized per `(opcode, operands)`, so asking for the same derived
//! value twice returns the same variable and asserts the definition once.

use crate::ast::{Handle, Opcode};
use crate::session::Session;
use crate::value::{SBool, Sym, SymType};
use std::convert::Infallible;
use tracing::debug;

/// Introduce a fresh variable of type `R` constrained by `define`.
///
/// `op` and `args` identify the derived value for memoization. `define`
/// receives the fresh variable and returns the boolean that must hold for it.
/// A definition that folds to `true` asserts nothing; one that folds to
/// `false` asserts a literal `false`.
pub fn try_emulate<R, E, F>(
    ss: &mut Session,
    op: Opcode,
    args: &[Handle],
    define: F,
) -> Result<Sym<R>, E>
where
    R: SymType,
    F: FnOnce(&mut Session, &Sym<R>) -> Result<SBool, E>,
{
    if let Some(existing) = ss.emulated(op, args) {
        ss.stats_mut().emulation_hits += 1;
        return Ok(Sym::Symbolic(existing));
    }

    let cp = ss.checkpoint();
    let var = ss.fresh_internal_var(R::KIND);
    let result = Sym::Symbolic(var);

    let condition = match define(ss, &result) {
        Ok(condition) => condition,
        Err(e) => {
            debug!(%op, "emulation definition failed");
            ss.rollback(cp);
            return Err(e);
        }
    };

    if condition != Sym::Concrete(true) {
        let h = condition.handle(ss);
        ss.push_internal_assertion(h);
    }
    ss.record_emulation(op, args, var);
    ss.stats_mut().emulations += 1;
    debug!(%op, result = %var, "emulated derived operator");
    Ok(result)
}

/// Infallible form of [`try_emulate`].
pub fn emulate<R, F>(ss: &mut Session, op: Opcode, args: &[Handle], define: F) -> Sym<R>
where
    R: SymType,
    F: FnOnce(&mut Session, &Sym<R>) -> SBool,
{
    let Ok(result) =
        try_emulate::<R, Infallible, _>(ss, op, args, |ss, var| Ok(define(ss, var)));
    result
}
