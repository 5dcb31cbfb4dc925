//! Model evaluation.
//!
//! A [`Model`] assigns literals to variables. The [`Evaluator`] computes the
//! value of any node in a session under such an assignment, giving the
//! underspecified string cases their SMT-LIB2 values (`str.substr` out of
//! range is empty, `str.at` out of range is empty, and so on). It also checks
//! the session's assertions, which makes symbolic results testable on the host
//! without a solver.

use crate::string::concrete;
use num_bigint::BigInt;
use rustc_hash::FxHashMap;
use symstr_core::ast::{Handle, Literal, NodeOp, Opcode};
use symstr_core::error::{Result, SymstrError};
use symstr_core::session::Session;
use symstr_core::value::{Sym, SymType};

/// Assignment of literals to variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: FxHashMap<Handle, Literal>,
}

impl Model {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a literal to a variable handle.
    pub fn assign(&mut self, var: Handle, value: Literal) {
        self.values.insert(var, value);
    }

    /// Assign a host value to a symbolic variable. Concrete values are left
    /// alone.
    pub fn set<T: SymType>(&mut self, var: &Sym<T>, value: impl Into<T>) {
        if let Some(h) = var.as_handle() {
            self.assign(h, value.into().into_literal());
        }
    }

    /// Value assigned to a variable.
    #[must_use]
    pub fn get(&self, var: Handle) -> Option<&Literal> {
        self.values.get(&var)
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evaluates session nodes under a model, memoizing shared sub-terms.
#[derive(Debug)]
pub struct Evaluator<'a> {
    ss: &'a Session,
    model: &'a Model,
    cache: FxHashMap<Handle, Option<Literal>>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator.
    #[must_use]
    pub fn new(ss: &'a Session, model: &'a Model) -> Self {
        Self {
            ss,
            model,
            cache: FxHashMap::default(),
        }
    }

    /// Value of a node, or `None` if it depends on an unassigned variable.
    pub fn eval(&mut self, handle: Handle) -> Result<Option<Literal>> {
        if let Some(cached) = self.cache.get(&handle) {
            return Ok(cached.clone());
        }
        let ss = self.ss;
        let node = ss.get(handle).ok_or(SymstrError::UnknownHandle(handle))?;

        let value = match &node.op {
            NodeOp::Lit(lit) => Some(lit.clone()),
            NodeOp::Var(_) => match self.model.get(handle) {
                Some(lit) if lit.kind() != node.kind => {
                    return Err(SymstrError::ModelSortMismatch {
                        handle,
                        expected: node.kind,
                        found: lit.kind(),
                    });
                }
                other => other.cloned(),
            },
            NodeOp::App(Opcode::Ite) => {
                let &[c, t, e] = node.args.as_slice() else {
                    return Err(ill_sorted(Opcode::Ite, node.args.len()));
                };
                match self.eval(c)? {
                    Some(Literal::Bool(true)) => self.eval(t)?,
                    Some(Literal::Bool(false)) => self.eval(e)?,
                    Some(_) => return Err(ill_sorted(Opcode::Ite, 0)),
                    None => None,
                }
            }
            NodeOp::App(op) => {
                let op = *op;
                let mut values = Vec::with_capacity(node.args.len());
                let mut known = true;
                for &arg in &node.args {
                    match self.eval(arg)? {
                        Some(v) => values.push(v),
                        None => known = false,
                    }
                }
                if known {
                    Some(apply(op, &values)?)
                } else {
                    None
                }
            }
        };

        self.cache.insert(handle, value.clone());
        Ok(value)
    }

    /// Host value of a symbolic value.
    pub fn eval_sym<T: SymType>(&mut self, value: &Sym<T>) -> Result<Option<T>> {
        match value {
            Sym::Concrete(v) => Ok(Some(v.clone())),
            Sym::Symbolic(h) => match self.eval(*h)? {
                Some(lit) => T::view(&lit).cloned().map(Some).ok_or_else(|| {
                    SymstrError::Internal(format!("{h} does not evaluate to a {}", T::KIND))
                }),
                None => Ok(None),
            },
        }
    }

    /// Whether every assertion holds. `None` when some assertion depends on
    /// an unassigned variable and none is false.
    pub fn check_assertions(&mut self) -> Result<Option<bool>> {
        let ss = self.ss;
        let mut all_known = true;
        for assertion in ss.assertions() {
            match self.eval(assertion.handle)? {
                Some(Literal::Bool(true)) => {}
                Some(Literal::Bool(false)) => return Ok(Some(false)),
                Some(other) => return Err(SymstrError::NonBooleanAssertion(other.kind())),
                None => all_known = false,
            }
        }
        Ok(all_known.then_some(true))
    }
}

/// Evaluate one handle under `model`.
pub fn evaluate(ss: &Session, model: &Model, handle: Handle) -> Result<Option<Literal>> {
    Evaluator::new(ss, model).eval(handle)
}

/// Whether `model` satisfies every assertion in `ss`.
pub fn satisfies(ss: &Session, model: &Model) -> Result<Option<bool>> {
    Evaluator::new(ss, model).check_assertions()
}

fn ill_sorted(op: Opcode, index: usize) -> SymstrError {
    SymstrError::Internal(format!("ill-sorted operand {index} of `{op}`"))
}

fn bool_arg(op: Opcode, args: &[Literal], i: usize) -> Result<bool> {
    args.get(i)
        .and_then(Literal::as_bool)
        .ok_or_else(|| ill_sorted(op, i))
}

fn int_arg(op: Opcode, args: &[Literal], i: usize) -> Result<&BigInt> {
    args.get(i)
        .and_then(Literal::as_int)
        .ok_or_else(|| ill_sorted(op, i))
}

fn char_arg(op: Opcode, args: &[Literal], i: usize) -> Result<u8> {
    args.get(i)
        .and_then(Literal::as_char)
        .ok_or_else(|| ill_sorted(op, i))
}

fn str_arg(op: Opcode, args: &[Literal], i: usize) -> Result<&[u8]> {
    args.get(i)
        .and_then(Literal::as_str)
        .ok_or_else(|| ill_sorted(op, i))
}

/// SMT-LIB2 semantics of an operator on ground operands.
fn apply(op: Opcode, args: &[Literal]) -> Result<Literal> {
    let b = |i| bool_arg(op, args, i);
    let n = |i| int_arg(op, args, i);
    let c = |i| char_arg(op, args, i);
    let s = |i| str_arg(op, args, i);

    let value = match op {
        Opcode::Eq => {
            let (x, y) = (args.first(), args.get(1));
            match (x, y) {
                (Some(x), Some(y)) if x.kind() == y.kind() => Literal::Bool(x == y),
                _ => return Err(ill_sorted(op, 1)),
            }
        }
        Opcode::Not => Literal::Bool(!b(0)?),
        Opcode::And => Literal::Bool(b(0)? && b(1)?),
        Opcode::Or => Literal::Bool(b(0)? || b(1)?),
        Opcode::Ite => {
            let branch = if b(0)? { 1 } else { 2 };
            args.get(branch).cloned().ok_or_else(|| ill_sorted(op, branch))?
        }
        Opcode::Add => Literal::Int(n(0)? + n(1)?),
        Opcode::Sub => Literal::Int(n(0)? - n(1)?),
        Opcode::Le => Literal::Bool(n(0)? <= n(1)?),
        Opcode::Lt => Literal::Bool(n(0)? < n(1)?),
        Opcode::Ge => Literal::Bool(n(0)? >= n(1)?),
        Opcode::Gt => Literal::Bool(n(0)? > n(1)?),
        Opcode::StrLen => Literal::Int(concrete::length(s(0)?)),
        Opcode::StrConcat => Literal::Str(concrete::concat(s(0)?, s(1)?)),
        Opcode::StrAt => Literal::Str(concrete::substr_total(s(0)?, n(1)?, &BigInt::from(1))),
        Opcode::StrSubstr => Literal::Str(concrete::substr_total(s(0)?, n(1)?, n(2)?)),
        Opcode::StrContains => Literal::Bool(concrete::is_infix_of(s(1)?, s(0)?)),
        Opcode::StrPrefixOf => Literal::Bool(concrete::is_prefix_of(s(0)?, s(1)?)),
        Opcode::StrSuffixOf => Literal::Bool(concrete::is_suffix_of(s(0)?, s(1)?)),
        Opcode::StrReplace => Literal::Str(concrete::replace(s(0)?, s(1)?, s(2)?)),
        Opcode::StrReplaceAll => Literal::Str(concrete::replace_all(s(0)?, s(1)?, s(2)?)),
        Opcode::StrIndexOf => Literal::Int(concrete::offset_index_of(s(0)?, s(1)?, n(2)?)),
        Opcode::StrToInt => Literal::Int(concrete::str_to_nat(s(0)?)),
        Opcode::IntToStr => Literal::Str(concrete::nat_to_str(n(0)?)),
        Opcode::StrUnit => Literal::Str(concrete::char_to_str(c(0)?)),
        Opcode::CharToCode => Literal::Int(concrete::ord(c(0)?)),
    };
    Ok(value)
}
