//! Symbolic values: either a concrete host value or a node handle.

use crate::ast::{Handle, Kind, Literal};
use crate::session::Session;
use num_bigint::BigInt;
use std::fmt;

/// Host types that have a solver-side kind.
pub trait SymType: Clone + fmt::Debug + PartialEq {
    /// Kind of every value of this type.
    const KIND: Kind;

    /// Convert into a literal node payload.
    fn into_literal(self) -> Literal;

    /// Borrow the payload of a literal of this kind.
    fn view(lit: &Literal) -> Option<&Self>;
}

impl SymType for bool {
    const KIND: Kind = Kind::Bool;

    fn into_literal(self) -> Literal {
        Literal::Bool(self)
    }

    fn view(lit: &Literal) -> Option<&Self> {
        match lit {
            Literal::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl SymType for BigInt {
    const KIND: Kind = Kind::Int;

    fn into_literal(self) -> Literal {
        Literal::Int(self)
    }

    fn view(lit: &Literal) -> Option<&Self> {
        match lit {
            Literal::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl SymType for u8 {
    const KIND: Kind = Kind::Char;

    fn into_literal(self) -> Literal {
        Literal::Char(self)
    }

    fn view(lit: &Literal) -> Option<&Self> {
        match lit {
            Literal::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl SymType for Vec<u8> {
    const KIND: Kind = Kind::String;

    fn into_literal(self) -> Literal {
        Literal::Str(self)
    }

    fn view(lit: &Literal) -> Option<&Self> {
        match lit {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// A value of type `T` that is either known now or a node in the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sym<T> {
    /// Known on the host
    Concrete(T),
    /// Placeholder resolved by the solver
    Symbolic(Handle),
}

/// Symbolic boolean.
pub type SBool = Sym<bool>;
/// Symbolic integer.
pub type SInteger = Sym<BigInt>;
/// Symbolic 8-bit character.
pub type SChar = Sym<u8>;
/// Symbolic string of 8-bit characters.
pub type SString = Sym<Vec<u8>>;

impl<T: SymType> Sym<T> {
    /// Wrap a concrete value.
    pub fn literal(value: impl Into<T>) -> Self {
        Sym::Concrete(value.into())
    }

    /// Declare a named user variable of this type.
    pub fn declare(ss: &mut Session, name: impl Into<String>) -> Self {
        Sym::Symbolic(ss.declare(name, T::KIND))
    }

    /// Allocate an anonymous user variable of this type.
    pub fn fresh(ss: &mut Session) -> Self {
        Sym::Symbolic(ss.fresh_var(T::KIND))
    }

    /// Concrete value, looking through literal nodes.
    #[must_use]
    pub fn concrete<'a>(&'a self, ss: &'a Session) -> Option<&'a T> {
        match self {
            Sym::Concrete(v) => Some(v),
            Sym::Symbolic(h) => ss.literal_of(*h).and_then(T::view),
        }
    }

    /// Whether the value is known without consulting the solver.
    #[must_use]
    pub fn is_concrete(&self, ss: &Session) -> bool {
        self.concrete(ss).is_some()
    }

    /// Handle for use as a node operand, interning concrete values as literals.
    pub fn handle(&self, ss: &mut Session) -> Handle {
        match self {
            Sym::Concrete(v) => ss.mk_literal(v.clone().into_literal()),
            Sym::Symbolic(h) => *h,
        }
    }

    /// Handle if already symbolic.
    #[must_use]
    pub fn as_handle(&self) -> Option<Handle> {
        match self {
            Sym::Symbolic(h) => Some(*h),
            Sym::Concrete(_) => None,
        }
    }
}

impl From<bool> for SBool {
    fn from(b: bool) -> Self {
        Sym::Concrete(b)
    }
}

impl From<i64> for SInteger {
    fn from(n: i64) -> Self {
        Sym::Concrete(BigInt::from(n))
    }
}

impl From<BigInt> for SInteger {
    fn from(n: BigInt) -> Self {
        Sym::Concrete(n)
    }
}

impl From<u8> for SChar {
    fn from(c: u8) -> Self {
        Sym::Concrete(c)
    }
}

impl From<&str> for SString {
    fn from(s: &str) -> Self {
        Sym::Concrete(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for SString {
    fn from(s: &[u8]) -> Self {
        Sym::Concrete(s.to_vec())
    }
}

impl From<Vec<u8>> for SString {
    fn from(s: Vec<u8>) -> Self {
        Sym::Concrete(s)
    }
}
