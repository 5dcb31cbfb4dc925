//! Expression nodes, handles and kinds.
//!
//! Every value that reaches the solver is a [`Node`] stored in the session
//! arena and referred to by a [`Handle`]. Nodes are immutable once interned;
//! two structurally identical nodes always share a handle.

use crate::error::{Result, SymstrError};
use num_bigint::BigInt;
use smallvec::SmallVec;
use std::fmt;

/// Session-scoped reference to a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u32);

impl Handle {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Identifier of a declared or fresh variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u32);

/// Semantic domain of a value or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Booleans
    Bool,
    /// Unbounded signed integers (also carries naturals)
    Int,
    /// 8-bit character codes
    Char,
    /// Finite sequences of characters
    String,
}

/// A ground value that can appear as a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Boolean constant
    Bool(bool),
    /// Integer constant
    Int(BigInt),
    /// Character constant
    Char(u8),
    /// String constant
    Str(Vec<u8>),
}

impl Literal {
    /// Kind of this literal.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Literal::Bool(_) => Kind::Bool,
            Literal::Int(_) => Kind::Int,
            Literal::Char(_) => Kind::Char,
            Literal::Str(_) => Kind::String,
        }
    }

    /// Boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any.
    #[must_use]
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Literal::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Character payload, if any.
    #[must_use]
    pub fn as_char(&self) -> Option<u8> {
        match self {
            Literal::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// String payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&[u8]> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Operators understood by the solver.
///
/// Names follow SMT-LIB2; see [`Opcode::smtlib_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Polymorphic equality
    Eq,
    /// Boolean negation
    Not,
    /// Binary conjunction
    And,
    /// Binary disjunction
    Or,
    /// If-then-else over any kind
    Ite,
    /// Integer addition
    Add,
    /// Integer subtraction
    Sub,
    /// Integer `<=`
    Le,
    /// Integer `<`
    Lt,
    /// Integer `>=`
    Ge,
    /// Integer `>`
    Gt,
    /// String length
    StrLen,
    /// String concatenation
    StrConcat,
    /// Length-one substring at an index.
    ///
    /// The string library emits `str.substr` for this and uses the opcode as
    /// the memo key of character extraction. It is kept as a node for terms
    /// built through [`Session::mk_app`](crate::session::Session::mk_app).
    StrAt,
    /// Substring by offset and length
    StrSubstr,
    /// Containment, `(str.contains s sub)`
    StrContains,
    /// Prefix test, `(str.prefixof pre s)`
    StrPrefixOf,
    /// Suffix test, `(str.suffixof suf s)`
    StrSuffixOf,
    /// Replace first occurrence
    StrReplace,
    /// Replace every occurrence
    StrReplaceAll,
    /// Offset search
    StrIndexOf,
    /// Decimal string to integer, -1 when not a natural
    StrToInt,
    /// Integer to decimal string, empty when negative
    IntToStr,
    /// Singleton string of one character
    StrUnit,
    /// Character code as an integer
    CharToCode,
}

impl Opcode {
    /// SMT-LIB2 function symbol.
    #[must_use]
    pub fn smtlib_name(self) -> &'static str {
        match self {
            Opcode::Eq => "=",
            Opcode::Not => "not",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Ite => "ite",
            Opcode::Add => "+",
            Opcode::Sub => "-",
            Opcode::Le => "<=",
            Opcode::Lt => "<",
            Opcode::Ge => ">=",
            Opcode::Gt => ">",
            Opcode::StrLen => "str.len",
            Opcode::StrConcat => "str.++",
            Opcode::StrAt => "str.at",
            Opcode::StrSubstr => "str.substr",
            Opcode::StrContains => "str.contains",
            Opcode::StrPrefixOf => "str.prefixof",
            Opcode::StrSuffixOf => "str.suffixof",
            Opcode::StrReplace => "str.replace",
            Opcode::StrReplaceAll => "str.replace_all",
            Opcode::StrIndexOf => "str.indexof",
            Opcode::StrToInt => "str.to_int",
            Opcode::IntToStr => "str.from_int",
            Opcode::StrUnit => "seq.unit",
            Opcode::CharToCode => "bv2nat",
        }
    }

    /// Operand kinds and result kind of the monomorphic operators.
    fn fixed_signature(self) -> Option<(&'static [Kind], Kind)> {
        use Kind::{Bool, Char, Int, String};
        let sig: (&'static [Kind], Kind) = match self {
            Opcode::Eq | Opcode::Ite => return None,
            Opcode::Not => (&[Bool], Bool),
            Opcode::And | Opcode::Or => (&[Bool, Bool], Bool),
            Opcode::Add | Opcode::Sub => (&[Int, Int], Int),
            Opcode::Le | Opcode::Lt | Opcode::Ge | Opcode::Gt => (&[Int, Int], Bool),
            Opcode::StrLen => (&[String], Int),
            Opcode::StrConcat => (&[String, String], String),
            Opcode::StrAt => (&[String, Int], String),
            Opcode::StrSubstr => (&[String, Int, Int], String),
            Opcode::StrContains | Opcode::StrPrefixOf | Opcode::StrSuffixOf => {
                (&[String, String], Bool)
            }
            Opcode::StrReplace | Opcode::StrReplaceAll => (&[String, String, String], String),
            Opcode::StrIndexOf => (&[String, String, Int], Int),
            Opcode::StrToInt => (&[String], Int),
            Opcode::IntToStr => (&[Int], String),
            Opcode::StrUnit => (&[Char], String),
            Opcode::CharToCode => (&[Char], Int),
        };
        Some(sig)
    }

    /// Check operand kinds and compute the result kind.
    pub fn result_kind(self, args: &[Kind]) -> Result<Kind> {
        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(SymstrError::ArityMismatch {
                    op: self,
                    expected,
                    found: args.len(),
                })
            }
        };
        let same = |expected: Kind, found: Kind| {
            if expected == found {
                Ok(())
            } else {
                Err(SymstrError::SortMismatch {
                    op: self,
                    expected,
                    found,
                })
            }
        };

        match self.fixed_signature() {
            Some((params, result)) => {
                arity(params.len())?;
                for (&expected, &found) in params.iter().zip(args) {
                    same(expected, found)?;
                }
                Ok(result)
            }
            None if self == Opcode::Eq => {
                arity(2)?;
                same(args[0], args[1])?;
                Ok(Kind::Bool)
            }
            None => {
                arity(3)?;
                same(Kind::Bool, args[0])?;
                same(args[1], args[2])?;
                Ok(args[1])
            }
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.smtlib_name())
    }
}

/// Head of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeOp {
    /// Ground value
    Lit(Literal),
    /// Declared or fresh variable
    Var(VarId),
    /// Operator application
    App(Opcode),
}

/// An interned expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// Head symbol
    pub op: NodeOp,
    /// Ordered operands
    pub args: SmallVec<[Handle; 3]>,
    /// Result kind
    pub kind: Kind,
}

impl Node {
    /// Literal payload when this node is a ground value.
    #[must_use]
    pub fn literal(&self) -> Option<&Literal> {
        match &self.op {
            NodeOp::Lit(lit) => Some(lit),
            _ => None,
        }
    }

    /// Variable id when this node is a variable.
    #[must_use]
    pub fn var(&self) -> Option<VarId> {
        match self.op {
            NodeOp::Var(v) => Some(v),
            _ => None,
        }
    }

    /// Operator when this node is an application.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        match self.op {
            NodeOp::App(op) => Some(op),
            _ => None,
        }
    }
}
