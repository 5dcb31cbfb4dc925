//! SMT-LIB2 Printer

use crate::ast::{Handle, Kind, Literal, NodeOp};
use crate::session::Session;
use num_traits::Signed;
use std::fmt::{self, Write};

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => f.write_str("Bool"),
            Kind::Int => f.write_str("Int"),
            Kind::Char => f.write_str("(_ BitVec 8)"),
            Kind::String => f.write_str("String"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(n) if n.is_negative() => write!(f, "(- {})", n.abs()),
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Char(c) => write!(f, "#x{c:02x}"),
            Literal::Str(s) => write!(f, "\"{}\"", escape_string(s)),
        }
    }
}

/// Escape bytes for use inside an SMT-LIB2 string literal.
///
/// Quotes are doubled; backslashes and bytes outside printable ASCII use the
/// `\u{..}` form.
#[must_use]
pub fn escape_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' => out.push_str("\"\""),
            b'\\' => out.push_str("\\u{5c}"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\u{{{b:x}}}");
            }
        }
    }
    out
}

/// Display adapter for a term, see [`display`].
pub struct DisplayTerm<'a> {
    ss: &'a Session,
    handle: Handle,
}

/// Render `handle` as an SMT-LIB2 term.
#[must_use]
pub fn display(ss: &Session, handle: Handle) -> DisplayTerm<'_> {
    DisplayTerm { ss, handle }
}

impl DisplayTerm<'_> {
    fn write_term(&self, f: &mut fmt::Formatter<'_>, handle: Handle) -> fmt::Result {
        let Some(node) = self.ss.get(handle) else {
            return write!(f, "<unknown {handle}>");
        };
        match &node.op {
            NodeOp::Lit(lit) => write!(f, "{lit}"),
            NodeOp::Var(id) => match self.ss.var_info(*id) {
                Some(info) => f.write_str(&info.name),
                None => write!(f, "<var {}>", id.0),
            },
            NodeOp::App(op) => {
                write!(f, "({op}")?;
                for &arg in &node.args {
                    f.write_char(' ')?;
                    self.write_term(f, arg)?;
                }
                f.write_char(')')
            }
        }
    }
}

impl fmt::Display for DisplayTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_term(f, self.handle)
    }
}
