//! Error types.

use crate::ast::{Handle, Kind, Opcode};
use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SymstrError>;

/// Errors raised by the checked (untyped) entry points.
///
/// The typed `Sym<T>` API cannot produce these; out-of-range string
/// arguments are never errors and leave the result underspecified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymstrError {
    /// An operand has the wrong kind for its operator.
    #[error("sort mismatch in `{op}`: expected {expected}, found {found}")]
    SortMismatch {
        /// Operator being built
        op: Opcode,
        /// Kind the operator requires
        expected: Kind,
        /// Kind of the offending operand
        found: Kind,
    },

    /// An operator received the wrong number of operands.
    #[error("arity mismatch in `{op}`: expected {expected} operands, found {found}")]
    ArityMismatch {
        /// Operator being built
        op: Opcode,
        /// Required operand count
        expected: usize,
        /// Supplied operand count
        found: usize,
    },

    /// A handle that was not allocated by this session.
    #[error("unknown handle {0}")]
    UnknownHandle(Handle),

    /// Only boolean handles can be asserted.
    #[error("cannot assert a term of sort {0}")]
    NonBooleanAssertion(Kind),

    /// A model assigns a value of the wrong kind to a variable.
    #[error("model assigns a {found} value to {handle}, which has sort {expected}")]
    ModelSortMismatch {
        /// Variable handle
        handle: Handle,
        /// Sort of the variable
        expected: Kind,
        /// Kind of the assigned literal
        found: Kind,
    },

    /// Invariant violation inside the library.
    #[error("internal error: {0}")]
    Internal(String),
}
