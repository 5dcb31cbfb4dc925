//! symstr Core - Sessions, Expression Nodes and Lifting
//!
//! This crate provides the foundation every symstr theory builds on:
//! - Arena-allocated, hash-consed expression nodes referenced by [`Handle`]
//! - A [`Session`] holding nodes, variables and assertions for one solve
//! - Symbolic values ([`Sym`]) that are either concrete or a node
//! - The lifting protocol that folds concrete operands on the host and builds
//!   nodes otherwise
//! - Emulation of derived operators through a fresh variable and an internal
//!   assertion
//! - An SMT-LIB2 term printer
//!
//! # Examples
//!
//! ## Folding and deferring
//!
//! ```
//! use symstr_core::{ops, Session, SInteger};
//!
//! let mut ss = Session::new();
//!
//! // Concrete operands are evaluated immediately
//! let seven = ops::add(&mut ss, &SInteger::from(3), &SInteger::from(4));
//! assert_eq!(seven, SInteger::from(7));
//! assert!(ss.is_empty());
//!
//! // A symbolic operand produces a node
//! let x = SInteger::declare(&mut ss, "x");
//! let sum = ops::add(&mut ss, &x, &seven);
//! assert!(sum.as_handle().is_some());
//! ```
//!
//! ## Printing
//!
//! ```
//! use symstr_core::{ops, smtlib, Session, SInteger};
//!
//! let mut ss = Session::new();
//! let x = SInteger::declare(&mut ss, "x");
//! let le = ops::le(&mut ss, &x, &SInteger::from(-2));
//! let h = le.as_handle().unwrap();
//! assert_eq!(smtlib::display(&ss, h).to_string(), "(<= x (- 2))");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod config;
pub mod emulate;
pub mod error;
pub mod lift;
pub mod ops;
pub mod session;
pub mod smtlib;
pub mod statistics;
pub mod value;

pub use ast::{Handle, Kind, Literal, Node, NodeOp, Opcode, VarId};
pub use config::SessionConfig;
pub use emulate::{emulate, try_emulate};
pub use error::{Result, SymstrError};
pub use lift::{defer1, defer2, defer3, fold_all, fold2, lift1, lift2, lift3, lift3_partial};
pub use session::{Assertion, AssertionOrigin, Checkpoint, Session, VarInfo};
pub use statistics::SessionStats;
pub use value::{SBool, SChar, SInteger, SString, Sym, SymType};
