//! symstr Theories - Strings over a Session
//!
//! This crate provides the string theory of the symstr DSL:
//! - Host semantics of every string operation ([`string::concrete`])
//! - The lifted operation library, folding concrete operands and building
//!   SMT-LIB2 string terms otherwise ([`string`])
//! - Character extraction through emulation ([`string::char_at`])
//! - A model evaluator giving every node its SMT-LIB2 value under an
//!   assignment ([`model`])
//!
//! # Examples
//!
//! ```
//! use symstr_core::{smtlib, Session, SInteger, SString};
//! use symstr_theories::model::{Evaluator, Model};
//! use symstr_theories::string;
//!
//! let mut ss = Session::new();
//! let s = SString::declare(&mut ss, "s");
//! let len = string::length(&mut ss, &s);
//! let h = len.as_handle().unwrap();
//! assert_eq!(smtlib::display(&ss, h).to_string(), "(str.len s)");
//!
//! let mut model = Model::new();
//! model.set(&s, "abc");
//! let value = Evaluator::new(&ss, &model).eval_sym(&len).unwrap();
//! assert_eq!(value, Some(3.into()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod string;

pub use model::{Evaluator, Model, evaluate, satisfies};
