//! SMT-LIB2 rendering of session terms.
//!
//! Only printing is provided; the solver protocol itself lives outside this
//! workspace.

mod printer;

pub use printer::{DisplayTerm, display, escape_string};
