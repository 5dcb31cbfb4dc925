//! String Theory
//!
//! Operations over strings of 8-bit characters that are either known on the
//! host or symbolic:
//!
//! - **Basics**: length, null, head, tail, concatenation, implode
//! - **Indexing**: substring, length-one substring, character extraction
//! - **Predicates**: infix, prefix, suffix
//! - **Search and rewrite**: indexOf with offset, replace, replaceAll
//! - **Conversions**: string to natural, natural to string, character code
//!
//! ## Concrete and symbolic operands
//!
//! Every operation first tries [`concrete`] evaluation and only builds a node
//! when an operand is symbolic or the input is out of range. Character
//! extraction from a symbolic string is emulated with a fresh variable, see
//! [`char_at`].
//!
//! ```
//! use symstr_core::{Session, SInteger, SString};
//! use symstr_theories::string;
//!
//! let mut ss = Session::new();
//! let hello = SString::from("hello");
//! let ell = string::substr(&mut ss, &hello, &SInteger::from(1), &SInteger::from(3));
//! assert_eq!(ell, SString::from("ell"));
//!
//! let x = SString::declare(&mut ss, "x");
//! let len = string::length(&mut ss, &x);
//! assert!(len.as_handle().is_some());
//! ```

pub mod char_at;
pub mod concrete;
mod ops;

pub use ops::{
    char_to_str, concat, concat_all, drop, empty, head, implode, index_of, is_digit,
    is_infix_of, is_prefix_of, is_suffix_of, length, nat_to_str, null, offset_index_of, ord,
    replace, replace_all, str_eq, str_to_char_at, str_to_nat, str_to_str_at, substr, tail, take,
};
