//! Character extraction through emulation.
//!
//! The string theory has no operator returning the k-th character of a
//! string, only whole-string operators. A symbolic `s[i]` is therefore
//! represented by a fresh internal character variable `c` together with the
//! internal assertion
//!
//! ```text
//! (or (not (and (<= 0 i) (< i (str.len s))))
//!     (= (seq.unit c) (str.substr s i 1)))
//! ```
//!
//! Range conjuncts that fold to true are dropped from the printed term.
//!
//! Outside the valid range the assertion is vacuous and `c` is unconstrained,
//! so an out-of-range index leaves the character unspecified instead of making
//! the problem unsatisfiable.

use super::ops::{char_to_str, length, str_to_str_at};
use symstr_core::ast::Opcode;
use symstr_core::emulate::emulate;
use symstr_core::ops::{and, eq, le, lt, not, or};
use symstr_core::session::Session;
use symstr_core::value::{SBool, SChar, SInteger, SString};

/// Symbolic character at `i` in `s`.
///
/// Extracting the same `(s, i)` twice in one session returns the same
/// variable.
pub fn extract(ss: &mut Session, s: &SString, i: &SInteger) -> SChar {
    let key = [s.handle(ss), i.handle(ss)];
    emulate(ss, Opcode::StrAt, &key, |ss, c| {
        let unit = char_to_str(ss, c);
        let at = str_to_str_at(ss, s, i);
        let same = eq(ss, &unit, &at);
        let valid = in_range(ss, s, i);
        let outside = not(ss, &valid);
        or(ss, &outside, &same)
    })
}

/// `0 <= i < |s|`
fn in_range(ss: &mut Session, s: &SString, i: &SInteger) -> SBool {
    let non_negative = le(ss, &SInteger::from(0), i);
    let len = length(ss, s);
    let below = lt(ss, i, &len);
    and(ss, &non_negative, &below)
}
