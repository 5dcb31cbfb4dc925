//! String operations over symbolic values.
//!
//! Each operation folds on the host when its operands are concrete and the
//! input is in range, and otherwise builds the corresponding SMT-LIB node
//! through the lifting protocol. Out-of-range inputs are never errors: the
//! node is built with literal operands and the solver picks the value.

use super::char_at;
use super::concrete;
use num_bigint::BigInt;
use symstr_core::ast::Opcode;
use symstr_core::lift::{fold_all, fold2, lift1, lift2, lift3, lift3_partial};
use symstr_core::ops::{and, eq, ge, ite, le, sub};
use symstr_core::session::Session;
use symstr_core::value::{SBool, SChar, SInteger, SString, Sym};

fn is_concretely_empty(ss: &Session, s: &SString) -> bool {
    s.concrete(ss).is_some_and(Vec::is_empty)
}

/// The empty string.
#[must_use]
pub fn empty() -> SString {
    Sym::Concrete(Vec::new())
}

/// Number of characters in `s`.
pub fn length(ss: &mut Session, s: &SString) -> SInteger {
    lift1(ss, Opcode::StrLen, Some(|s: &Vec<u8>| concrete::length(s)), s)
}

/// String equality.
pub fn str_eq(ss: &mut Session, x: &SString, y: &SString) -> SBool {
    eq(ss, x, y)
}

/// Whether `s` is empty.
pub fn null(ss: &mut Session, s: &SString) -> SBool {
    if let Some(cs) = s.concrete(ss) {
        return SBool::Concrete(cs.is_empty());
    }
    eq(ss, s, &empty())
}

/// First character; underspecified for the empty string.
pub fn head(ss: &mut Session, s: &SString) -> SChar {
    str_to_char_at(ss, s, &SInteger::from(0))
}

/// All but the first character; underspecified for the empty string.
pub fn tail(ss: &mut Session, s: &SString) -> SString {
    if let Some(cs) = s.concrete(ss)
        && let Some((_, rest)) = cs.split_first()
    {
        return Sym::Concrete(rest.to_vec());
    }
    let len = length(ss, s);
    let rest = sub(ss, &len, &SInteger::from(1));
    substr(ss, s, &SInteger::from(1), &rest)
}

/// Singleton string holding `c`.
pub fn char_to_str(ss: &mut Session, c: &SChar) -> SString {
    lift1(ss, Opcode::StrUnit, Some(|c: &u8| concrete::char_to_str(*c)), c)
}

/// Length-one substring at `i`; underspecified when `i` is out of range.
pub fn str_to_str_at(ss: &mut Session, s: &SString, i: &SInteger) -> SString {
    substr(ss, s, i, &SInteger::from(1))
}

/// Character at `i`; underspecified when `i` is out of range.
///
/// A symbolic result is an internal variable tied to `s` by an assertion, see
/// [`char_at`](super::char_at).
pub fn str_to_char_at(ss: &mut Session, s: &SString, i: &SInteger) -> SChar {
    if let (Some(cs), Some(ci)) = (s.concrete(ss), i.concrete(ss))
        && let Some(c) = concrete::char_at(cs, ci)
    {
        return Sym::Concrete(c);
    }
    char_at::extract(ss, s, i)
}

/// String made of the given characters.
pub fn implode(ss: &mut Session, cs: &[SChar]) -> SString {
    if let Some(folded) = fold_all(ss, concrete::implode, cs) {
        return folded;
    }
    let mut acc = empty();
    for c in cs.iter().rev() {
        let unit = char_to_str(ss, c);
        acc = concat(ss, &unit, &acc);
    }
    acc
}

/// Concatenation. A concretely empty operand returns the other one unchanged.
pub fn concat(ss: &mut Session, x: &SString, y: &SString) -> SString {
    if is_concretely_empty(ss, x) {
        return y.clone();
    }
    if is_concretely_empty(ss, y) {
        return x.clone();
    }
    lift2(
        ss,
        Opcode::StrConcat,
        Some(|a: &Vec<u8>, b: &Vec<u8>| concrete::concat(a, b)),
        x,
        y,
    )
}

/// Left-to-right concatenation of a list of strings.
pub fn concat_all(ss: &mut Session, xs: &[SString]) -> SString {
    let mut acc = empty();
    for x in xs {
        acc = concat(ss, &acc, x);
    }
    acc
}

/// Whether `sub` occurs in `s`. True without a node when `sub` is concretely
/// empty.
pub fn is_infix_of(ss: &mut Session, sub: &SString, s: &SString) -> SBool {
    if is_concretely_empty(ss, sub) {
        return SBool::Concrete(true);
    }
    lift2(
        ss,
        Opcode::StrContains,
        Some(|s: &Vec<u8>, sub: &Vec<u8>| concrete::is_infix_of(sub, s)),
        s,
        sub,
    )
}

/// Whether `s` starts with `pre`.
pub fn is_prefix_of(ss: &mut Session, pre: &SString, s: &SString) -> SBool {
    if is_concretely_empty(ss, pre) {
        return SBool::Concrete(true);
    }
    lift2(
        ss,
        Opcode::StrPrefixOf,
        Some(|pre: &Vec<u8>, s: &Vec<u8>| concrete::is_prefix_of(pre, s)),
        pre,
        s,
    )
}

/// Whether `s` ends with `suf`.
pub fn is_suffix_of(ss: &mut Session, suf: &SString, s: &SString) -> SBool {
    if is_concretely_empty(ss, suf) {
        return SBool::Concrete(true);
    }
    lift2(
        ss,
        Opcode::StrSuffixOf,
        Some(|suf: &Vec<u8>, s: &Vec<u8>| concrete::is_suffix_of(suf, s)),
        suf,
        s,
    )
}

/// First `i` characters of `s`.
pub fn take(ss: &mut Session, i: &SInteger, s: &SString) -> SString {
    if let Some(folded) = fold2(ss, |i: &BigInt, s: &Vec<u8>| concrete::take(i, s), i, s) {
        return folded;
    }
    let zero = SInteger::from(0);
    let non_positive = le(ss, i, &zero);
    if non_positive == SBool::Concrete(true) {
        return empty();
    }
    let len = length(ss, s);
    let past_end = ge(ss, i, &len);
    let inner = if past_end == SBool::Concrete(true) {
        s.clone()
    } else {
        let prefix = substr(ss, s, &zero, i);
        ite(ss, &past_end, s, &prefix)
    };
    ite(ss, &non_positive, &empty(), &inner)
}

/// All but the first `i` characters of `s`.
pub fn drop(ss: &mut Session, i: &SInteger, s: &SString) -> SString {
    if let Some(folded) = fold2(ss, |i: &BigInt, s: &Vec<u8>| concrete::drop(i, s), i, s) {
        return folded;
    }
    let len = length(ss, s);
    let past_end = ge(ss, i, &len);
    if past_end == SBool::Concrete(true) {
        return empty();
    }
    let non_positive = le(ss, i, &SInteger::from(0));
    let inner = if non_positive == SBool::Concrete(true) {
        s.clone()
    } else {
        let rest = sub(ss, &len, i);
        let suffix = substr(ss, s, i, &rest);
        ite(ss, &non_positive, s, &suffix)
    };
    ite(ss, &past_end, &empty(), &inner)
}

/// Substring of length `l` at offset `o`.
///
/// Underspecified when `o < 0`, `o > |s|`, `l < 0` or `o + l > |s|`.
pub fn substr(ss: &mut Session, s: &SString, o: &SInteger, l: &SInteger) -> SString {
    lift3_partial(
        ss,
        Opcode::StrSubstr,
        |s: &Vec<u8>, o: &BigInt, l: &BigInt| concrete::substr(s, o, l),
        s,
        o,
        l,
    )
}

/// Replace the first occurrence of `src` in `s` with `dst`.
///
/// An empty `src` prepends `dst`; a concrete `src` longer than a concrete `s`
/// leaves `s` unchanged.
pub fn replace(ss: &mut Session, s: &SString, src: &SString, dst: &SString) -> SString {
    if is_concretely_empty(ss, src) {
        return concat(ss, dst, s);
    }
    if let (Some(cs), Some(csrc)) = (s.concrete(ss), src.concrete(ss))
        && csrc.len() > cs.len()
    {
        return s.clone();
    }
    lift3(
        ss,
        Opcode::StrReplace,
        Some(|s: &Vec<u8>, src: &Vec<u8>, dst: &Vec<u8>| concrete::replace(s, src, dst)),
        s,
        src,
        dst,
    )
}

/// Replace every occurrence of `src` in `s` with `dst`. An empty `src` leaves
/// `s` unchanged.
pub fn replace_all(ss: &mut Session, s: &SString, src: &SString, dst: &SString) -> SString {
    if is_concretely_empty(ss, src) {
        return s.clone();
    }
    lift3(
        ss,
        Opcode::StrReplaceAll,
        Some(|s: &Vec<u8>, src: &Vec<u8>, dst: &Vec<u8>| concrete::replace_all(s, src, dst)),
        s,
        src,
        dst,
    )
}

/// Index of the first occurrence of `sub` in `s`, or -1.
pub fn index_of(ss: &mut Session, s: &SString, sub: &SString) -> SInteger {
    let fold = |s: &Vec<u8>, sub: &Vec<u8>| concrete::index_of(s, sub);
    if let Some(folded) = fold2(ss, fold, s, sub) {
        return folded;
    }
    offset_index_of(ss, s, sub, &SInteger::from(0))
}

/// Index of the first occurrence of `sub` at or after `off`, or -1.
///
/// -1 without a search when `off < 0` or `off > |s|` for concrete `s` and
/// `off`.
pub fn offset_index_of(ss: &mut Session, s: &SString, sub: &SString, off: &SInteger) -> SInteger {
    if let (Some(cs), Some(coff)) = (s.concrete(ss), off.concrete(ss))
        && (coff < &BigInt::from(0) || coff > &concrete::length(cs))
    {
        return SInteger::from(-1);
    }
    lift3(
        ss,
        Opcode::StrIndexOf,
        Some(|s: &Vec<u8>, sub: &Vec<u8>, off: &BigInt| concrete::offset_index_of(s, sub, off)),
        s,
        sub,
        off,
    )
}

/// Decimal value of `s`, or -1 when `s` is empty or has a non-digit.
pub fn str_to_nat(ss: &mut Session, s: &SString) -> SInteger {
    lift1(ss, Opcode::StrToInt, Some(|s: &Vec<u8>| concrete::str_to_nat(s)), s)
}

/// Decimal rendering of `n`, or the empty string when `n < 0`.
pub fn nat_to_str(ss: &mut Session, n: &SInteger) -> SString {
    lift1(ss, Opcode::IntToStr, Some(concrete::nat_to_str), n)
}

/// Character code of `c`.
pub fn ord(ss: &mut Session, c: &SChar) -> SInteger {
    lift1(ss, Opcode::CharToCode, Some(|c: &u8| concrete::ord(*c)), c)
}

/// Whether `c` is an ASCII decimal digit.
pub fn is_digit(ss: &mut Session, c: &SChar) -> SBool {
    let code = ord(ss, c);
    let lo = ge(ss, &code, &SInteger::from(i64::from(b'0')));
    let hi = le(ss, &code, &SInteger::from(i64::from(b'9')));
    and(ss, &lo, &hi)
}
