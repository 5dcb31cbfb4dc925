//! Host semantics of the string operations.
//!
//! These functions are the ground truth for constant folding. Functions that
//! return `Option` are partial: `None` marks an underspecified input, for which
//! the library builds a node instead of folding. The `*_total` variants give the
//! standard SMT-LIB2 value for those inputs and are used by the model evaluator.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Convert a non-negative integer to an index.
fn to_index(n: &BigInt) -> Option<usize> {
    n.to_usize()
}

/// Position of the first occurrence of `needle` at or after `from`.
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    (from..=haystack.len()).find(|&i| haystack[i..].starts_with(needle))
}

/// Number of characters.
#[must_use]
pub fn length(s: &[u8]) -> BigInt {
    BigInt::from(s.len())
}

/// Singleton string.
#[must_use]
pub fn char_to_str(c: u8) -> Vec<u8> {
    vec![c]
}

/// Character at `i`, `None` when `i` is out of range.
#[must_use]
pub fn char_at(s: &[u8], i: &BigInt) -> Option<u8> {
    to_index(i).and_then(|i| s.get(i).copied())
}

/// Slice of length `l` starting at `o`.
///
/// `None` when `o < 0`, `o > |s|`, `l < 0` or `o + l > |s|`.
#[must_use]
pub fn substr(s: &[u8], o: &BigInt, l: &BigInt) -> Option<Vec<u8>> {
    let o = to_index(o)?;
    let l = to_index(l)?;
    let end = o.checked_add(l)?;
    s.get(o..end).map(<[u8]>::to_vec)
}

/// SMT-LIB2 `str.substr`: empty unless `0 <= o < |s|` and `l > 0`, clamped at
/// the end of `s`.
#[must_use]
pub fn substr_total(s: &[u8], o: &BigInt, l: &BigInt) -> Vec<u8> {
    let (Some(o), Some(l)) = (to_index(o), to_index(l)) else {
        return Vec::new();
    };
    if o >= s.len() || l == 0 {
        return Vec::new();
    }
    let end = o.saturating_add(l).min(s.len());
    s[o..end].to_vec()
}

/// Sequence append.
#[must_use]
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Concatenation of single characters.
#[must_use]
pub fn implode(cs: &[u8]) -> Vec<u8> {
    cs.to_vec()
}

/// Whether `sub` occurs contiguously in `s`.
#[must_use]
pub fn is_infix_of(sub: &[u8], s: &[u8]) -> bool {
    find(s, sub, 0).is_some()
}

/// Whether `s` starts with `pre`.
#[must_use]
pub fn is_prefix_of(pre: &[u8], s: &[u8]) -> bool {
    s.starts_with(pre)
}

/// Whether `s` ends with `suf`.
#[must_use]
pub fn is_suffix_of(suf: &[u8], s: &[u8]) -> bool {
    s.ends_with(suf)
}

/// First `i` characters; empty for `i <= 0`, all of `s` past the end.
#[must_use]
pub fn take(i: &BigInt, s: &[u8]) -> Vec<u8> {
    match to_index(i) {
        Some(i) => s[..i.min(s.len())].to_vec(),
        None if i.is_negative() => Vec::new(),
        // Too large for usize, hence past the end.
        None => s.to_vec(),
    }
}

/// All but the first `i` characters; all of `s` for `i <= 0`.
#[must_use]
pub fn drop(i: &BigInt, s: &[u8]) -> Vec<u8> {
    match to_index(i) {
        Some(i) => s[i.min(s.len())..].to_vec(),
        None if i.is_negative() => s.to_vec(),
        // Too large for usize, hence past the end.
        None => Vec::new(),
    }
}

/// Replace the first occurrence of `src` with `dst`.
///
/// An empty `src` matches at the start, so `dst` is prepended.
#[must_use]
pub fn replace(s: &[u8], src: &[u8], dst: &[u8]) -> Vec<u8> {
    if src.is_empty() {
        return concat(dst, s);
    }
    match find(s, src, 0) {
        Some(i) => {
            let mut out = Vec::with_capacity(s.len() - src.len() + dst.len());
            out.extend_from_slice(&s[..i]);
            out.extend_from_slice(dst);
            out.extend_from_slice(&s[i + src.len()..]);
            out
        }
        None => s.to_vec(),
    }
}

/// Replace every non-overlapping occurrence of `src`, scanning left to right.
/// An empty `src` leaves `s` unchanged.
#[must_use]
pub fn replace_all(s: &[u8], src: &[u8], dst: &[u8]) -> Vec<u8> {
    if src.is_empty() {
        return s.to_vec();
    }
    let mut out = Vec::with_capacity(s.len());
    let mut pos = 0;
    while let Some(i) = find(s, src, pos) {
        out.extend_from_slice(&s[pos..i]);
        out.extend_from_slice(dst);
        pos = i + src.len();
    }
    out.extend_from_slice(&s[pos..]);
    out
}

/// Smallest index `>= off` where `sub` occurs, or -1.
///
/// Returns -1 without searching when `off < 0` or `off > |s|`.
#[must_use]
pub fn offset_index_of(s: &[u8], sub: &[u8], off: &BigInt) -> BigInt {
    let Some(off) = to_index(off).filter(|&o| o <= s.len()) else {
        return BigInt::from(-1);
    };
    match find(s, sub, off) {
        Some(i) => BigInt::from(i),
        None => BigInt::from(-1),
    }
}

/// [`offset_index_of`] from the start.
#[must_use]
pub fn index_of(s: &[u8], sub: &[u8]) -> BigInt {
    offset_index_of(s, sub, &BigInt::from(0))
}

/// Decimal value of a non-empty all-digit string, otherwise -1.
#[must_use]
pub fn str_to_nat(s: &[u8]) -> BigInt {
    if s.is_empty() || !s.iter().all(u8::is_ascii_digit) {
        return BigInt::from(-1);
    }
    BigInt::parse_bytes(s, 10).unwrap_or_else(|| BigInt::from(-1))
}

/// Decimal rendering of a natural; empty for negative input.
#[must_use]
pub fn nat_to_str(n: &BigInt) -> Vec<u8> {
    if n.is_negative() {
        Vec::new()
    } else {
        n.to_string().into_bytes()
    }
}

/// Character code.
#[must_use]
pub fn ord(c: u8) -> BigInt {
    BigInt::from(c)
}
