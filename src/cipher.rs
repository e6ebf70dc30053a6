//! Fixed-offset character shift for string literals.
//!
//! Every character is replaced by the one `shift` code points above it. This
//! is a disguise, not encryption: [`decode`] with the same shift and policy
//! restores the input exactly.

use crate::error::{Error, Result};

/// Number of Unicode scalar values: everything below U+110000 minus the
/// 2048 surrogates.
const SCALAR_COUNT: u32 = 0x11_0000 - 0x800;
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// What to do when a shifted code point is not a valid `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with [`Error::UnencodableLiteral`].
    #[default]
    Reject,
    /// Shift modulo the scalar value space, stepping over the surrogate gap.
    Wrap,
}

/// Shift every character of `s` up by `shift`.
pub fn encode(s: &str, shift: u32, policy: OverflowPolicy) -> Result<String> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match policy {
            OverflowPolicy::Reject => (c as u32)
                .checked_add(shift)
                .and_then(char::from_u32)
                .ok_or(Error::UnencodableLiteral {
                    character: c,
                    position,
                }),
            OverflowPolicy::Wrap => Ok(wrap(c, i64::from(shift))),
        })
        .collect()
}

/// Undo [`encode`].
pub fn decode(s: &str, shift: u32, policy: OverflowPolicy) -> Result<String> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match policy {
            OverflowPolicy::Reject => (c as u32)
                .checked_sub(shift)
                .and_then(char::from_u32)
                .ok_or(Error::UnencodableLiteral {
                    character: c,
                    position,
                }),
            OverflowPolicy::Wrap => Ok(wrap(c, -i64::from(shift))),
        })
        .collect()
}

fn wrap(c: char, delta: i64) -> char {
    let index = i64::from(scalar_index(c));
    let shifted = (index + delta).rem_euclid(i64::from(SCALAR_COUNT));
    // rem_euclid keeps the value in 0..SCALAR_COUNT, which always fits.
    scalar_from_index(shifted as u32)
}

/// Position of `c` in the dense sequence of scalar values.
fn scalar_index(c: char) -> u32 {
    let cp = c as u32;
    if cp < SURROGATE_START {
        cp
    } else {
        cp - SURROGATE_LEN
    }
}

fn scalar_from_index(index: u32) -> char {
    let cp = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_LEN
    };
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}
