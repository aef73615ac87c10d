//! Helpers for reading the whitespace separated text form of a model.

use std::str::FromStr;

use crate::error::{ParseColorError, Result};

/// Read exactly `N` whitespace separated components from `s`.
pub(crate) fn components<T, const N: usize>(s: &str) -> Result<[T; N]>
where
    T: FromStr + Default + Copy,
{
    let parts = s.split_whitespace().collect::<Vec<_>>();

    if parts.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if parts.len() != N {
        return Err(ParseColorError::ComponentCount {
            expected: N,
            found: parts.len(),
        });
    }

    let mut out = [T::default(); N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| ParseColorError::InvalidComponent(part.to_string()))?;
    }

    Ok(out)
}

/// Read a 24-bit hex value, with an optional `0x` or `#` prefix.
pub(crate) fn hex(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);

    if digits.is_empty() || digits.len() > 6 {
        return Err(ParseColorError::InvalidHexLength(digits.len()));
    }

    // `from_str_radix` would also accept a leading sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(s.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::InvalidHex(s.to_string()))
}
