//! String parsing and printing.

use std::fmt;
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

use super::{kernel, BigInt};

fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(BigIntError::InvalidRadix(radix))
    }
}

/// Splits an optional leading `+` or `-`. Returns `(negative, signed, rest)`.
fn split_sign(s: &str) -> (bool, bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, true, rest)
    } else {
        (false, false, s)
    }
}

fn strip_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Length of the longest prefix made of digits of `radix`.
fn digit_prefix_len(s: &str, radix: u32) -> usize {
    s.bytes()
        .take_while(|&b| (b as char).to_digit(radix).is_some())
        .count()
}

/// Accumulates an all-digit ASCII string into a magnitude, one `u32`-sized
/// group of digits at a time.
fn magnitude_from_digits(digits: &str, radix: u32) -> Vec<u32> {
    let group = DIGITS_PER_INT[radix as usize];
    let bytes = digits.as_bytes();

    let mut magnitude = Vec::with_capacity(bytes.len() / group + 1);
    let mut first_group_len = bytes.len() % group;
    if first_group_len == 0 {
        first_group_len = group;
    }

    let mut cursor = 0;
    let mut group_len = first_group_len;
    while cursor < bytes.len() {
        let group_val = bytes[cursor..cursor + group_len]
            .iter()
            .fold(0u32, |acc, &b| acc * radix + (b as char).to_digit(radix).unwrap_or(0));
        let super_radix = if group_len == group {
            INT_RADIX[radix as usize]
        } else {
            radix.pow(group_len as u32)
        };
        kernel::mul_add_small(&mut magnitude, super_radix, group_val);
        cursor += group_len;
        group_len = group;
    }

    kernel::trim(magnitude)
}

/// Strictly parses `digits`: at least one digit and nothing else.
fn parse_digits(input: &str, digits: &str, negative: bool, radix: u32) -> Result<BigInt> {
    if digits.is_empty() || digit_prefix_len(digits, radix) != digits.len() {
        return Err(BigIntError::syntax(input));
    }
    let signum = if negative { -1 } else { 1 };
    Ok(BigInt::new(magnitude_from_digits(digits, radix), signum))
}

// 实现解析
impl BigInt {
    /// Strict parse with an explicit radix: an optional sign followed by
    /// digits only. The inverse of [`BigInt::to_string_radix`].
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        check_radix(radix)?;
        let (negative, _, digits) = split_sign(s);
        parse_digits(s, digits, negative, radix)
    }

    /// Permissive `parseInt`-style parse.
    ///
    /// Leading whitespace is skipped and parsing stops at the first character
    /// that is not a digit. A radix of `0` accepts a `0x` prefix and defaults
    /// to 10. Fails only if no digit was consumed.
    pub fn parse_int(s: &str, radix: u32) -> Result<BigInt> {
        if radix != 0 {
            check_radix(radix)?;
        }
        let (negative, _, mut rest) = split_sign(s.trim_start());

        let strip_prefix = radix == 0 || radix == 16;
        let mut radix = if radix == 0 { 10 } else { radix };
        if strip_prefix {
            if let Some((16, body)) = strip_radix_prefix(rest) {
                radix = 16;
                rest = body;
            }
        }

        let len = digit_prefix_len(rest, radix);
        if len == 0 {
            return Err(BigIntError::syntax(s));
        }
        let signum = if negative { -1 } else { 1 };
        Ok(BigInt::new(magnitude_from_digits(&rest[..len], radix), signum))
    }

    /// Whether `s`, read as an integer literal, denotes this value.
    ///
    /// A string that does not parse is simply not equal. An empty or
    /// all-whitespace string equals zero.
    pub fn eq_decimal_str(&self, s: &str) -> bool {
        if s.trim().is_empty() {
            return self.is_zero();
        }
        match s.parse::<BigInt>() {
            Ok(value) => value == *self,
            Err(_) => false,
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Strict literal parse: surrounding whitespace, an optional sign, and
    /// for unsigned literals an optional `0x`, `0o` or `0b` prefix.
    fn from_str(s: &str) -> Result<BigInt> {
        let trimmed = s.trim();
        let (negative, signed, rest) = split_sign(trimmed);
        let (radix, digits) = match strip_radix_prefix(rest) {
            Some(prefixed) if !signed => prefixed,
            _ => (10, rest),
        };
        parse_digits(s, digits, negative, radix)
    }
}

impl PartialEq<str> for BigInt {
    fn eq(&self, other: &str) -> bool {
        self.eq_decimal_str(other)
    }
}

impl PartialEq<&str> for BigInt {
    fn eq(&self, other: &&str) -> bool {
        self.eq_decimal_str(other)
    }
}

// 实现打印
impl BigInt {
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        let digits = self.abs_to_string(radix);
        if self.signum < 0 {
            Ok(format!("-{}", digits))
        } else {
            Ok(digits)
        }
    }

    /// Digits of the magnitude. `radix` must already be valid.
    fn abs_to_string(&self, radix: u32) -> String {
        if self.signum == 0 {
            return String::from("0");
        }
        let group = DIGITS_PER_INT[radix as usize];
        let super_radix = INT_RADIX[radix as usize];

        // Translate number to string, a digit group at a time
        let mut digit_groups = Vec::with_capacity(self.mag.len() * 32 / group + 1);
        let mut tmp = self.mag.clone();
        while !tmp.is_empty() {
            let (q, r) = kernel::div_rem_small(&tmp, super_radix);
            digit_groups.push(r);
            tmp = q;
        }

        let mut result = String::with_capacity(digit_groups.len() * group);
        for (i, &g) in digit_groups.iter().rev().enumerate() {
            let mut val_s = Vec::with_capacity(group);
            let mut val = g;
            while val != 0 {
                val_s.push(DIGITS[(val % radix) as usize]);
                val /= radix;
            }
            // Prepend (any) leading zeros for this digit group
            if i > 0 {
                for _ in val_s.len()..group {
                    result.push('0');
                }
            }
            result.extend(val_s.iter().rev());
        }
        result
    }

    /// Hex dump of the limbs, e.g. `-0x0000000100000000n`.
    pub fn dump(&self) -> String {
        if self.signum == 0 {
            return String::from("0n");
        }
        let mut s = String::with_capacity(self.mag.len() * 8 + 4);
        if self.signum < 0 {
            s.push('-');
        }
        s.push_str("0x");
        for d in self.mag.iter().rev() {
            s.push_str(&format!("{:08x}", d));
        }
        s.push('n');
        s
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "", &self.abs_to_string(10))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "0x", &self.abs_to_string(16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "0x", &self.abs_to_string(16).to_uppercase())
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "0o", &self.abs_to_string(8))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "0b", &self.abs_to_string(2))
    }
}
