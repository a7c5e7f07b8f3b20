//! Coercion from host primitives, width reduction and 64-bit interop.

use crate::big_num_constants::MAX_BITS;
use crate::error::{BigIntError, Result};

use super::bitwise::tc_digit;
use super::{kernel, BigInt, ZERO};

/// A primitive value handed over by the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
}

impl Primitive {
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Undefined => "undefined",
            Primitive::Null => "null",
            Primitive::Boolean(_) => "boolean",
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
            Primitive::BigInt(_) => "bigint",
        }
    }

    /// `ToBigInt`: booleans and strings convert, numbers do not.
    pub fn to_big_int(&self) -> Result<BigInt> {
        match self {
            Primitive::BigInt(v) => Ok(v.clone()),
            Primitive::Boolean(b) => Ok(BigInt::from(*b)),
            Primitive::String(s) => s.parse(),
            other => Err(BigIntError::UnsupportedConversionType(other.type_name())),
        }
    }
}

impl From<BigInt> for Primitive {
    fn from(v: BigInt) -> Self {
        Primitive::BigInt(v)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Boolean(b)
    }
}

impl From<f64> for Primitive {
    fn from(x: f64) -> Self {
        Primitive::Number(x)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl TryFrom<&Primitive> for BigInt {
    type Error = BigIntError;

    fn try_from(value: &Primitive) -> Result<Self> {
        value.to_big_int()
    }
}

impl BigInt {
    /// The `BigInt(value)` constructor: like `ToBigInt`, but integral numbers
    /// are accepted too.
    pub fn construct(value: &Primitive) -> Result<BigInt> {
        match value {
            Primitive::Number(x) => BigInt::from_f64(*x),
            other => other.to_big_int(),
        }
    }

    /// Truthiness: every value but zero is true.
    pub fn to_boolean(&self) -> bool {
        !self.is_zero()
    }
}

// asIntN / asUintN
impl BigInt {
    /// `value mod 2^bits`, in `[0, 2^bits)`.
    pub fn as_uint_n(bits: u64, value: &BigInt) -> Result<BigInt> {
        if bits == 0 || value.is_zero() {
            return Ok(ZERO);
        }
        if value.signum > 0 && value.bit_length() <= bits {
            return Ok(value.clone());
        }
        if bits > MAX_BITS {
            return Err(BigIntError::TooLarge);
        }

        let bits = bits as usize;
        let len = (bits + 31) / 32;
        let tc = value.twos_complement();
        let negative = value.signum < 0;
        let mut limbs: Vec<u32> = (0..len).map(|i| tc_digit(&tc, negative, i)).collect();
        let rem = bits % 32;
        if rem != 0 {
            limbs[len - 1] &= (1u32 << rem) - 1;
        }
        Ok(BigInt::new(limbs, 1))
    }

    /// `value` wrapped into `[-2^(bits-1), 2^(bits-1))`.
    pub fn as_int_n(bits: u64, value: &BigInt) -> Result<BigInt> {
        if bits == 0 || value.is_zero() {
            return Ok(ZERO);
        }
        // already in range
        let signed_bits = if value.signum < 0 {
            kernel::bit_length(&kernel::sub_mag(&value.mag, &[1]))
        } else {
            value.bit_length()
        };
        if signed_bits < bits {
            return Ok(value.clone());
        }

        let modded = BigInt::as_uint_n(bits, value)?;
        if modded.test_bit(bits - 1) {
            let modulus = BigInt::new(kernel::shl_mag(&[1], bits as usize), 1);
            Ok(modded - modulus)
        } else {
            Ok(modded)
        }
    }

    /// [`BigInt::as_uint_n`] on a host primitive, coerced with `ToBigInt`.
    pub fn as_uint_n_of(bits: u64, value: &Primitive) -> Result<BigInt> {
        BigInt::as_uint_n(bits, &value.to_big_int()?)
    }

    /// [`BigInt::as_int_n`] on a host primitive, coerced with `ToBigInt`.
    pub fn as_int_n_of(bits: u64, value: &Primitive) -> Result<BigInt> {
        BigInt::as_int_n(bits, &value.to_big_int()?)
    }
}

// 64-bit interop
impl BigInt {
    /// Low and high halves of the low 64 two's-complement bits.
    pub fn to_uint64_parts(&self) -> (u32, u32) {
        let tc = self.twos_complement();
        let negative = self.signum < 0;
        (tc_digit(&tc, negative, 0), tc_digit(&tc, negative, 1))
    }

    /// Like [`BigInt::to_uint64_parts`], with a signed high half.
    pub fn to_int64_parts(&self) -> (u32, i32) {
        let (low, high) = self.to_uint64_parts();
        (low, high as i32)
    }

    pub fn from_uint64_parts(low: u32, high: u32) -> BigInt {
        BigInt::new(vec![low, high], 1)
    }

    pub fn from_int64_parts(low: u32, high: i32) -> BigInt {
        BigInt::from_twos_complement(high < 0, vec![low, high as u32])
    }

    /// The value modulo 2^64.
    pub fn to_u64_wrapping(&self) -> u64 {
        let (low, high) = self.to_uint64_parts();
        ((high as u64) << 32) | low as u64
    }

    /// The value wrapped into the `i64` range.
    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_as_int_n() {
        assert_eq!(BigInt::as_int_n(8, &big("200")).unwrap(), big("-56"));
        assert_eq!(BigInt::as_int_n(8, &big("127")).unwrap(), big("127"));
        assert_eq!(BigInt::as_int_n(8, &big("128")).unwrap(), big("-128"));
        assert_eq!(BigInt::as_int_n(8, &big("-128")).unwrap(), big("-128"));
        assert_eq!(BigInt::as_int_n(8, &big("-129")).unwrap(), big("127"));
        assert_eq!(BigInt::as_int_n(0, &big("-129")).unwrap(), BigInt::zero());
        assert_eq!(BigInt::as_int_n(1, &big("1")).unwrap(), big("-1"));
        assert_eq!(BigInt::as_int_n(64, &big("18446744073709551615")).unwrap(), big("-1"));
        assert_eq!(BigInt::as_int_n(64, &big("9223372036854775808")).unwrap(), big("-9223372036854775808"));
        assert_eq!(BigInt::as_int_n(200, &big("-5")).unwrap(), big("-5"));
    }

    #[test]
    fn test_as_uint_n() {
        assert_eq!(BigInt::as_uint_n(8, &big("-1")).unwrap(), big("255"));
        assert_eq!(BigInt::as_uint_n(8, &big("256")).unwrap(), BigInt::zero());
        assert_eq!(BigInt::as_uint_n(8, &big("257")).unwrap(), big("1"));
        assert_eq!(BigInt::as_uint_n(0, &big("257")).unwrap(), BigInt::zero());
        assert_eq!(BigInt::as_uint_n(64, &big("-1")).unwrap(), big("18446744073709551615"));
        assert_eq!(BigInt::as_uint_n(65, &big("-1")).unwrap(), big("36893488147419103231"));
        assert_eq!(BigInt::as_uint_n(33, &big("-4294967296")).unwrap(), big("4294967296"));
        assert_eq!(BigInt::as_uint_n(1 << 40, &big("-1")), Err(BigIntError::TooLarge));
        assert_eq!(BigInt::as_uint_n(1 << 40, &big("1")).unwrap(), big("1"));
    }

    #[test]
    fn test_as_uint_n_properties() {
        let xs = ["-98765432109876543210", "-1", "0", "7", "340282366920938463463374607431768211457"];
        for x in xs {
            let x = big(x);
            for bits in [1u64, 7, 31, 32, 33, 64, 100, 129] {
                let modulus = BigInt::one() << bits as u32;
                let u = BigInt::as_uint_n(bits, &x).unwrap();
                assert!(!u.sign() && u < modulus);
                assert!((&u - &x).checked_rem(&modulus).unwrap().is_zero());

                let i = BigInt::as_int_n(bits, &x).unwrap();
                let half = BigInt::one() << (bits as u32 - 1);
                assert!(-&half <= i && i < half);
                assert!((&i - &x).checked_rem(&modulus).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn test_int64_parts() {
        assert_eq!(big("-1").to_int64_parts(), (u32::MAX, -1));
        assert_eq!(big("-1").to_uint64_parts(), (u32::MAX, u32::MAX));
        assert_eq!(big("4294967296").to_uint64_parts(), (0, 1));
        assert_eq!(big("-4294967296").to_int64_parts(), (0, -1));
        assert_eq!(big("18446744073709551621").to_uint64_parts(), (5, 0));
        assert_eq!(BigInt::from_int64_parts(u32::MAX, -1), big("-1"));
        assert_eq!(BigInt::from_int64_parts(0, i32::MIN), BigInt::from(i64::MIN));
        assert_eq!(BigInt::from_uint64_parts(u32::MAX, u32::MAX), BigInt::from(u64::MAX));
        assert_eq!(BigInt::from_uint64_parts(0, 0), BigInt::zero());

        for v in [i64::MIN, -5, 0, 5, i64::MAX] {
            let (low, high) = BigInt::from(v).to_int64_parts();
            assert_eq!(BigInt::from_int64_parts(low, high), BigInt::from(v));
            assert_eq!(BigInt::from(v).to_i64_wrapping(), v);
        }
        assert_eq!(big("-1").to_u64_wrapping(), u64::MAX);
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Primitive::from(true).to_big_int().unwrap(), BigInt::one());
        assert_eq!(Primitive::from(" 0x10 ").to_big_int().unwrap(), big("16"));
        assert_eq!(Primitive::from(big("-3")).to_big_int().unwrap(), big("-3"));
        assert_eq!(
            Primitive::from(3.0).to_big_int(),
            Err(BigIntError::UnsupportedConversionType("number"))
        );
        assert_eq!(
            BigInt::try_from(&Primitive::Undefined),
            Err(BigIntError::UnsupportedConversionType("undefined"))
        );
        assert!(Primitive::from("1.5").to_big_int().is_err());
    }

    #[test]
    fn test_construct() {
        assert_eq!(BigInt::construct(&Primitive::Number(3.0)).unwrap(), big("3"));
        assert_eq!(BigInt::construct(&Primitive::Number(0.5)), Err(BigIntError::RangeConversion(0.5)));
        assert_eq!(BigInt::construct(&Primitive::Boolean(false)).unwrap(), BigInt::zero());
        assert_eq!(
            BigInt::construct(&Primitive::Null),
            Err(BigIntError::UnsupportedConversionType("null"))
        );
        assert_eq!(BigInt::as_int_n_of(8, &Primitive::from("200")).unwrap(), big("-56"));
        assert_eq!(BigInt::as_uint_n_of(8, &Primitive::from(true)).unwrap(), big("1"));
        assert!(BigInt::as_uint_n_of(8, &Primitive::from(1.0)).is_err());
    }

    #[test]
    fn test_to_boolean() {
        assert!(!BigInt::zero().to_boolean());
        assert!(big("-1").to_boolean());
    }
}
