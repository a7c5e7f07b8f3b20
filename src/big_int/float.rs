//! Conversions between [`BigInt`] and `f64`.

use std::cmp::Ordering;

use crate::big_num_constants::MAX_SAFE_INTEGER;
use crate::error::{BigIntError, Result};

use super::{kernel, BigInt};

const SIGNIFICAND_BITS: u64 = 52;
const SIGNIFICAND_MASK: u64 = (1 << SIGNIFICAND_BITS) - 1;
const EXPONENT_BIAS: u64 = 1023;

impl BigInt {
    /// Exact conversion from an integral `f64` no larger than `2^53 - 1` in
    /// magnitude.
    pub fn from_f64(x: f64) -> Result<BigInt> {
        if !x.is_finite() || x.trunc() != x || x.abs() > MAX_SAFE_INTEGER {
            return Err(BigIntError::RangeConversion(x));
        }
        let signum = if x < 0.0 { -1 } else { 1 };
        Ok(BigInt::value_of(x.abs() as u64, signum))
    }

    /// Lossy conversion to `f64`.
    ///
    /// The significand is truncated toward zero. Values of 2^1024 or more in
    /// magnitude become infinite.
    pub fn to_f64(&self) -> f64 {
        if self.signum == 0 {
            return 0.0;
        }
        let sign = if self.signum < 0 { 1u64 << 63 } else { 0 };

        let bits = self.bit_length();
        let exponent = bits - 1;
        if exponent > EXPONENT_BIAS {
            log::debug!("to_f64: {}-bit value saturates to infinity", bits);
            return f64::from_bits(sign | 0x7ff0_0000_0000_0000);
        }

        // top 53 bits, leading one included
        let significand = if bits > SIGNIFICAND_BITS + 1 {
            let (top, _) = kernel::shr_mag(&self.mag, (bits - SIGNIFICAND_BITS - 1) as usize);
            kernel::low_u64(&top)
        } else {
            kernel::low_u64(&self.mag) << (SIGNIFICAND_BITS + 1 - bits)
        };

        f64::from_bits(sign | ((exponent + EXPONENT_BIAS) << SIGNIFICAND_BITS) | (significand & SIGNIFICAND_MASK))
    }

    /// Exact comparison against a double.
    ///
    /// `None` means unordered, which only happens for NaN.
    pub fn compare_to_f64(&self, x: f64) -> Option<Ordering> {
        if x.is_nan() {
            return None;
        }
        if x.is_infinite() {
            return Some(if x > 0.0 { Ordering::Less } else { Ordering::Greater });
        }
        if x == 0.0 {
            return Some(self.signum.cmp(&0));
        }
        let (numerator, denominator) = f64_to_rational(x);
        Some((self * &denominator).cmp(&numerator))
    }
}

/// Splits a finite, non-zero double into `numerator / 2^k`.
fn f64_to_rational(x: f64) -> (BigInt, BigInt) {
    let bits = x.to_bits();
    let signum = if bits >> 63 == 1 { -1 } else { 1 };
    let exponent_field = ((bits >> SIGNIFICAND_BITS) & 0x7ff) as i64;
    let fraction = bits & SIGNIFICAND_MASK;

    // subnormals have no implicit leading one
    let (significand, exponent) = if exponent_field == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << SIGNIFICAND_BITS), exponent_field - 1075)
    };

    let numerator = BigInt::value_of(significand, signum);
    if exponent >= 0 {
        (numerator << exponent as u32, BigInt::one())
    } else {
        (numerator, BigInt::one() << (-exponent) as u32)
    }
}

impl TryFrom<f64> for BigInt {
    type Error = BigIntError;

    fn try_from(x: f64) -> Result<Self> {
        BigInt::from_f64(x)
    }
}

impl PartialEq<f64> for BigInt {
    fn eq(&self, other: &f64) -> bool {
        self.compare_to_f64(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for BigInt {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.compare_to_f64(*other)
    }
}

impl PartialEq<BigInt> for f64 {
    fn eq(&self, other: &BigInt) -> bool {
        other == self
    }
}

impl PartialOrd<BigInt> for f64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        other.compare_to_f64(*self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(BigInt::from_f64(9007199254740991.0).unwrap(), big("9007199254740991"));
        assert_eq!(BigInt::from_f64(-9007199254740991.0).unwrap(), big("-9007199254740991"));
        assert_eq!(BigInt::from_f64(-4294967296.0).unwrap().limbs(), &[0, 1]);
        assert_eq!(BigInt::from_f64(-0.0).unwrap(), BigInt::zero());
        assert!(!BigInt::from_f64(-0.0).unwrap().sign());
        assert_eq!(BigInt::try_from(42.0).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_from_f64_rejects() {
        assert_eq!(BigInt::from_f64(1.5), Err(BigIntError::RangeConversion(1.5)));
        assert_eq!(
            BigInt::from_f64(9007199254740992.0),
            Err(BigIntError::RangeConversion(9007199254740992.0))
        );
        assert!(BigInt::from_f64(f64::NAN).is_err());
        assert!(BigInt::from_f64(f64::INFINITY).is_err());
        assert!(BigInt::from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(BigInt::zero().to_f64(), 0.0);
        assert_eq!(big("1").to_f64(), 1.0);
        assert_eq!(big("-3").to_f64(), -3.0);
        assert_eq!(big("9007199254740991").to_f64(), 9007199254740991.0);
        assert_eq!(big("18446744073709551616").to_f64(), 18446744073709551616.0);
        assert_eq!(big("-4294967296").to_f64(), -4294967296.0);
        // 2^54 - 1 keeps its top 53 bits
        assert_eq!(big("18014398509481983").to_f64(), 18014398509481982.0);
        assert_eq!(big("1000000000000000000000").to_f64(), 1e21);
    }

    #[test]
    fn test_to_f64_overflow_boundary() {
        let max = (BigInt::one() << 1024) - BigInt::one();
        assert_eq!(max.to_f64(), f64::MAX);
        assert_eq!((BigInt::one() << 1024).to_f64(), f64::INFINITY);
        assert_eq!((-(BigInt::one() << 1024)).to_f64(), f64::NEG_INFINITY);
        // 33 limbs, still finite
        assert_eq!((BigInt::one() << 1023).to_f64(), 2f64.powi(1023));
    }

    #[test]
    fn test_compare_to_f64() {
        assert_eq!(big("1").compare_to_f64(0.5), Some(Ordering::Greater));
        assert_eq!(big("0").compare_to_f64(0.5), Some(Ordering::Less));
        assert_eq!(big("-1").compare_to_f64(-0.5), Some(Ordering::Less));
        assert_eq!(big("0").compare_to_f64(-0.0), Some(Ordering::Equal));
        assert_eq!(big("0").compare_to_f64(5e-324), Some(Ordering::Less));
        assert_eq!(big("0").compare_to_f64(-5e-324), Some(Ordering::Greater));
        assert_eq!(big("9007199254740993").compare_to_f64(9007199254740992.0), Some(Ordering::Greater));
        assert_eq!(big("18446744073709551616").compare_to_f64(18446744073709551616.0), Some(Ordering::Equal));
        assert_eq!(big("5").compare_to_f64(f64::NAN), None);
        assert_eq!(big("5").compare_to_f64(f64::INFINITY), Some(Ordering::Less));
        assert_eq!(big("-5").compare_to_f64(f64::NEG_INFINITY), Some(Ordering::Greater));
        let huge = BigInt::from(10).pow_u32(400);
        assert_eq!(huge.compare_to_f64(f64::MAX), Some(Ordering::Greater));
        assert_eq!((-huge).compare_to_f64(f64::MIN), Some(Ordering::Less));
    }

    #[test]
    fn test_mixed_operators() {
        assert!(big("3") > 2.5);
        assert!(big("3") == 3.0);
        assert!(2.5 < big("3"));
        assert!(3.0 == big("3"));
        assert!(!(big("3") < f64::NAN));
        assert!(!(big("3") >= f64::NAN));
    }
}
