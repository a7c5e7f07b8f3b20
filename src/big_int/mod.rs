//! # BigInt
//! Immutable arbitrary-precision integers. Bitwise operations behave as if BigInt were represented in two's-complement notation.
//! # Example
//! ```
//! use js_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;

use crate::big_num_cache::*;
use crate::big_num_constants::*;

/// Implements an operator trait for every owned/borrowed operand combination,
/// plus the matching `*Assign` trait, on top of a `fn(&BigInt, &BigInt) -> BigInt`.
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident => $core: path);* $(;)?) => {
    $(
    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $core(self, rhs)
        }
    }

    impl $imp<BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $core(&self, &rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $core(&self, rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $core(self, &rhs)
        }
    }

    impl $assign_imp<BigInt> for BigInt {
        fn $assign_method(&mut self, rhs: BigInt) {
            *self = $core(self, &rhs);
        }
    }

    impl $assign_imp<&BigInt> for BigInt {
        fn $assign_method(&mut self, rhs: &BigInt) {
            *self = $core(self, rhs);
        }
    }
    )*
    };
}

mod kernel;
mod arith;
mod bitwise;
mod float;
mod radix;
mod primitive;

pub use primitive::Primitive;

pub const ZERO: BigInt = BigInt { signum: 0, mag: Vec::new() };

/// A sign and a little-endian `u32` magnitude.
///
/// The magnitude never has a most-significant zero limb, and `signum` is `0`
/// exactly when the magnitude is empty, so there is no negative zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

// 实现构造
impl BigInt {
    /// Normalizing constructor: strips most-significant zero limbs and
    /// clears the sign of an empty magnitude.
    pub(crate) fn new(mag: Vec<u32>, signum: i8) -> Self {
        let mag = kernel::trim(mag);
        let signum = if mag.is_empty() { 0 } else { signum.signum() };
        BigInt { signum, mag }
    }

    /// Builds a value from a sign and little-endian limbs.
    pub fn from_limbs(negative: bool, limbs: Vec<u32>) -> Self {
        BigInt::new(limbs, if negative { -1 } else { 1 })
    }

    pub fn zero() -> Self {
        ZERO
    }

    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }

    fn value_of(val: u64, signum: i8) -> BigInt {
        if val == 0 {
            ZERO
        } else if val <= MAX_CONSTANT as u64 {
            if signum >= 0 {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            }
        } else {
            let high = (val >> 32) as u32;
            let mag = if high == 0 {
                vec![val as u32]
            } else {
                vec![val as u32, high]
            };
            BigInt::new(mag, signum)
        }
    }
}

// Digit store
impl BigInt {
    /// `true` for negative values.
    pub fn sign(&self) -> bool {
        self.signum < 0
    }

    /// Number of limbs in the magnitude.
    pub fn size(&self) -> usize {
        self.mag.len()
    }

    /// The `i`-th limb of the magnitude, least significant first.
    ///
    /// # Panics
    /// If `i >= self.size()`.
    pub fn digit(&self, i: usize) -> u32 {
        self.mag[i]
    }

    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        self.signum
    }

    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }

    pub fn bit_length(&self) -> u64 {
        kernel::bit_length(&self.mag)
    }
}

impl From<bool> for BigInt {
    fn from(val: bool) -> Self {
        if val { BigInt::one() } else { ZERO }
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u64, -1)
            } else {
                BigInt::value_of(val as u64, 1)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl From<u128> for BigInt {
    fn from(val: u128) -> Self {
        let mag = (0..4).map(|i| (val >> (32 * i)) as u32).collect();
        BigInt::new(mag, 1)
    }
}

impl From<i128> for BigInt {
    fn from(val: i128) -> Self {
        let abs = BigInt::from(val.unsigned_abs());
        if val < 0 { -abs } else { abs }
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = kernel::cmp_mag(&self.mag, &other.mag);
        if self.signum >= 0 { ord } else { ord.reverse() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from() {
        let big: BigInt = 12_i8.into();
        assert_eq!(big.limbs(), &[12]);
        assert!(!big.sign());

        let big: BigInt = (-100_i16).into();
        assert_eq!(big.limbs(), &[100]);
        assert!(big.sign());

        let big: BigInt = 0x1_0000_0002_u64.into();
        assert_eq!(big.limbs(), &[2, 1]);

        let big: BigInt = i64::MIN.into();
        assert_eq!(big.limbs(), &[0, 0x8000_0000]);
        assert_eq!(big.signum(), -1);

        let big: BigInt = u128::MAX.into();
        assert_eq!(big.size(), 4);
        assert_eq!(big.digit(3), u32::MAX);

        assert_eq!(BigInt::from(true), BigInt::one());
        assert_eq!(BigInt::from(false), BigInt::zero());
    }

    #[test]
    fn test_from_limbs_normalizes() {
        let v = BigInt::from_limbs(true, vec![0, 0, 0]);
        assert_eq!(v, ZERO);
        assert!(!v.sign());
        assert_eq!(v.size(), 0);

        let v = BigInt::from_limbs(false, vec![7, 1, 0, 0]);
        assert_eq!(v.size(), 2);
        assert_eq!(v.digit(0), 7);
        assert_eq!(v.digit(1), 1);
    }

    #[test]
    fn test_cmp() {
        let a = BigInt::from(-5);
        let b = BigInt::from(3);
        let c = BigInt::from(u64::MAX);
        let d = BigInt::from(-(u64::MAX as i128));
        assert!(a < b);
        assert!(b < c);
        assert!(d < a);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert!(ZERO < b && a < ZERO);
    }
}
