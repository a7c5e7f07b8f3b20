//! Bitwise operations and shifts.
//!
//! Operands are viewed in two's complement: a non-negative value keeps its
//! magnitude, a negative value `-m` becomes `!(m - 1)`. Limbs past the end
//! read as `0` or `u32::MAX` depending on the sign.

use std::ops::{
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Not,
    Shl, ShlAssign,
    Shr, ShrAssign,
};

use crate::big_num_constants::MAX_BITS;
use crate::error::{BigIntError, Result};

use super::{kernel, BigInt, ZERO};

/// Sign-extended limb of a two's-complement view.
pub(crate) fn tc_digit(limbs: &[u32], negative: bool, i: usize) -> u32 {
    match limbs.get(i) {
        Some(&d) => d,
        None if negative => u32::MAX,
        None => 0,
    }
}

impl BigInt {
    /// Two's-complement limbs. Limbs above the returned ones are implied by
    /// the sign.
    pub(crate) fn twos_complement(&self) -> Vec<u32> {
        if self.signum >= 0 {
            self.mag.clone()
        } else {
            kernel::sub_mag(&self.mag, &[1]).iter().map(|d| !d).collect()
        }
    }

    pub(crate) fn from_twos_complement(negative: bool, limbs: Vec<u32>) -> BigInt {
        if negative {
            let complement: Vec<u32> = limbs.iter().map(|d| !d).collect();
            BigInt::new(kernel::add_mag(&kernel::trim(complement), &[1]), -1)
        } else {
            BigInt::new(limbs, 1)
        }
    }

    fn bitwise<F>(x: &BigInt, y: &BigInt, f: F) -> BigInt
    where
        F: Fn(u32, u32) -> u32,
    {
        let a = x.twos_complement();
        let b = y.twos_complement();
        let (x_neg, y_neg) = (x.signum < 0, y.signum < 0);

        let len = a.len().max(b.len());
        let limbs = (0..len)
            .map(|i| f(tc_digit(&a, x_neg, i), tc_digit(&b, y_neg, i)))
            .collect();
        let negative = f(tc_digit(&[], x_neg, 0), tc_digit(&[], y_neg, 0)) != 0;

        BigInt::from_twos_complement(negative, limbs)
    }

    pub fn bit_and(&self, other: &BigInt) -> BigInt {
        BigInt::bitwise(self, other, |a, b| a & b)
    }

    pub fn bit_or(&self, other: &BigInt) -> BigInt {
        BigInt::bitwise(self, other, |a, b| a | b)
    }

    pub fn bit_xor(&self, other: &BigInt) -> BigInt {
        BigInt::bitwise(self, other, |a, b| a ^ b)
    }

    /// `!x == -x - 1`
    pub fn bit_not(&self) -> BigInt {
        (-self).minus_one()
    }

    /// Whether bit `n` of the two's-complement form is set.
    pub fn test_bit(&self, n: u64) -> bool {
        let limb = (n >> 5) as usize;
        let tc = self.twos_complement();
        tc_digit(&tc, self.signum < 0, limb) & (1 << (n & 0x1f)) != 0
    }
}

// 实现移位
impl BigInt {
    /// `self * 2^n`. A negative `n` shifts right instead.
    pub fn shift_left(&self, n: &BigInt) -> Result<BigInt> {
        if n.signum < 0 {
            Ok(self.shr_mag_count(&n.mag))
        } else {
            self.shl_mag_count(&n.mag)
        }
    }

    /// `floor(self / 2^n)`. A negative `n` shifts left instead.
    pub fn shift_right(&self, n: &BigInt) -> Result<BigInt> {
        if n.signum < 0 {
            self.shl_mag_count(&n.mag)
        } else {
            Ok(self.shr_mag_count(&n.mag))
        }
    }

    fn shl_mag_count(&self, count: &[u32]) -> Result<BigInt> {
        if self.signum == 0 {
            return Ok(ZERO);
        }
        match kernel::to_u64(count) {
            Some(n) if self.bit_length().saturating_add(n) <= MAX_BITS => Ok(self.shl_bits(n as usize)),
            _ => {
                log::debug!("shift left of a {}-bit value rejected", self.bit_length());
                Err(BigIntError::TooLarge)
            }
        }
    }

    fn shr_mag_count(&self, count: &[u32]) -> BigInt {
        match kernel::to_u64(count) {
            Some(n) if n < self.bit_length() => self.shr_bits(n as usize),
            _ => {
                if self.signum < 0 {
                    -BigInt::one()
                } else {
                    ZERO
                }
            }
        }
    }

    fn shl_bits(&self, n: usize) -> BigInt {
        if self.signum == 0 || n == 0 {
            return self.clone();
        }
        BigInt::new(kernel::shl_mag(&self.mag, n), self.signum)
    }

    /// Floor shift: for negative values the truncated magnitude is bumped
    /// when a one bit falls off, so `-1 >> n == -1`.
    fn shr_bits(&self, n: usize) -> BigInt {
        if self.signum == 0 || n == 0 {
            return self.clone();
        }
        let (mag, one_lost) = kernel::shr_mag(&self.mag, n);
        let shifted = BigInt::new(mag, self.signum);
        if self.signum < 0 && one_lost {
            if shifted.is_zero() {
                return -BigInt::one();
            }
            shifted.minus_one()
        } else {
            shifted
        }
    }
}

forward_binop! {
    BitAnd, bitand, BitAndAssign, bitand_assign => BigInt::bit_and;
    BitOr, bitor, BitOrAssign, bitor_assign => BigInt::bit_or;
    BitXor, bitxor, BitXorAssign, bitxor_assign => BigInt::bit_xor;
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_bits(n as usize)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_bits(n as usize)
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = self.shl_bits(n as usize);
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_bits(n as usize)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_bits(n as usize)
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        *self = self.shr_bits(n as usize);
    }
}
