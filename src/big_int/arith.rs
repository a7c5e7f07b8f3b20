use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};

use crate::big_num_cache::*;
use crate::big_num_constants::MAX_BITS;
use crate::error::{BigIntError, Result};

use super::{kernel, BigInt, ZERO};

// 实现加减乘
impl BigInt {
    fn add_signed(x: &BigInt, y: &BigInt) -> BigInt {
        if y.signum == 0 {
            return x.clone();
        }
        if x.signum == 0 {
            return y.clone();
        }

        if x.signum == y.signum {
            return BigInt::new(kernel::add_mag(&x.mag, &y.mag), x.signum);
        }

        match kernel::cmp_mag(&x.mag, &y.mag) {
            Ordering::Less => BigInt::new(kernel::sub_mag(&y.mag, &x.mag), y.signum),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInt::new(kernel::sub_mag(&x.mag, &y.mag), x.signum),
        }
    }

    fn sub_signed(x: &BigInt, y: &BigInt) -> BigInt {
        if y.signum == 0 {
            return x.clone();
        }
        if x.signum == 0 {
            return -y;
        }

        if x.signum != y.signum {
            return BigInt::new(kernel::add_mag(&x.mag, &y.mag), x.signum);
        }

        match kernel::cmp_mag(&x.mag, &y.mag) {
            Ordering::Less => BigInt::new(kernel::sub_mag(&y.mag, &x.mag), -x.signum),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInt::new(kernel::sub_mag(&x.mag, &y.mag), x.signum),
        }
    }

    fn mul_signed(x: &BigInt, y: &BigInt) -> BigInt {
        if x.signum == 0 || y.signum == 0 {
            return ZERO;
        }
        BigInt::new(kernel::mul_mag(&x.mag, &y.mag), x.signum * y.signum)
    }

    fn div_signed(x: &BigInt, y: &BigInt) -> BigInt {
        match x.checked_div(y) {
            Ok(q) => q,
            Err(_) => panic!("Divide by 0"),
        }
    }

    fn rem_signed(x: &BigInt, y: &BigInt) -> BigInt {
        match x.checked_rem(y) {
            Ok(r) => r,
            Err(_) => panic!("Mod by zero."),
        }
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division and remainder.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `q * rhs + r == self`.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.signum == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        if self.signum == 0 {
            return Ok((ZERO, ZERO));
        }

        let (q, r) = kernel::div_rem_mag(&self.mag, &rhs.mag);
        Ok((
            BigInt::new(q, self.signum * rhs.signum),
            BigInt::new(r, self.signum),
        ))
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

// 实现乘方
impl BigInt {
    /// Raises `self` to a non-negative `exponent`.
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt> {
        if exponent.signum < 0 {
            return Err(BigIntError::NegativeExponent);
        }
        if exponent.signum == 0 {
            return Ok(BigInt::one());
        }
        if self.signum == 0 {
            return Ok(ZERO);
        }
        if self.mag == [1] {
            let odd = exponent.mag[0] & 1 == 1;
            return Ok(if self.signum < 0 && odd { self.clone() } else { BigInt::one() });
        }

        // |self| >= 2, so the result has more than (bit_length - 1) * exp bits.
        let exp = match kernel::to_u64(&exponent.mag) {
            Some(e) if e <= u32::MAX as u64 => e as u32,
            _ => {
                log::debug!("pow: exponent {} rejected", exponent);
                return Err(BigIntError::TooLarge);
            }
        };
        if (self.bit_length() - 1).saturating_mul(exp as u64) > MAX_BITS {
            log::debug!("pow: result of {} bits rejected", (self.bit_length() - 1) * exp as u64);
            return Err(BigIntError::TooLarge);
        }

        Ok(self.pow_u32(exp))
    }

    /// Binary exponentiation.
    pub fn pow_u32(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut acc = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { signum: self.signum.abs(), mag: self.mag.clone() }
    }

    pub(crate) fn plus_one(&self) -> BigInt {
        BigInt::add_signed(self, &POS_CACHE[1])
    }

    pub(crate) fn minus_one(&self) -> BigInt {
        BigInt::add_signed(self, &NEG_CACHE[1])
    }
}

forward_binop! {
    Add, add, AddAssign, add_assign => BigInt::add_signed;
    Sub, sub, SubAssign, sub_assign => BigInt::sub_signed;
    Mul, mul, MulAssign, mul_assign => BigInt::mul_signed;
    Div, div, DivAssign, div_assign => BigInt::div_signed;
    Rem, rem, RemAssign, rem_assign => BigInt::rem_signed;
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, mag } = self;
        BigInt { signum: -signum, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl std::iter::Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| acc + x)
    }
}

impl std::iter::Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}
