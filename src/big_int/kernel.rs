//! Unsigned arithmetic on magnitudes.
//!
//! A magnitude is a little-endian `u32` limb slice. Every function here
//! returns a trimmed vector: no most-significant zero limbs, and zero is the
//! empty vector.

use std::cmp::Ordering;

const BASE: u64 = 1 << 32;

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (32 - $n.leading_zeros()) as u64
    };
}

/// Drops most-significant zero limbs.
pub(crate) fn trim(mut mag: Vec<u32>) -> Vec<u32> {
    while mag.last() == Some(&0) {
        mag.pop();
    }
    mag
}

pub(crate) fn bit_length(mag: &[u32]) -> u64 {
    match mag.last() {
        None => 0,
        Some(top) => ((mag.len() as u64 - 1) << 5) + bit_length_u32!(top),
    }
}

/// Reads up to the low 64 bits of a magnitude.
pub(crate) fn low_u64(mag: &[u32]) -> u64 {
    let low = mag.first().copied().unwrap_or(0) as u64;
    let high = mag.get(1).copied().unwrap_or(0) as u64;
    (high << 32) | low
}

/// Returns the magnitude as a `u64` if it fits.
pub(crate) fn to_u64(mag: &[u32]) -> Option<u64> {
    if mag.len() > 2 {
        None
    } else {
        Some(low_u64(mag))
    }
}

/// Compares two trimmed magnitudes.
pub(crate) fn cmp_mag(x: &[u32], y: &[u32]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        if a != b {
            return a.cmp(b);
        }
    }
    Ordering::Equal
}

pub(crate) fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry: u64 = 0;
    for (i, &l) in long.iter().enumerate() {
        let s = short.get(i).copied().unwrap_or(0);
        let sum = l as u64 + s as u64 + carry;
        result.push(sum as u32);
        carry = sum >> u32::BITS;
    }
    if carry != 0 {
        result.push(carry as u32);
    }

    trim(result)
}

/// `big - little`, requires `big >= little`.
pub(crate) fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
    debug_assert!(cmp_mag(&trim(big.to_vec()), &trim(little.to_vec())) != Ordering::Less);

    let mut result = Vec::with_capacity(big.len());
    let mut borrow: i64 = 0;
    for (i, &b) in big.iter().enumerate() {
        let l = little.get(i).copied().unwrap_or(0);
        let difference = b as i64 - l as i64 + borrow;
        result.push(difference as u32);
        borrow = difference >> u32::BITS;
    }
    debug_assert_eq!(borrow, 0);

    trim(result)
}

/// Grade-school multiplication with 64-bit accumulators.
pub(crate) fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    if y.len() == 1 {
        return mul_mag_small(x, y[0]);
    }
    if x.len() == 1 {
        return mul_mag_small(y, x[0]);
    }

    let mut z = vec![0u32; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &yj) in y.iter().enumerate() {
            let product = xi as u64 * yj as u64 + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> u32::BITS;
        }
        z[i + y.len()] = carry as u32;
    }

    trim(z)
}

pub(crate) fn mul_mag_small(x: &[u32], y: u32) -> Vec<u32> {
    let mut result = x.to_vec();
    mul_add_small(&mut result, y, 0);
    trim(result)
}

/// `mag = mag * mul + add`, in place.
pub(crate) fn mul_add_small(mag: &mut Vec<u32>, mul: u32, add: u32) {
    let mut carry = add as u64;
    for x in mag.iter_mut() {
        let product = (*x as u64) * (mul as u64) + carry;
        *x = product as u32;
        carry = product >> u32::BITS;
    }
    if carry != 0 {
        mag.push(carry as u32);
    }
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
pub(crate) fn div_rem_small(x: &[u32], y: u32) -> (Vec<u32>, u32) {
    debug_assert!(y != 0);
    let divisor = y as u64;

    let mut q = vec![0u32; x.len()];
    let mut r: u64 = 0;
    for j in (0..x.len()).rev() {
        let sum = (r << 32) | x[j] as u64;
        q[j] = (sum / divisor) as u32;
        r = sum % divisor;
    }

    (trim(q), r as u32)
}

/// Shifts `x` left by `shift < 32` bits into a vector of `x.len() + extra` limbs.
fn shift_left_bits(x: &[u32], shift: u32, extra: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(x.len() + extra);
    if shift == 0 {
        out.extend_from_slice(x);
    } else {
        let mut carry = 0u32;
        for &d in x {
            out.push((d << shift) | carry);
            carry = d >> (32 - shift);
        }
        if extra > 0 {
            out.push(carry);
        } else {
            debug_assert_eq!(carry, 0);
        }
    }
    out.resize(x.len() + extra, 0);
    out
}

/// Divides `u` by a non-zero `v`, returning `(quotient, remainder)`.
///
/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1
/// on full 32-bit limbs.
pub(crate) fn div_rem_mag(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!v.is_empty(), "division by an empty magnitude");

    if cmp_mag(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = div_rem_small(u, v[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    let n = v.len();
    let m = u.len() - n;

    // D1 normalize
    // shift v until the top bit of its leading limb is set, so that
    // v[n-1] >= b / 2 with b = 2^32. u gets one guard limb.
    let s = v[n - 1].leading_zeros();
    let vn = shift_left_bits(v, s, 0);
    let mut un = shift_left_bits(u, s, 1);
    log::trace!("divide: normalized by {} bits, m = {}, n = {}", s, m, n);

    let v1 = vn[n - 1] as u64;
    let v2 = vn[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    // D2 loop on j
    for j in (0..=m).rev() {
        // D3 calculate qhat
        let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
        let mut qhat = num / v1;
        let mut rhat = num % v1;
        loop {
            if qhat >= BASE || qhat * v2 > ((rhat << 32) | un[j + n - 2] as u64) {
                qhat -= 1;
                rhat += v1;
                if rhat < BASE {
                    continue;
                }
            }
            break;
        }

        // D4 multiply and subtract
        let mut borrow: i64 = 0;
        let mut carry: u64 = 0;
        for i in 0..n {
            let product = qhat * vn[i] as u64 + carry;
            carry = product >> u32::BITS;
            let t = un[i + j] as i64 - (product & 0xffff_ffff) as i64 + borrow;
            un[i + j] = t as u32;
            borrow = t >> u32::BITS;
        }
        let t = un[j + n] as i64 - carry as i64 + borrow;
        un[j + n] = t as u32;

        // D5 test remainder
        q[j] = qhat as u32;
        if t < 0 {
            // D6 add back
            log::trace!("divide: add back at digit {}", j);
            q[j] = q[j].wrapping_sub(1);
            let mut carry: u64 = 0;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> u32::BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
        log::trace!("divide: q[{}] = {:#x}", j, q[j]);
    }

    // D8 unnormalize
    let r = if s == 0 {
        un[..n].to_vec()
    } else {
        (0..n)
            .map(|i| (un[i] >> s) | (un[i + 1] << (32 - s)))
            .collect()
    };

    (trim(q), trim(r))
}

pub(crate) fn shl_mag(x: &[u32], n: usize) -> Vec<u32> {
    if x.is_empty() {
        return Vec::new();
    }
    let n_ints = n >> 5;
    let n_bits = (n & 0x1f) as u32;

    let mut result = vec![0u32; n_ints];
    result.extend(shift_left_bits(x, n_bits, 1));
    trim(result)
}

/// Shifts right by `n` bits. The flag reports whether any one bit was
/// shifted out.
pub(crate) fn shr_mag(x: &[u32], n: usize) -> (Vec<u32>, bool) {
    let n_ints = n >> 5;
    let n_bits = (n & 0x1f) as u32;

    if n_ints >= x.len() {
        return (Vec::new(), !x.is_empty());
    }

    let mut one_lost = x[..n_ints].iter().any(|&d| d != 0);
    let src = &x[n_ints..];
    let result = if n_bits == 0 {
        src.to_vec()
    } else {
        one_lost |= (src[0] << (32 - n_bits)) != 0;
        (0..src.len())
            .map(|i| {
                let high = src.get(i + 1).map_or(0, |&d| d << (32 - n_bits));
                (src[i] >> n_bits) | high
            })
            .collect()
    };

    (trim(result), one_lost)
}
