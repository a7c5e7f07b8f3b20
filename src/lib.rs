//! JS BigInt \
//! This crate provides [`BigInt`]: immutable arbitrary-precision integers with the operation set a
//! script runtime needs for its integer value type.
//! - arithmetic: `+ - * / %` and [`BigInt::pow`], truncating division
//! - bitwise operations and shifts that behave as if values were stored in two's complement
//! - radix parsing and printing, `parseInt`-style parsing
//! - exact comparison against `f64` and lossy conversion to and from it
//! - `asIntN` / `asUintN` and 64-bit interop

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::{BigInt, Primitive};
pub use big_num_constants::{MAX_RADIX, MAX_SAFE_INTEGER, MIN_RADIX};
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn it_works() {
        let a = big("10000000000000");
        let b = big("900000000000");
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }

    #[test]
    fn scenarios() {
        let literal = "123456789012345678901234567890";
        assert_eq!(big(literal).to_string_radix(10).unwrap(), literal);

        assert_eq!(BigInt::from_f64(9007199254740991.0).unwrap(), big("9007199254740991"));
        assert_eq!(BigInt::from_f64(1.5), Err(BigIntError::RangeConversion(1.5)));

        assert_eq!(big("7") / big("2"), big("3"));
        assert_eq!(big("7") % big("2"), big("1"));
        assert_eq!(big("-7") / big("2"), big("-3"));
        assert_eq!(big("-7") % big("2"), big("-1"));

        assert_eq!(big("12").bit_and(&big("10")), big("8"));

        assert_eq!(BigInt::as_int_n(8, &big("200")).unwrap(), big("-56"));

        assert_eq!(big("2").pow(&big("10")).unwrap(), big("1024"));
        assert_eq!(big("2").pow(&big("-1")), Err(BigIntError::NegativeExponent));
    }

    #[test]
    fn values_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInt>();

        let v = std::sync::Arc::new(big("-123456789012345678901234567890"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = v.clone();
                std::thread::spawn(move || (&*v * &BigInt::from(i)).to_string())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), (&*v * &BigInt::from(i)).to_string());
        }
    }
}
