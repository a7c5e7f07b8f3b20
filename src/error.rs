use thiserror::Error;

/// Errors raised by [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BigIntError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Exponent must be non-negative")]
    NegativeExponent,

    #[error("Radix {0} out of range [2, 36]")]
    InvalidRadix(u32),

    #[error("Invalid integer syntax: '{input}'")]
    InvalidIntegerSyntax { input: String },

    #[error("Number {0} cannot be converted to BigInt because it is not a safe integer")]
    RangeConversion(f64),

    #[error("Cannot convert {0} to a BigInt")]
    UnsupportedConversionType(&'static str),

    #[error("Maximum BigInt size exceeded")]
    TooLarge,
}

impl BigIntError {
    pub(crate) fn syntax(input: &str) -> Self {
        BigIntError::InvalidIntegerSyntax { input: input.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, BigIntError>;
