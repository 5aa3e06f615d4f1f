//! Conversions between caller-supplied numbers and the exact rational
//! representation every computation runs on.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Pow, Zero};

use crate::error::{Error, Result};

/// Conversion into an exact rational amount.
///
/// Implemented for the primitive integers, [`BigInt`], [`BigDecimal`],
/// [`BigRational`], and strings holding either a decimal number
/// (`"987.65"`) or a fraction (`"123/456"`).
pub trait IntoRational {
    fn into_rational(self) -> Result<BigRational>;
}

impl IntoRational for BigRational {
    fn into_rational(self) -> Result<BigRational> {
        Ok(self)
    }
}

impl IntoRational for &BigRational {
    fn into_rational(self) -> Result<BigRational> {
        Ok(self.clone())
    }
}

impl IntoRational for BigInt {
    fn into_rational(self) -> Result<BigRational> {
        Ok(BigRational::from_integer(self))
    }
}

impl IntoRational for &BigInt {
    fn into_rational(self) -> Result<BigRational> {
        Ok(BigRational::from_integer(self.clone()))
    }
}

impl IntoRational for BigDecimal {
    fn into_rational(self) -> Result<BigRational> {
        Ok(decimal_to_rational(&self))
    }
}

impl IntoRational for &BigDecimal {
    fn into_rational(self) -> Result<BigRational> {
        Ok(decimal_to_rational(self))
    }
}

impl IntoRational for &str {
    fn into_rational(self) -> Result<BigRational> {
        let input = self.trim();
        if let Some(slash) = input.find('/') {
            let numer: BigInt = input[..slash]
                .parse()
                .map_err(|_| Error::Parse(input.to_string()))?;
            let denom: BigInt = input[slash + 1..]
                .parse()
                .map_err(|_| Error::Parse(input.to_string()))?;
            if denom.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(BigRational::new(numer, denom))
        } else {
            let decimal: BigDecimal = input
                .parse()
                .map_err(|_| Error::Parse(input.to_string()))?;
            Ok(decimal_to_rational(&decimal))
        }
    }
}

impl IntoRational for String {
    fn into_rational(self) -> Result<BigRational> {
        self.as_str().into_rational()
    }
}

impl IntoRational for &String {
    fn into_rational(self) -> Result<BigRational> {
        self.as_str().into_rational()
    }
}

macro_rules! into_rational_int {
    ($($ty:ty)*) => {$(
        impl IntoRational for $ty {
            fn into_rational(self) -> Result<BigRational> {
                Ok(BigRational::from_integer(BigInt::from(self)))
            }
        }
    )*}
}

into_rational_int! { i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 }

/// Exact conversion of a fixed-scale decimal into a rational. A decimal is
/// always a terminating fraction, so this cannot fail.
pub(crate) fn decimal_to_rational(decimal: &BigDecimal) -> BigRational {
    let (digits, scale) = decimal.as_bigint_and_exponent();
    if scale >= 0 {
        BigRational::new(digits, BigInt::from(10u8).pow(scale as u32))
    } else {
        BigRational::from_integer(digits * BigInt::from(10u8).pow((-scale) as u32))
    }
}

/// Create a fixed-scale decimal from a string literal.
///
/// This is mostly a wrapper around the underlying number stack that makes
/// it easier to write literal amounts in tests and calling code without
/// spelling out the parse.
#[macro_export]
macro_rules! dec {
    ($val:expr) => {
        $val.parse::<$crate::BigDecimal>().expect("invalid decimal literal")
    };
}

/// Create an exact rational from anything [`IntoRational`](crate::IntoRational)
/// accepts, e.g. `rat!("1/3")` or `rat!("2.50")`.
#[macro_export]
macro_rules! rat {
    ($val:expr) => {
        $crate::IntoRational::into_rational($val).expect("invalid rational literal")
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn decimal_strings() {
        assert_eq!("987.65".into_rational().unwrap(), BigRational::new(BigInt::from(19753), BigInt::from(20)));
        assert_eq!("-0.5".into_rational().unwrap(), BigRational::new(BigInt::from(-1), BigInt::from(2)));
        assert_eq!("42".into_rational().unwrap(), BigRational::from_integer(BigInt::from(42)));
    }

    #[test]
    fn fraction_strings() {
        assert_eq!("1/3".into_rational().unwrap(), BigRational::new(BigInt::from(1), BigInt::from(3)));
        // reduced on construction
        assert_eq!("123/456".into_rational().unwrap(), BigRational::new(BigInt::from(41), BigInt::from(152)));
        assert_eq!("-4/2".into_rational().unwrap(), BigRational::from_integer(BigInt::from(-2)));
    }

    #[test]
    fn bad_strings() {
        assert!(matches!("".into_rational(), Err(Error::Parse(_))));
        assert!(matches!("12.34.56".into_rational(), Err(Error::Parse(_))));
        assert!(matches!("a/b".into_rational(), Err(Error::Parse(_))));
        assert_eq!("1/0".into_rational(), Err(Error::DivisionByZero));
    }

    #[test]
    fn decimals_convert_exactly() {
        let decimal = dec!("1.50");
        assert_eq!(decimal_to_rational(&decimal), BigRational::new(BigInt::from(3), BigInt::from(2)));
        let decimal = dec!("0.00");
        assert_eq!(decimal_to_rational(&decimal), BigRational::zero());
    }

    #[test]
    fn integers_convert() {
        assert_eq!(7u8.into_rational().unwrap(), BigRational::from_integer(BigInt::from(7)));
        assert_eq!((-7i64).into_rational().unwrap(), BigRational::from_integer(BigInt::from(-7)));
    }
}
