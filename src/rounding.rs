//! Collapsing exact rational amounts into fixed-scale decimals.
//!
//! This is the single place in the library where precision can be lost,
//! and only ever with the caller's consent: the default mode everywhere is
//! [`RoundingMode::Unnecessary`], which fails instead of rounding.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, Zero};

use crate::error::{Error, Result};

/// How to resolve a value that is not exactly representable at the target
/// scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Assert that no rounding is required; fail with
    /// [`Error::RoundingNecessary`](crate::Error::RoundingNecessary)
    /// otherwise.
    Unnecessary,
    /// Round away from zero.
    Up,
    /// Round towards zero.
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to the nearest neighbor, ties away from zero.
    HalfUp,
    /// Round to the nearest neighbor, ties towards zero.
    HalfDown,
    /// Round to the nearest neighbor, ties to the even neighbor.
    HalfEven,
}

pub(crate) fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Round an exact rational to a decimal with exactly `scale` fraction
/// digits.
pub(crate) fn to_scale(amount: &BigRational, scale: i64, mode: RoundingMode) -> Result<BigDecimal> {
    if scale < 0 {
        return Err(Error::InvalidArgument(format!("negative scale {}", scale)));
    }
    // shift the numerator so the quotient is the unscaled result; the
    // denominator of a BigRational is always positive
    let numer = amount.numer() * pow10(scale as u32);
    let denom = amount.denom();
    let (quot, rem) = numer.div_rem(denom);
    if rem.is_zero() {
        return Ok(BigDecimal::new(quot, scale));
    }
    let negative = numer.is_negative();
    let increment = match mode {
        RoundingMode::Unnecessary => return Err(Error::RoundingNecessary),
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            match (rem.abs() * 2u8).cmp(denom) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => true,
                    RoundingMode::HalfDown => false,
                    _ => quot.is_odd(),
                },
            }
        }
    };
    let quot = if !increment {
        quot
    } else if negative {
        quot - 1u8
    } else {
        quot + 1u8
    };
    Ok(BigDecimal::new(quot, scale))
}

/// Check that a rounding step is usable in decimal arithmetic: at least 1
/// and composed only of factors 2 and 5, so stepped amounts stay
/// representable at their scale.
pub(crate) fn validate_step(step: u32) -> Result<()> {
    if step == 0 {
        return Err(Error::InvalidArgument("step must be at least 1".into()));
    }
    let mut rest = step;
    while rest % 2 == 0 {
        rest /= 2;
    }
    while rest % 5 == 0 {
        rest /= 5;
    }
    if rest != 1 {
        return Err(Error::InvalidArgument(format!(
            "step {} is not a product of factors 2 and 5",
            step
        )));
    }
    Ok(())
}

/// The step/scale collapse shared by every context and by money
/// arithmetic: divide by the step, round at the scale, multiply back.
/// Realizes "round to the nearest multiple of `step` at `scale`"; a step
/// of 1 is a plain scale rounding.
pub(crate) fn to_scale_with_step(
    amount: &BigRational,
    scale: i64,
    step: u32,
    mode: RoundingMode,
) -> Result<BigDecimal> {
    if step == 1 {
        return to_scale(amount, scale, mode);
    }
    validate_step(step)?;
    let step_int = BigInt::from(step);
    let stepped = amount / BigRational::from_integer(step_int.clone());
    let rounded = to_scale(&stepped, scale, mode)?;
    // scale is preserved: the step carries no fraction digits
    Ok(rounded * BigDecimal::from(step_int))
}

/// The minimal scale at which `amount` has an exact decimal
/// representation, or `None` when the reduced denominator has a prime
/// factor other than 2 or 5 (a non-terminating fraction).
pub(crate) fn exact_scale(amount: &BigRational) -> Option<i64> {
    let mut denom = amount.denom().clone();
    let two = BigInt::from(2u8);
    let five = BigInt::from(5u8);
    let mut twos = 0i64;
    let mut fives = 0i64;
    while (&denom % &two).is_zero() {
        denom /= &two;
        twos += 1;
    }
    while (&denom % &five).is_zero() {
        denom /= &five;
        fives += 1;
    }
    if denom.is_one() {
        Some(twos.max(fives))
    } else {
        None
    }
}

/// Convert to a decimal at the minimal exact scale, failing with
/// `RoundingNecessary` for non-terminating fractions.
pub(crate) fn to_exact_decimal(amount: &BigRational) -> Result<BigDecimal> {
    match exact_scale(amount) {
        Some(scale) => to_scale(amount, scale, RoundingMode::Unnecessary),
        None => Err(Error::RoundingNecessary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dec, rat};

    #[test]
    fn exact_values_need_no_rounding() {
        let rounded = to_scale(&rat!("3.37"), 2, RoundingMode::Unnecessary).unwrap();
        assert_eq!(rounded, dec!("3.37"));
        assert_eq!(rounded.fractional_digit_count(), 2);
        // scale can grow without rounding
        let rounded = to_scale(&rat!("3.37"), 4, RoundingMode::Unnecessary).unwrap();
        assert_eq!(rounded.fractional_digit_count(), 4);
    }

    #[test]
    fn unnecessary_fails_on_precision_loss() {
        assert_eq!(to_scale(&rat!("3.37"), 1, RoundingMode::Unnecessary), Err(Error::RoundingNecessary));
        assert_eq!(to_scale(&rat!("1/3"), 10, RoundingMode::Unnecessary), Err(Error::RoundingNecessary));
    }

    #[test]
    fn directed_modes() {
        let value = rat!("3.37");
        assert_eq!(to_scale(&value, 1, RoundingMode::Down).unwrap(), dec!("3.3"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Up).unwrap(), dec!("3.4"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Ceiling).unwrap(), dec!("3.4"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Floor).unwrap(), dec!("3.3"));

        let value = rat!("-3.37");
        assert_eq!(to_scale(&value, 1, RoundingMode::Down).unwrap(), dec!("-3.3"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Up).unwrap(), dec!("-3.4"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Ceiling).unwrap(), dec!("-3.3"));
        assert_eq!(to_scale(&value, 1, RoundingMode::Floor).unwrap(), dec!("-3.4"));
    }

    #[test]
    fn half_modes() {
        assert_eq!(to_scale(&rat!("2.5"), 0, RoundingMode::HalfUp).unwrap(), dec!("3"));
        assert_eq!(to_scale(&rat!("2.5"), 0, RoundingMode::HalfDown).unwrap(), dec!("2"));
        assert_eq!(to_scale(&rat!("2.5"), 0, RoundingMode::HalfEven).unwrap(), dec!("2"));
        assert_eq!(to_scale(&rat!("3.5"), 0, RoundingMode::HalfEven).unwrap(), dec!("4"));
        assert_eq!(to_scale(&rat!("-2.5"), 0, RoundingMode::HalfUp).unwrap(), dec!("-3"));
        assert_eq!(to_scale(&rat!("-2.5"), 0, RoundingMode::HalfEven).unwrap(), dec!("-2"));
        // not a tie
        assert_eq!(to_scale(&rat!("2.51"), 0, RoundingMode::HalfDown).unwrap(), dec!("3"));
        assert_eq!(to_scale(&rat!("2.49"), 0, RoundingMode::HalfUp).unwrap(), dec!("2"));
    }

    #[test]
    fn repeating_fractions_round() {
        assert_eq!(to_scale(&rat!("1/3"), 2, RoundingMode::HalfUp).unwrap(), dec!("0.33"));
        assert_eq!(to_scale(&rat!("2/3"), 2, RoundingMode::HalfUp).unwrap(), dec!("0.67"));
        assert_eq!(to_scale(&rat!("-1/3"), 2, RoundingMode::Floor).unwrap(), dec!("-0.34"));
    }

    #[test]
    fn step_rounding() {
        // round to the nearest 5 minor units at scale 2
        assert_eq!(to_scale_with_step(&rat!("3.37"), 2, 5, RoundingMode::Down).unwrap(), dec!("3.35"));
        assert_eq!(to_scale_with_step(&rat!("3.37"), 2, 5, RoundingMode::Up).unwrap(), dec!("3.40"));
        let stepped = to_scale_with_step(&rat!("3.37"), 2, 5, RoundingMode::Up).unwrap();
        assert_eq!(stepped.fractional_digit_count(), 2);
        // an exact multiple passes under Unnecessary
        assert_eq!(to_scale_with_step(&rat!("3.35"), 2, 5, RoundingMode::Unnecessary).unwrap(), dec!("3.35"));
        assert_eq!(to_scale_with_step(&rat!("3.37"), 2, 5, RoundingMode::Unnecessary), Err(Error::RoundingNecessary));
    }

    #[test]
    fn step_is_validated() {
        assert!(validate_step(1).is_ok());
        assert!(validate_step(2).is_ok());
        assert!(validate_step(5).is_ok());
        assert!(validate_step(10).is_ok());
        assert!(validate_step(50).is_ok());
        assert!(matches!(validate_step(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_step(3), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_step(15), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn minimal_exact_scale() {
        assert_eq!(exact_scale(&rat!("987.65")), Some(2));
        assert_eq!(exact_scale(&rat!("1.50")), Some(1));
        assert_eq!(exact_scale(&rat!("42")), Some(0));
        assert_eq!(exact_scale(&rat!("1/8")), Some(3));
        assert_eq!(exact_scale(&rat!("1/40")), Some(3));
        assert_eq!(exact_scale(&rat!("1/3")), None);
        assert_eq!(exact_scale(&rat!("123/456")), None);
    }

    #[test]
    fn exact_decimal_conversion() {
        assert_eq!(to_exact_decimal(&rat!("987.65")).unwrap(), dec!("987.65"));
        assert_eq!(to_exact_decimal(&rat!("1/8")).unwrap(), dec!("0.125"));
        assert_eq!(to_exact_decimal(&rat!("1/3")), Err(Error::RoundingNecessary));
    }

    #[test]
    fn negative_scale_is_rejected() {
        assert!(matches!(to_scale(&rat!("1"), -1, RoundingMode::Down), Err(Error::InvalidArgument(_))));
    }
}
