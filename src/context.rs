//! Rounding contexts: the policies that collapse an exact rational amount
//! into a representable decimal amount at a given currency.
//!
//! A context owns two decisions: the target scale and the rounding step.
//! Arithmetic on [`Money`](crate::Money) and the materialization of
//! [`RationalMoney`](crate::RationalMoney) both go through
//! [`Context::apply_to`]; nothing else in the library decides a scale.

use bigdecimal::BigDecimal;
use num_rational::BigRational;

use crate::currency::Currency;
use crate::error::{Error, Result};
use crate::rounding::{self, RoundingMode};

/// A rounding policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// Scale is the currency's default fraction digits, step 1.
    Default,
    /// Minimal scale for an exact representation; never rounds.
    Exact,
    /// Like [`Context::Exact`]: the minimal-scale representation carries no
    /// trailing fraction zeros by construction.
    Auto,
    /// Currency default scale with a cash rounding step, e.g. step 5 at
    /// scale 2 rounds to the nearest 0.05.
    Cash { step: u32 },
    /// Caller-supplied scale and step.
    Custom { scale: u32, step: u32 },
}

impl Context {
    /// A cash context, validating the step eagerly.
    pub fn cash(step: u32) -> Result<Context> {
        rounding::validate_step(step)?;
        Ok(Context::Cash { step })
    }

    /// A custom context with an explicit scale and step, validating the
    /// step eagerly.
    pub fn custom(scale: u32, step: u32) -> Result<Context> {
        rounding::validate_step(step)?;
        Ok(Context::Custom { scale, step })
    }

    /// A custom context with an explicit scale and step 1.
    pub fn with_scale(scale: u32) -> Context {
        Context::Custom { scale, step: 1 }
    }

    /// The step that amounts produced by this context carry.
    pub fn step(&self) -> u32 {
        match self {
            Context::Cash { step } | Context::Custom { step, .. } => *step,
            Context::Default | Context::Exact | Context::Auto => 1,
        }
    }

    /// Collapse an exact rational amount to a decimal under this policy.
    ///
    /// `Exact` and `Auto` reject any mode other than
    /// [`RoundingMode::Unnecessary`] with an argument error: they are
    /// defined to never lose precision.
    pub fn apply_to(
        &self,
        amount: &BigRational,
        currency: &Currency,
        mode: RoundingMode,
    ) -> Result<BigDecimal> {
        match self {
            Context::Default => {
                rounding::to_scale_with_step(amount, i64::from(currency.default_fraction_digits()), 1, mode)
            }
            Context::Cash { step } => {
                rounding::to_scale_with_step(amount, i64::from(currency.default_fraction_digits()), *step, mode)
            }
            Context::Custom { scale, step } => {
                rounding::to_scale_with_step(amount, i64::from(*scale), *step, mode)
            }
            Context::Exact | Context::Auto => {
                if mode != RoundingMode::Unnecessary {
                    return Err(Error::InvalidArgument(
                        "exact contexts only accept RoundingMode::Unnecessary".into(),
                    ));
                }
                rounding::to_exact_decimal(amount)
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{jpy, usd};
    use crate::{dec, rat};

    #[test]
    fn default_context_uses_currency_scale() {
        let applied = Context::Default.apply_to(&rat!("12.34"), &usd(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(applied, dec!("12.34"));
        assert_eq!(applied.fractional_digit_count(), 2);

        let applied = Context::Default.apply_to(&rat!("12"), &jpy(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(applied.fractional_digit_count(), 0);

        assert_eq!(
            Context::Default.apply_to(&rat!("12.345"), &usd(), RoundingMode::Unnecessary),
            Err(Error::RoundingNecessary)
        );
        assert_eq!(
            Context::Default.apply_to(&rat!("12.345"), &usd(), RoundingMode::HalfUp).unwrap(),
            dec!("12.35")
        );
    }

    #[test]
    fn cash_context_steps() {
        let cash = Context::cash(5).unwrap();
        assert_eq!(cash.step(), 5);
        assert_eq!(cash.apply_to(&rat!("3.37"), &usd(), RoundingMode::Down).unwrap(), dec!("3.35"));
        assert_eq!(cash.apply_to(&rat!("3.37"), &usd(), RoundingMode::Up).unwrap(), dec!("3.40"));
        assert_eq!(Context::cash(3), Err(Error::InvalidArgument("step 3 is not a product of factors 2 and 5".into())));
    }

    #[test]
    fn custom_context() {
        let context = Context::custom(4, 1).unwrap();
        let applied = context.apply_to(&rat!("1.5"), &usd(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(applied.fractional_digit_count(), 4);
        assert_eq!(applied, dec!("1.5000"));

        let context = Context::with_scale(0);
        assert_eq!(context.apply_to(&rat!("7/2"), &usd(), RoundingMode::HalfEven).unwrap(), dec!("4"));
    }

    #[test]
    fn exact_context_never_rounds() {
        let exact = Context::Exact.apply_to(&rat!("987.65"), &usd(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(exact, dec!("987.65"));
        assert_eq!(exact.fractional_digit_count(), 2);

        assert_eq!(
            Context::Exact.apply_to(&rat!("123/456"), &usd(), RoundingMode::Unnecessary),
            Err(Error::RoundingNecessary)
        );
        assert!(matches!(
            Context::Exact.apply_to(&rat!("1.5"), &usd(), RoundingMode::HalfUp),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Context::Auto.apply_to(&rat!("1.5"), &usd(), RoundingMode::Down),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn auto_context_strips_to_minimal_scale() {
        let applied = Context::Auto.apply_to(&rat!("1.500"), &usd(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(applied.fractional_digit_count(), 1);
        assert_eq!(applied, dec!("1.5"));

        let applied = Context::Auto.apply_to(&rat!("10"), &usd(), RoundingMode::Unnecessary).unwrap();
        assert_eq!(applied.fractional_digit_count(), 0);
    }

    #[test]
    fn step_survives_into_money() {
        assert_eq!(Context::Default.step(), 1);
        assert_eq!(Context::Exact.step(), 1);
        assert_eq!(Context::custom(2, 25).unwrap().step(), 25);
    }
}
