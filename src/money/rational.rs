//! Exact, unrounded monetary values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use getset::Getters;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::context::Context;
use crate::currency::{Currency, IntoCurrency};
use crate::error::{Error, Result};
use crate::money::{Money, MoneyOperand};
use crate::rounding::{self, RoundingMode};
use crate::util::number::IntoRational;

/// An exact monetary value: a rational amount bound to a [`Currency`],
/// with no scale.
///
/// Chains of operations on a `RationalMoney` accumulate zero rounding
/// error; the value takes a fixed scale only when [`RationalMoney::to`]
/// collapses it through a [`Context`]. Splitting a payment or applying a
/// series of percentage adjustments should stay rational until the final
/// result is materialized.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct RationalMoney {
    /// The exact rational amount.
    #[getset(get = "pub")]
    amount: BigRational,
    /// The currency the amount is denominated in.
    #[getset(get = "pub")]
    currency: Currency,
}

impl RationalMoney {
    /// An exact money of the given amount.
    ///
    /// ```
    /// use moneta::{Context, Error, RationalMoney, RoundingMode};
    ///
    /// let third = RationalMoney::of("100", "USD")?.divided_by(3)?;
    /// // no precision was lost yet; collapsing must round
    /// assert_eq!(third.to(&Context::Default, RoundingMode::Unnecessary), Err(Error::RoundingNecessary));
    /// let cents = third.to(&Context::Default, RoundingMode::Down)?;
    /// assert_eq!(cents.to_string(), "USD 33.33");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn of<A, C>(amount: A, currency: C) -> Result<RationalMoney>
    where
        A: IntoRational,
        C: IntoCurrency,
    {
        Ok(RationalMoney {
            amount: amount.into_rational()?,
            currency: currency.into_currency()?,
        })
    }

    /// Exact zero.
    pub fn zero(currency: Currency) -> RationalMoney {
        RationalMoney {
            amount: BigRational::zero(),
            currency,
        }
    }

    pub(crate) fn from_money(money: &Money) -> RationalMoney {
        RationalMoney {
            amount: money.rational_amount(),
            currency: money.currency().clone(),
        }
    }

    pub(crate) fn from_parts(amount: BigRational, currency: Currency) -> RationalMoney {
        RationalMoney { amount, currency }
    }

    fn check_operand<T: MoneyOperand>(&self, that: &T) -> Result<()> {
        if let Some(currency) = that.currency() {
            if currency != &self.currency {
                return Err(Error::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    actual: currency.code().to_string(),
                });
            }
        }
        Ok(())
    }

    /// The exact sum of this and `that`.
    pub fn plus<T: MoneyOperand>(&self, that: T) -> Result<RationalMoney> {
        self.check_operand(&that)?;
        Ok(RationalMoney {
            amount: &self.amount + that.rational()?,
            currency: self.currency.clone(),
        })
    }

    /// The exact difference of this and `that`.
    pub fn minus<T: MoneyOperand>(&self, that: T) -> Result<RationalMoney> {
        self.check_operand(&that)?;
        Ok(RationalMoney {
            amount: &self.amount - that.rational()?,
            currency: self.currency.clone(),
        })
    }

    /// This value multiplied by a bare number, exactly.
    pub fn multiplied_by<A: IntoRational>(&self, factor: A) -> Result<RationalMoney> {
        Ok(RationalMoney {
            amount: &self.amount * factor.into_rational()?,
            currency: self.currency.clone(),
        })
    }

    /// This value divided by a bare number, exactly. Dividing by another
    /// monetary value is not defined.
    pub fn divided_by<A: IntoRational>(&self, divisor: A) -> Result<RationalMoney> {
        let divisor = divisor.into_rational()?;
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(RationalMoney {
            amount: &self.amount / divisor,
            currency: self.currency.clone(),
        })
    }

    /// The absolute value.
    pub fn abs(&self) -> RationalMoney {
        RationalMoney {
            amount: self.amount.abs(),
            currency: self.currency.clone(),
        }
    }

    /// The negated value.
    pub fn negated(&self) -> RationalMoney {
        RationalMoney {
            amount: -&self.amount,
            currency: self.currency.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Compare against a same-currency operand, exactly.
    pub fn compare_to<T: MoneyOperand>(&self, that: T) -> Result<Ordering> {
        self.check_operand(&that)?;
        Ok(self.amount.cmp(&that.rational()?))
    }

    pub fn is_equal_to<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Equal)
    }

    pub fn is_less_than<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Less)
    }

    pub fn is_greater_than<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Greater)
    }

    /// Collapse to a fixed-scale [`Money`] under the given context. This
    /// is the single point where a rational value becomes a decimal one,
    /// and therefore the single point where rounding can happen.
    pub fn to(&self, context: &Context, mode: RoundingMode) -> Result<Money> {
        let amount = context.apply_to(&self.amount, &self.currency, mode)?;
        Ok(Money::from_parts(amount, self.currency.clone(), context.step()))
    }
}

impl fmt::Display for RationalMoney {
    /// Renders the exact decimal form when one exists; a value with a
    /// repeating decimal expansion falls back to the simplified fraction
    /// rather than rounding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rounding::to_exact_decimal(&self.amount) {
            Ok(decimal) => write!(f, "{} {}", self.currency.code(), decimal),
            Err(_) => write!(f, "{} {}", self.currency.code(), self.amount),
        }
    }
}

impl FromStr for RationalMoney {
    type Err = Error;

    /// Parse `"<CODE> <amount>"` where the amount is a decimal or a
    /// `"p/q"` fraction, splitting on the last space.
    fn from_str(s: &str) -> Result<RationalMoney> {
        let (code, amount) = s
            .rsplit_once(' ')
            .ok_or_else(|| Error::Parse(s.to_string()))?;
        let currency = Currency::of(code)?;
        let amount = amount.into_rational().map_err(|err| match err {
            Error::DivisionByZero => Error::DivisionByZero,
            _ => Error::Parse(s.to_string()),
        })?;
        Ok(RationalMoney { amount, currency })
    }
}
