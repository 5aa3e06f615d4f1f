//! Monetary amounts at a fixed scale.

pub mod bag;
pub mod factory;
pub mod rational;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use getset::{CopyGetters, Getters};
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::Zero;

use crate::context::Context;
use crate::currency::{Currency, IntoCurrency};
use crate::error::{Error, Result};
use crate::rounding::{self, RoundingMode};
use crate::util::number::{self, IntoRational};

use self::rational::RationalMoney;

/// An operand of a monetary operation: another monetary value, whose
/// currency must match the receiver's, or a bare number.
pub trait MoneyOperand {
    /// The operand as an exact rational.
    fn rational(&self) -> Result<BigRational>;

    /// The operand's currency, if it carries one.
    fn currency(&self) -> Option<&Currency>;
}

impl MoneyOperand for Money {
    fn rational(&self) -> Result<BigRational> {
        Ok(self.rational_amount())
    }

    fn currency(&self) -> Option<&Currency> {
        Some(&self.currency)
    }
}

impl MoneyOperand for &Money {
    fn rational(&self) -> Result<BigRational> {
        Ok(self.rational_amount())
    }

    fn currency(&self) -> Option<&Currency> {
        Some(Money::currency(self))
    }
}

impl MoneyOperand for RationalMoney {
    fn rational(&self) -> Result<BigRational> {
        Ok(self.amount().clone())
    }

    fn currency(&self) -> Option<&Currency> {
        Some(RationalMoney::currency(self))
    }
}

impl MoneyOperand for &RationalMoney {
    fn rational(&self) -> Result<BigRational> {
        Ok(self.amount().clone())
    }

    fn currency(&self) -> Option<&Currency> {
        Some(RationalMoney::currency(self))
    }
}

impl MoneyOperand for &str {
    fn rational(&self) -> Result<BigRational> {
        (*self).into_rational()
    }

    fn currency(&self) -> Option<&Currency> {
        None
    }
}

macro_rules! operand_from_number {
    ($($ty:ty)*) => {$(
        impl MoneyOperand for $ty {
            fn rational(&self) -> Result<BigRational> {
                self.clone().into_rational()
            }

            fn currency(&self) -> Option<&Currency> {
                None
            }
        }
    )*}
}

operand_from_number! {
    i8 i16 i32 i64 i128 u8 u16 u32 u64 u128
    BigInt BigDecimal BigRational
}

/// A monetary amount: a fixed-scale decimal bound to a [`Currency`], plus
/// the rounding step the amount is a multiple of (1 for all but
/// cash-rounded amounts).
///
/// Values are immutable; every operation returns a new `Money`. The scale
/// and step are established at construction by a [`Context`] and
/// reapplied by arithmetic, so results always stay representable. Raw
/// results that would not be are refused with
/// [`Error::RoundingNecessary`] unless an explicit [`RoundingMode`] says
/// otherwise.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct Money {
    /// The decimal amount.
    #[getset(get = "pub")]
    amount: BigDecimal,
    /// The currency the amount is denominated in.
    #[getset(get = "pub")]
    currency: Currency,
    /// The minimal increment of the amount at its scale.
    #[getset(get_copy = "pub")]
    step: u32,
}

impl Money {
    /// A money of the given amount, at the currency's default scale,
    /// refusing to round.
    ///
    /// ```
    /// use moneta::{Error, Money};
    ///
    /// let price = Money::of("12.34", "USD")?;
    /// assert_eq!(price.to_string(), "USD 12.34");
    /// // a third digit cannot be represented at scale 2
    /// assert_eq!(Money::of("12.345", "USD"), Err(Error::RoundingNecessary));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn of<A, C>(amount: A, currency: C) -> Result<Money>
    where
        A: IntoRational,
        C: IntoCurrency,
    {
        Money::of_with(amount, currency, &Context::Default, RoundingMode::Unnecessary)
    }

    /// Like [`Money::of`], rounding with the given mode where needed.
    pub fn of_rounded<A, C>(amount: A, currency: C, mode: RoundingMode) -> Result<Money>
    where
        A: IntoRational,
        C: IntoCurrency,
    {
        Money::of_with(amount, currency, &Context::Default, mode)
    }

    /// A money of the given amount, collapsed by an explicit context.
    pub fn of_with<A, C>(amount: A, currency: C, context: &Context, mode: RoundingMode) -> Result<Money>
    where
        A: IntoRational,
        C: IntoCurrency,
    {
        let currency = currency.into_currency()?;
        let rational = amount.into_rational()?;
        let amount = context.apply_to(&rational, &currency, mode)?;
        Ok(Money { amount, currency, step: context.step() })
    }

    /// A money from a count of minor units (e.g. cents), at the currency's
    /// default scale. Exact by construction.
    pub fn of_minor<A, C>(minor_amount: A, currency: C) -> Result<Money>
    where
        A: Into<BigInt>,
        C: IntoCurrency,
    {
        let currency = currency.into_currency()?;
        let scale = i64::from(currency.default_fraction_digits());
        Ok(Money {
            amount: BigDecimal::new(minor_amount.into(), scale),
            currency,
            step: 1,
        })
    }

    /// Zero at the currency's default scale.
    pub fn zero<C: IntoCurrency>(currency: C) -> Result<Money> {
        Ok(Money::zero_of(&currency.into_currency()?))
    }

    /// Zero at an explicit scale.
    pub fn zero_with_scale<C: IntoCurrency>(currency: C, scale: u32) -> Result<Money> {
        let currency = currency.into_currency()?;
        Ok(Money {
            amount: BigDecimal::new(BigInt::zero(), i64::from(scale)),
            currency,
            step: 1,
        })
    }

    pub(crate) fn zero_of(currency: &Currency) -> Money {
        Money {
            amount: BigDecimal::new(BigInt::zero(), i64::from(currency.default_fraction_digits())),
            currency: currency.clone(),
            step: 1,
        }
    }

    pub(crate) fn from_parts(amount: BigDecimal, currency: Currency, step: u32) -> Money {
        Money { amount, currency, step }
    }

    /// The number of fraction digits of the amount.
    pub fn scale(&self) -> i64 {
        self.amount.fractional_digit_count()
    }

    pub(crate) fn rational_amount(&self) -> BigRational {
        number::decimal_to_rational(&self.amount)
    }

    /// This value as an exact, unrounded [`RationalMoney`].
    pub fn to_rational(&self) -> RationalMoney {
        RationalMoney::from_money(self)
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

    /// Reapply the receiver's scale and step to a raw arithmetic result.
    fn collapse(&self, raw: BigRational, mode: RoundingMode) -> Result<Money> {
        let amount = rounding::to_scale_with_step(&raw, self.scale(), self.step, mode)?;
        Ok(Money {
            amount,
            currency: self.currency.clone(),
            step: self.step,
        })
    }

    /// The sum of this and `that`, refusing to round.
    pub fn plus<T: MoneyOperand>(&self, that: T) -> Result<Money> {
        self.plus_rounded(that, RoundingMode::Unnecessary)
    }

    /// The sum of this and `that`, rounding back to this value's scale and
    /// step with the given mode where needed.
    pub fn plus_rounded<T: MoneyOperand>(&self, that: T, mode: RoundingMode) -> Result<Money> {
        self.check_operand(&that)?;
        let raw = self.rational_amount() + that.rational()?;
        self.collapse(raw, mode)
    }

    /// The difference of this and `that`, refusing to round.
    pub fn minus<T: MoneyOperand>(&self, that: T) -> Result<Money> {
        self.minus_rounded(that, RoundingMode::Unnecessary)
    }

    /// The difference of this and `that`, rounding with the given mode
    /// where needed.
    pub fn minus_rounded<T: MoneyOperand>(&self, that: T, mode: RoundingMode) -> Result<Money> {
        self.check_operand(&that)?;
        let raw = self.rational_amount() - that.rational()?;
        self.collapse(raw, mode)
    }

    /// This value multiplied by a bare number, refusing to round.
    pub fn multiplied_by<A: IntoRational>(&self, factor: A) -> Result<Money> {
        self.multiplied_by_rounded(factor, RoundingMode::Unnecessary)
    }

    /// This value multiplied by a bare number, rounding with the given
    /// mode where needed.
    pub fn multiplied_by_rounded<A: IntoRational>(&self, factor: A, mode: RoundingMode) -> Result<Money> {
        let raw = self.rational_amount() * factor.into_rational()?;
        self.collapse(raw, mode)
    }

    /// This value divided by a bare number, refusing to round.
    pub fn divided_by<A: IntoRational>(&self, divisor: A) -> Result<Money> {
        self.divided_by_rounded(divisor, RoundingMode::Unnecessary)
    }

    /// This value divided by a bare number, rounding with the given mode
    /// where needed.
    pub fn divided_by_rounded<A: IntoRational>(&self, divisor: A, mode: RoundingMode) -> Result<Money> {
        let divisor = divisor.into_rational()?;
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let raw = self.rational_amount() / divisor;
        self.collapse(raw, mode)
    }

    /// The absolute value; scale and step are preserved.
    pub fn abs(&self) -> Money {
        Money {
            amount: self.amount.abs(),
            currency: self.currency.clone(),
            step: self.step,
        }
    }

    /// The negated value; scale and step are preserved.
    pub fn negated(&self) -> Money {
        Money {
            amount: -&self.amount,
            currency: self.currency.clone(),
            step: self.step,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.sign() == Sign::Plus
    }

    pub fn is_negative(&self) -> bool {
        self.amount.sign() == Sign::Minus
    }

    /// Compare against a same-currency operand.
    pub fn compare_to<T: MoneyOperand>(&self, that: T) -> Result<Ordering> {
        self.check_operand(&that)?;
        Ok(self.rational_amount().cmp(&that.rational()?))
    }

    pub fn is_equal_to<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Equal)
    }

    pub fn is_less_than<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Less)
    }

    pub fn is_less_than_or_equal_to<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? != Ordering::Greater)
    }

    pub fn is_greater_than<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to<T: MoneyOperand>(&self, that: T) -> Result<bool> {
        Ok(self.compare_to(that)? != Ordering::Less)
    }

    /// Convert into another currency by multiplying the exact amount with
    /// an exchange rate, then collapsing with the given context.
    pub fn converted_to<C, A>(&self, currency: C, rate: A, context: &Context, mode: RoundingMode) -> Result<Money>
    where
        C: IntoCurrency,
        A: IntoRational,
    {
        let currency = currency.into_currency()?;
        let raw = self.rational_amount() * rate.into_rational()?;
        let amount = context.apply_to(&raw, &currency, mode)?;
        Ok(Money { amount, currency, step: context.step() })
    }

    fn check_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                actual: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// The smallest of a non-empty sequence of same-currency values. The
    /// first of several equal values wins.
    pub fn min<'a, I: IntoIterator<Item = &'a Money>>(monies: I) -> Result<Money> {
        let mut iter = monies.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("min() requires at least one value".into()))?;
        let mut best = first;
        for money in iter {
            first.check_currency(money)?;
            if money.amount < best.amount {
                best = money;
            }
        }
        Ok(best.clone())
    }

    /// The largest of a non-empty sequence of same-currency values. The
    /// first of several equal values wins.
    pub fn max<'a, I: IntoIterator<Item = &'a Money>>(monies: I) -> Result<Money> {
        let mut iter = monies.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("max() requires at least one value".into()))?;
        let mut best = first;
        for money in iter {
            first.check_currency(money)?;
            if money.amount > best.amount {
                best = money;
            }
        }
        Ok(best.clone())
    }

    /// The sum of a non-empty sequence of same-currency values.
    ///
    /// The summation is associated so the finer-scaled operand is always
    /// the receiver: the running total's scale is the maximum scale seen so
    /// far, and no precision is lost to a coarser accumulator.
    pub fn total<'a, I: IntoIterator<Item = &'a Money>>(monies: I) -> Result<Money> {
        let mut iter = monies.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("total() requires at least one value".into()))?;
        let mut sum = first.clone();
        for money in iter {
            first.check_currency(money)?;
            sum = if money.scale() > sum.scale() {
                money.plus(&sum)?
            } else {
                sum.plus(money)?
            };
        }
        Ok(sum)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parse the canonical `"<CODE> <decimal-amount>"` form, splitting on
    /// the last space. The parsed amount keeps the scale it is written
    /// with.
    fn from_str(s: &str) -> Result<Money> {
        let (code, amount) = s
            .rsplit_once(' ')
            .ok_or_else(|| Error::Parse(s.to_string()))?;
        let currency = Currency::of(code)?;
        let amount: BigDecimal = amount.parse().map_err(|_| Error::Parse(s.to_string()))?;
        Ok(Money { amount, currency, step: 1 })
    }
}
