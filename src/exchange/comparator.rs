//! Cross-currency comparison without intermediate rounding.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::exchange::ExchangeRateProvider;
use crate::money::Money;

/// Compares monetary values across currencies by converting the left
/// operand exactly and comparing rationals, so no rounding ever enters
/// the comparison.
///
/// Comparisons are directional: `compare(a, b)` uses the provider's
/// `a→b` rate and never the reciprocal of `b→a`. With a non-reciprocal
/// provider, `compare(a, b)` and `compare(b, a)` can legitimately
/// disagree; [`min`](MoneyComparator::min) and
/// [`max`](MoneyComparator::max) therefore fix the comparison order to
/// left-to-right over their input.
pub struct MoneyComparator<P> {
    provider: P,
}

impl<P: ExchangeRateProvider> MoneyComparator<P> {
    pub fn new(provider: P) -> Self {
        MoneyComparator { provider }
    }

    /// Order `left` against `right`, converting `left` into `right`'s
    /// currency exactly when they differ.
    pub fn compare(&self, left: &Money, right: &Money) -> Result<Ordering> {
        if left.currency() == right.currency() {
            return Ok(left.amount().cmp(right.amount()));
        }
        let rate = self
            .provider
            .exchange_rate(left.currency().code(), right.currency().code())?;
        let converted = left.rational_amount() * rate;
        Ok(converted.cmp(&right.rational_amount()))
    }

    pub fn is_equal(&self, left: &Money, right: &Money) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Equal)
    }

    pub fn is_less(&self, left: &Money, right: &Money) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Less)
    }

    pub fn is_greater(&self, left: &Money, right: &Money) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Greater)
    }

    /// The smallest of a non-empty sequence, comparing the running
    /// minimum against each candidate in turn; the earlier value wins
    /// ties.
    pub fn min<'a, I: IntoIterator<Item = &'a Money>>(&self, monies: I) -> Result<&'a Money> {
        let mut iter = monies.into_iter();
        let mut best = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("min() requires at least one value".into()))?;
        for money in iter {
            if self.compare(best, money)? == Ordering::Greater {
                best = money;
            }
        }
        Ok(best)
    }

    /// The largest of a non-empty sequence, comparing the running maximum
    /// against each candidate in turn; the earlier value wins ties.
    pub fn max<'a, I: IntoIterator<Item = &'a Money>>(&self, monies: I) -> Result<&'a Money> {
        let mut iter = monies.into_iter();
        let mut best = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("max() requires at least one value".into()))?;
        for money in iter {
            if self.compare(best, money)? == Ordering::Less {
                best = money;
            }
        }
        Ok(best)
    }
}
