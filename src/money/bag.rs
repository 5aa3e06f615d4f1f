//! Multi-currency accumulation.

use std::collections::HashMap;

use crate::currency::{Currency, IntoCurrency};
use crate::error::Result;
use crate::exchange::{CurrencyConverter, ExchangeRateProvider};
use crate::money::rational::RationalMoney;
use crate::money::Money;
use crate::rounding::RoundingMode;

/// A mutable mapping from currency to money, for accumulating amounts
/// across currencies.
///
/// Absent currencies hold zero. Entries are replaced wholesale on
/// mutation and never removed: a currency subtracted back to zero stays
/// in the bag as a zero entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoneyBag {
    monies: HashMap<Currency, Money>,
}

impl MoneyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored amount for a currency, or zero at the currency's
    /// default scale. Never fails.
    pub fn get(&self, currency: &Currency) -> Money {
        self.monies
            .get(currency)
            .cloned()
            .unwrap_or_else(|| Money::zero_of(currency))
    }

    /// Add a money to the bag.
    ///
    /// The incoming operand is the receiver of the addition, so its scale
    /// is authoritative for the stored entry: adding a scale-4 amount to a
    /// scale-2 entry grows the entry to scale 4, while the reverse fails
    /// under the no-rounding default of `plus`.
    pub fn add(&mut self, money: &Money) -> Result<()> {
        let sum = money.plus(self.get(money.currency()))?;
        self.monies.insert(money.currency().clone(), sum);
        Ok(())
    }

    /// Subtract a money from the bag; the entry may go negative. The
    /// incoming operand's scale is authoritative, as with
    /// [`add`](MoneyBag::add).
    pub fn subtract(&mut self, money: &Money) -> Result<()> {
        let difference = money.negated().plus(self.get(money.currency()))?;
        self.monies.insert(money.currency().clone(), difference);
        Ok(())
    }

    /// The currencies present in the bag.
    pub fn currencies(&self) -> Vec<Currency> {
        self.monies.keys().cloned().collect()
    }

    /// The stored entries.
    pub fn monies(&self) -> &HashMap<Currency, Money> {
        &self.monies
    }

    pub fn is_empty(&self) -> bool {
        self.monies.is_empty()
    }

    /// Convert every entry into `currency` and sum them, accumulating
    /// exactly and collapsing once at the end with the converter's
    /// context.
    pub fn total<P, C>(&self, currency: C, converter: &CurrencyConverter<P>, mode: RoundingMode) -> Result<Money>
    where
        P: ExchangeRateProvider,
        C: IntoCurrency,
    {
        let currency = currency.into_currency()?;
        let mut sum = RationalMoney::zero(currency.clone());
        for money in self.monies.values() {
            sum = sum.plus(converter.convert_to_rational(money, &currency)?)?;
        }
        sum.to(converter.context(), mode)
    }
}
