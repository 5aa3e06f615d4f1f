//! Money construction against a pluggable currency provider.
//!
//! [`Money::of`](crate::Money::of) resolves codes against the built-in
//! ISO table; a factory resolves them against any
//! [`CurrencyProvider`], so caller-defined currencies can be used by
//! code, too.

use num_bigint::BigInt;

use crate::context::Context;
use crate::currency::provider::CurrencyProvider;
use crate::error::Result;
use crate::money::Money;
use crate::rounding::RoundingMode;
use crate::util::number::IntoRational;

/// Builds [`Money`] values, resolving currency codes through a provider.
pub struct MoneyFactory<P> {
    provider: P,
}

impl<P: CurrencyProvider> MoneyFactory<P> {
    pub fn new(provider: P) -> Self {
        MoneyFactory { provider }
    }

    /// A money at the currency's default scale, refusing to round.
    pub fn of<A: IntoRational>(&self, amount: A, code: &str) -> Result<Money> {
        self.of_with(amount, code, &Context::Default, RoundingMode::Unnecessary)
    }

    /// A money collapsed by an explicit context.
    pub fn of_with<A: IntoRational>(&self, amount: A, code: &str, context: &Context, mode: RoundingMode) -> Result<Money> {
        let currency = self.provider.currency(code)?;
        Money::of_with(amount, currency, context, mode)
    }

    /// A money from a count of minor units.
    pub fn of_minor<A: Into<BigInt>>(&self, minor_amount: A, code: &str) -> Result<Money> {
        let currency = self.provider.currency(code)?;
        Money::of_minor(minor_amount, currency)
    }

    /// Zero at the currency's default scale.
    pub fn zero(&self, code: &str) -> Result<Money> {
        Ok(Money::zero_of(&self.provider.currency(code)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::provider::{ConfigurableCurrencyProvider, CurrencyProviderChain};
    use crate::currency::iso::IsoCurrencyProvider;
    use crate::currency::Currency;
    use crate::error::Error;
    use crate::dec;

    fn providers() -> CurrencyProviderChain {
        let bitcoin: Currency = Currency::builder()
            .code("XBT")
            .name("Bitcoin")
            .default_fraction_digits(8u32)
            .build()
            .map(Currency::from)
            .unwrap();
        let mut configurable = ConfigurableCurrencyProvider::new();
        configurable.register(bitcoin);

        let mut chain = CurrencyProviderChain::new();
        chain.add_provider(Box::new(configurable));
        chain.add_provider(Box::new(IsoCurrencyProvider::new()));
        chain
    }

    #[test]
    fn builds_with_custom_currencies() {
        let factory = MoneyFactory::new(providers());
        let fee = factory.of("0.00014999", "XBT").unwrap();
        assert_eq!(fee.scale(), 8);
        assert_eq!(fee.to_string(), "XBT 0.00014999");

        // the ISO table is still reachable through the chain
        let price = factory.of("12.34", "USD").unwrap();
        assert_eq!(price.amount(), &dec!("12.34"));
    }

    #[test]
    fn minor_units_and_zero() {
        let factory = MoneyFactory::new(providers());
        let sats = factory.of_minor(100_000_000, "XBT").unwrap();
        assert_eq!(sats.to_string(), "XBT 1.00000000");
        assert_eq!(factory.zero("XBT").unwrap().scale(), 8);
    }

    #[test]
    fn unknown_codes_fail() {
        let factory = MoneyFactory::new(providers());
        assert_eq!(
            factory.of("1.00", "ZZZ"),
            Err(Error::UnknownCurrency("ZZZ".into()))
        );
    }
}
