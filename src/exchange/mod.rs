//! Exchange rates between currencies.

pub mod comparator;
pub mod converter;

use std::cell::RefCell;
use std::collections::HashMap;

use num_rational::BigRational;
use num_traits::Signed;

use crate::error::{Error, Result};
use crate::util::number::IntoRational;

pub use self::comparator::MoneyComparator;
pub use self::converter::CurrencyConverter;

/// Supplies the scalar rate relating a source currency to a target
/// currency.
///
/// Rates are exact positive rationals and directional: nothing requires
/// the `target→source` rate to be the reciprocal of `source→target`, and
/// several real-world sources quote them asymmetrically.
pub trait ExchangeRateProvider {
    /// The rate such that `amount_in_target = amount_in_source × rate`.
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational>;
}

impl<P: ExchangeRateProvider + ?Sized> ExchangeRateProvider for &P {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        (**self).exchange_rate(source_code, target_code)
    }
}

impl<P: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Box<P> {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        (**self).exchange_rate(source_code, target_code)
    }
}

fn not_available(source_code: &str, target_code: &str) -> Error {
    Error::ConversionNotAvailable {
        source: source_code.to_string(),
        target: target_code.to_string(),
    }
}

/// A mutable, in-memory rate table. Not internally synchronized.
#[derive(Clone, Debug, Default)]
pub struct ConfigurableExchangeRateProvider {
    rates: HashMap<(String, String), BigRational>,
}

impl ConfigurableExchangeRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rate for a pair, replacing any previous one. The rate
    /// must be positive.
    pub fn set_rate<A: IntoRational>(&mut self, source_code: &str, target_code: &str, rate: A) -> Result<()> {
        let rate = rate.into_rational()?;
        if !rate.is_positive() {
            return Err(Error::InvalidArgument(format!(
                "exchange rate from {} to {} must be positive",
                source_code, target_code
            )));
        }
        self.rates
            .insert((source_code.to_string(), target_code.to_string()), rate);
        Ok(())
    }

    /// Remove the rate for a pair, returning it if present.
    pub fn remove_rate(&mut self, source_code: &str, target_code: &str) -> Option<BigRational> {
        self.rates
            .remove(&(source_code.to_string(), target_code.to_string()))
    }
}

impl ExchangeRateProvider for ConfigurableExchangeRateProvider {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        self.rates
            .get(&(source_code.to_string(), target_code.to_string()))
            .cloned()
            .ok_or_else(|| not_available(source_code, target_code))
    }
}

/// Tries a list of providers in order. A provider with no rate for the
/// pair falls through to the next; any other error propagates immediately.
#[derive(Default)]
pub struct ExchangeRateProviderChain {
    providers: Vec<Box<dyn ExchangeRateProvider>>,
}

impl ExchangeRateProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider; earlier providers take precedence.
    pub fn add_provider(&mut self, provider: Box<dyn ExchangeRateProvider>) {
        self.providers.push(provider);
    }
}

impl ExchangeRateProvider for ExchangeRateProviderChain {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        for provider in &self.providers {
            match provider.exchange_rate(source_code, target_code) {
                Err(Error::ConversionNotAvailable { .. }) => continue,
                other => return other,
            }
        }
        Err(not_available(source_code, target_code))
    }
}

/// Memoizes the rates of a wrapped provider until invalidated. Interior
/// mutability only; not internally synchronized.
#[derive(Debug, Default)]
pub struct CachedExchangeRateProvider<P> {
    provider: P,
    cache: RefCell<HashMap<(String, String), BigRational>>,
}

impl<P: ExchangeRateProvider> CachedExchangeRateProvider<P> {
    pub fn new(provider: P) -> Self {
        CachedExchangeRateProvider {
            provider,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Drop every memoized rate.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<P: ExchangeRateProvider> ExchangeRateProvider for CachedExchangeRateProvider<P> {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        let key = (source_code.to_string(), target_code.to_string());
        if let Some(rate) = self.cache.borrow().get(&key) {
            return Ok(rate.clone());
        }
        let rate = self.provider.exchange_rate(source_code, target_code)?;
        self.cache.borrow_mut().insert(key, rate.clone());
        Ok(rate)
    }
}

/// Derives the rate for any pair through a base currency:
/// `rate(source→target) = rate(base→target) / rate(base→source)`.
#[derive(Debug)]
pub struct BaseCurrencyProvider<P> {
    provider: P,
    base_currency_code: String,
}

impl<P: ExchangeRateProvider> BaseCurrencyProvider<P> {
    pub fn new(provider: P, base_currency_code: &str) -> Self {
        BaseCurrencyProvider {
            provider,
            base_currency_code: base_currency_code.to_string(),
        }
    }
}

impl<P: ExchangeRateProvider> ExchangeRateProvider for BaseCurrencyProvider<P> {
    fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
        let base_to_target = self
            .provider
            .exchange_rate(&self.base_currency_code, target_code)?;
        let base_to_source = self
            .provider
            .exchange_rate(&self.base_currency_code, source_code)?;
        // base_to_source is positive by the provider contract
        Ok(base_to_target / base_to_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::rat;

    #[test]
    fn configurable_rates() {
        let mut provider = ConfigurableExchangeRateProvider::new();
        provider.set_rate("EUR", "USD", "1.1").unwrap();
        assert_eq!(provider.exchange_rate("EUR", "USD").unwrap(), rat!("11/10"));

        // directional: the reverse pair is a separate entry
        assert_eq!(
            provider.exchange_rate("USD", "EUR"),
            Err(Error::ConversionNotAvailable { source: "USD".into(), target: "EUR".into() })
        );

        assert_eq!(provider.remove_rate("EUR", "USD").unwrap(), rat!("11/10"));
        assert!(provider.remove_rate("EUR", "USD").is_none());
    }

    #[test]
    fn rates_must_be_positive() {
        let mut provider = ConfigurableExchangeRateProvider::new();
        assert!(matches!(provider.set_rate("EUR", "USD", 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(provider.set_rate("EUR", "USD", "-1.1"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn chain_falls_through_on_missing_rates_only() {
        let mut first = ConfigurableExchangeRateProvider::new();
        first.set_rate("EUR", "USD", "1.1").unwrap();
        let mut second = ConfigurableExchangeRateProvider::new();
        second.set_rate("EUR", "USD", "9.9").unwrap();
        second.set_rate("GBP", "USD", "1.3").unwrap();

        let mut chain = ExchangeRateProviderChain::new();
        chain.add_provider(Box::new(first));
        chain.add_provider(Box::new(second));

        // the first provider wins for pairs it knows
        assert_eq!(chain.exchange_rate("EUR", "USD").unwrap(), rat!("11/10"));
        // unknown pairs fall through
        assert_eq!(chain.exchange_rate("GBP", "USD").unwrap(), rat!("13/10"));
        assert_eq!(
            chain.exchange_rate("USD", "JPY"),
            Err(Error::ConversionNotAvailable { source: "USD".into(), target: "JPY".into() })
        );
    }

    struct CountingProvider<'a> {
        calls: &'a Cell<u32>,
    }

    impl ExchangeRateProvider for CountingProvider<'_> {
        fn exchange_rate(&self, source_code: &str, target_code: &str) -> Result<BigRational> {
            self.calls.set(self.calls.get() + 1);
            if source_code == "EUR" && target_code == "USD" {
                Ok(rat!("1.1"))
            } else {
                Err(not_available(source_code, target_code))
            }
        }
    }

    #[test]
    fn cached_provider_memoizes() {
        let calls = Cell::new(0);
        let cached = CachedExchangeRateProvider::new(CountingProvider { calls: &calls });

        assert_eq!(cached.exchange_rate("EUR", "USD").unwrap(), rat!("1.1"));
        assert_eq!(cached.exchange_rate("EUR", "USD").unwrap(), rat!("1.1"));
        assert_eq!(calls.get(), 1);

        // failures are not cached
        assert!(cached.exchange_rate("EUR", "JPY").is_err());
        assert!(cached.exchange_rate("EUR", "JPY").is_err());
        assert_eq!(calls.get(), 3);

        cached.invalidate();
        assert_eq!(cached.exchange_rate("EUR", "USD").unwrap(), rat!("1.1"));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn base_currency_derivation() {
        let mut rates = ConfigurableExchangeRateProvider::new();
        rates.set_rate("USD", "EUR", "0.9").unwrap();
        rates.set_rate("USD", "GBP", "0.8").unwrap();

        let provider = BaseCurrencyProvider::new(rates, "USD");
        // EUR→GBP through USD: 0.8 / 0.9
        assert_eq!(provider.exchange_rate("EUR", "GBP").unwrap(), rat!("8/9"));
        assert_eq!(
            provider.exchange_rate("EUR", "JPY"),
            Err(Error::ConversionNotAvailable { source: "USD".into(), target: "JPY".into() })
        );
    }
}
