//! Pluggable currency lookup.

use std::collections::HashMap;

use crate::currency::Currency;
use crate::error::{Error, Result};

/// Resolves currency codes to [`Currency`] values.
pub trait CurrencyProvider {
    /// Look up a currency by code.
    fn currency(&self, code: &str) -> Result<Currency>;

    /// Every currency this provider can resolve, keyed by code.
    fn available_currencies(&self) -> HashMap<String, Currency>;
}

impl<P: CurrencyProvider + ?Sized> CurrencyProvider for &P {
    fn currency(&self, code: &str) -> Result<Currency> {
        (**self).currency(code)
    }

    fn available_currencies(&self) -> HashMap<String, Currency> {
        (**self).available_currencies()
    }
}

impl<P: CurrencyProvider + ?Sized> CurrencyProvider for Box<P> {
    fn currency(&self, code: &str) -> Result<Currency> {
        (**self).currency(code)
    }

    fn available_currencies(&self) -> HashMap<String, Currency> {
        (**self).available_currencies()
    }
}

/// A mutable, in-memory provider for caller-defined currencies. Not
/// internally synchronized; share behind a lock if shared at all.
#[derive(Clone, Debug, Default)]
pub struct ConfigurableCurrencyProvider {
    currencies: HashMap<String, Currency>,
}

impl ConfigurableCurrencyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a currency, replacing any previous entry with its code.
    pub fn register(&mut self, currency: Currency) {
        self.currencies.insert(currency.code().to_string(), currency);
    }

    /// Remove a currency by code, returning it if present.
    pub fn unregister(&mut self, code: &str) -> Option<Currency> {
        self.currencies.remove(code)
    }
}

impl CurrencyProvider for ConfigurableCurrencyProvider {
    fn currency(&self, code: &str) -> Result<Currency> {
        self.currencies
            .get(code)
            .cloned()
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }

    fn available_currencies(&self) -> HashMap<String, Currency> {
        self.currencies.clone()
    }
}

/// Tries a list of providers in order. A provider that does not know the
/// code falls through to the next; any other error propagates immediately.
#[derive(Default)]
pub struct CurrencyProviderChain {
    providers: Vec<Box<dyn CurrencyProvider>>,
}

impl CurrencyProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider; earlier providers take precedence.
    pub fn add_provider(&mut self, provider: Box<dyn CurrencyProvider>) {
        self.providers.push(provider);
    }
}

impl CurrencyProvider for CurrencyProviderChain {
    fn currency(&self, code: &str) -> Result<Currency> {
        for provider in &self.providers {
            match provider.currency(code) {
                Err(Error::UnknownCurrency(_)) => continue,
                other => return other,
            }
        }
        Err(Error::UnknownCurrency(code.to_string()))
    }

    fn available_currencies(&self) -> HashMap<String, Currency> {
        let mut all = HashMap::new();
        for provider in self.providers.iter().rev() {
            all.extend(provider.available_currencies());
        }
        all
    }
}
