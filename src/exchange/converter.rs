//! Applying exchange rates to monetary values.

use getset::Getters;

use crate::context::Context;
use crate::currency::IntoCurrency;
use crate::error::Result;
use crate::exchange::ExchangeRateProvider;
use crate::money::rational::RationalMoney;
use crate::money::Money;
use crate::rounding::RoundingMode;

/// Converts monetary values between currencies with rates from a
/// provider, collapsing results with a fixed context.
#[derive(Getters)]
pub struct CurrencyConverter<P> {
    provider: P,
    /// The context applied to converted amounts.
    #[getset(get = "pub")]
    context: Context,
}

impl<P: ExchangeRateProvider> CurrencyConverter<P> {
    /// A converter collapsing to the target currency's default scale.
    pub fn new(provider: P) -> Self {
        CurrencyConverter {
            provider,
            context: Context::Default,
        }
    }

    /// Replace the collapse context.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Convert `money` into `currency`.
    ///
    /// When the currency already matches, the value is returned unchanged
    /// and no rate is consulted. Otherwise the provider's rate is applied
    /// to the exact amount and the result collapsed with the converter's
    /// context. A missing rate propagates as
    /// [`ConversionNotAvailable`](crate::Error::ConversionNotAvailable).
    pub fn convert<C: IntoCurrency>(&self, money: &Money, currency: C, mode: RoundingMode) -> Result<Money> {
        let currency = currency.into_currency()?;
        if money.currency() == &currency {
            return Ok(money.clone());
        }
        let rate = self
            .provider
            .exchange_rate(money.currency().code(), currency.code())?;
        money.converted_to(currency, &rate, &self.context, mode)
    }

    /// Convert exactly, with no collapse and no rounding.
    pub fn convert_to_rational<C: IntoCurrency>(&self, money: &Money, currency: C) -> Result<RationalMoney> {
        let currency = currency.into_currency()?;
        if money.currency() == &currency {
            return Ok(money.to_rational());
        }
        let rate = self
            .provider
            .exchange_rate(money.currency().code(), currency.code())?;
        Ok(RationalMoney::from_parts(money.rational_amount() * rate, currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::exchange::ConfigurableExchangeRateProvider;
    use crate::util::test::money;
    use crate::rat;

    fn eur_usd_provider() -> ConfigurableExchangeRateProvider {
        let mut provider = ConfigurableExchangeRateProvider::new();
        provider.set_rate("EUR", "USD", "1.0817").unwrap();
        provider
    }

    #[test]
    fn converts_through_the_rate() {
        let converter = CurrencyConverter::new(eur_usd_provider());
        let converted = converter
            .convert(&money("EUR 10.00"), "USD", RoundingMode::HalfEven)
            .unwrap();
        assert_eq!(converted, money("USD 10.82"));
        // the default context refuses silent rounding
        assert_eq!(
            converter.convert(&money("EUR 10.00"), "USD", RoundingMode::Unnecessary),
            Err(Error::RoundingNecessary)
        );
    }

    #[test]
    fn identity_conversion_consults_no_provider() {
        // an empty provider errors on any lookup, so success proves the
        // short circuit
        let converter = CurrencyConverter::new(ConfigurableExchangeRateProvider::new());
        let original = money("USD 12.34");
        let converted = converter.convert(&original, "USD", RoundingMode::Unnecessary).unwrap();
        assert_eq!(converted, original);

        let rational = converter.convert_to_rational(&original, "USD").unwrap();
        assert_eq!(rational.amount(), &rat!("12.34"));
    }

    #[test]
    fn missing_rates_propagate() {
        let converter = CurrencyConverter::new(eur_usd_provider());
        assert_eq!(
            converter.convert(&money("USD 1.00"), "EUR", RoundingMode::HalfUp),
            Err(Error::ConversionNotAvailable { source: "USD".into(), target: "EUR".into() })
        );
    }

    #[test]
    fn rational_conversion_is_exact() {
        let converter = CurrencyConverter::new(eur_usd_provider());
        let converted = converter
            .convert_to_rational(&money("EUR 10.00"), "USD")
            .unwrap();
        assert_eq!(converted.currency().code(), "USD");
        assert_eq!(converted.amount(), &rat!("10.817"));
    }

    #[test]
    fn custom_context_controls_the_collapse() {
        let converter = CurrencyConverter::new(eur_usd_provider()).with_context(Context::with_scale(4));
        let converted = converter
            .convert(&money("EUR 10.00"), "USD", RoundingMode::Unnecessary)
            .unwrap();
        assert_eq!(converted.scale(), 4);
        assert_eq!(converted, money("USD 10.8170"));
    }
}
