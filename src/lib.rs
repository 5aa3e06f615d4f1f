//! Moneta models money: currencies (ISO 4217 and caller-defined), exact
//! and fixed-scale monetary amounts, arithmetic with strict
//! currency-mismatch checking, cash and step rounding contexts, and
//! currency conversion through pluggable exchange rate providers.
//!
//! Precision is the organizing principle. Raw arithmetic runs on exact
//! rationals, and a result only takes a fixed scale when a [`Context`]
//! collapses it, refusing by default to round at all: precision loss is
//! always an explicit decision.
//!
//! ```
//! use moneta::{Error, Money, RoundingMode};
//!
//! let price = Money::of("24.99", "USD")?;
//! let shipping = Money::of("3.50", "USD")?;
//! let order = price.plus(&shipping)?;
//! assert_eq!(order.to_string(), "USD 28.49");
//!
//! // a three-way split cannot be represented at scale 2...
//! assert_eq!(order.divided_by(3), Err(Error::RoundingNecessary));
//! // ...until a rounding mode says how
//! let share = order.divided_by_rounded(3, RoundingMode::Down)?;
//! assert_eq!(share.to_string(), "USD 9.49");
//! # Ok::<(), Error>(())
//! ```
//!
//! Chains of operations stay exact with [`RationalMoney`], which becomes
//! a [`Money`] only at the end:
//!
//! ```
//! use moneta::{Context, Error, RationalMoney, RoundingMode};
//!
//! let discounted = RationalMoney::of("100.00", "USD")?
//!     .multiplied_by("0.95")?
//!     .divided_by(12)?
//!     .multiplied_by(12)?;
//! // no intermediate rounding happened, so the collapse is exact
//! let monthly_total = discounted.to(&Context::Default, RoundingMode::Unnecessary)?;
//! assert_eq!(monthly_total.to_string(), "USD 95.00");
//! # Ok::<(), Error>(())
//! ```

pub mod context;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod format;
pub mod money;
pub mod rounding;
#[cfg(feature = "with_serde")]
mod serde;
mod util;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
pub use num_rational::BigRational;

pub use crate::context::Context;
pub use crate::currency::iso::IsoCurrencyProvider;
pub use crate::currency::provider::{
    ConfigurableCurrencyProvider, CurrencyProvider, CurrencyProviderChain,
};
pub use crate::currency::{Currency, CurrencyData, CurrencyDataBuilder, IntoCurrency};
pub use crate::error::{Error, Result};
pub use crate::exchange::{
    BaseCurrencyProvider, CachedExchangeRateProvider, ConfigurableExchangeRateProvider,
    CurrencyConverter, ExchangeRateProvider, ExchangeRateProviderChain, MoneyComparator,
};
pub use crate::format::{CodeFormatter, MoneyFormatter};
pub use crate::money::bag::MoneyBag;
pub use crate::money::factory::MoneyFactory;
pub use crate::money::rational::RationalMoney;
pub use crate::money::{Money, MoneyOperand};
pub use crate::rounding::RoundingMode;
pub use crate::util::number::IntoRational;
