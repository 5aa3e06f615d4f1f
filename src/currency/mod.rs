//! The currency value type and its lookup machinery.
//!
//! A [`Currency`] is a cheap, copyable handle: ISO currencies share one
//! interned instance per code, so looking the same code up twice hands
//! back the same allocation. Caller-defined currencies are built with
//! [`Currency::builder`] and registered with a
//! [`ConfigurableCurrencyProvider`](provider::ConfigurableCurrencyProvider).

pub mod iso;
pub mod provider;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use derive_builder::Builder;
use getset::{CopyGetters, Getters};

use crate::error::Result;

/// The data backing a currency.
#[derive(Builder, Clone, Debug, Getters, CopyGetters)]
#[builder(pattern = "owned", setter(into), build_fn(validate = "CurrencyDataBuilder::validate"))]
pub struct CurrencyData {
    /// The unique currency code, e.g. `"USD"`.
    #[getset(get = "pub")]
    code: String,
    /// The ISO 4217 numeric code; 0 for currencies without one.
    #[getset(get_copy = "pub")]
    #[builder(default)]
    numeric_code: u16,
    /// The English name of the currency.
    #[getset(get = "pub")]
    name: String,
    /// How many fraction digits amounts in this currency carry by default.
    #[getset(get_copy = "pub")]
    default_fraction_digits: u32,
}

impl CurrencyDataBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(code) = &self.code {
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(format!("invalid currency code {:?}", code));
            }
        }
        Ok(())
    }
}

/// A currency: an identity (code), a numeric code, a name, and a default
/// number of fraction digits. Two currencies are equal iff their codes are
/// equal.
#[derive(Clone, Debug)]
pub struct Currency {
    data: Arc<CurrencyData>,
}

impl Currency {
    /// Look up an ISO 4217 currency by code.
    pub fn of(code: &str) -> Result<Currency> {
        iso::lookup(code)
    }

    /// Look up an ISO 4217 currency by numeric code.
    pub fn of_numeric(numeric_code: u16) -> Result<Currency> {
        iso::lookup_numeric(numeric_code)
    }

    /// Start building a caller-defined currency:
    ///
    /// ```
    /// use moneta::{Currency, Error};
    ///
    /// let bitcoin: Currency = Currency::builder()
    ///     .code("XBT")
    ///     .name("Bitcoin")
    ///     .default_fraction_digits(8u32)
    ///     .build()
    ///     .map_err(Error::BuilderFailed)?
    ///     .into();
    /// assert_eq!(bitcoin.code(), "XBT");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn builder() -> CurrencyDataBuilder {
        CurrencyDataBuilder::default()
    }

    pub fn code(&self) -> &str {
        self.data.code()
    }

    pub fn numeric_code(&self) -> u16 {
        self.data.numeric_code()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn default_fraction_digits(&self) -> u32 {
        self.data.default_fraction_digits()
    }
}

impl From<CurrencyData> for Currency {
    fn from(data: CurrencyData) -> Self {
        Currency { data: Arc::new(data) }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolution of a caller-supplied currency argument: an existing
/// [`Currency`] handle, or a code looked up against the ISO table
/// (failing with [`Error::UnknownCurrency`] for codes the table does not
/// know).
pub trait IntoCurrency {
    fn into_currency(self) -> Result<Currency>;
}

impl IntoCurrency for Currency {
    fn into_currency(self) -> Result<Currency> {
        Ok(self)
    }
}

impl IntoCurrency for &Currency {
    fn into_currency(self) -> Result<Currency> {
        Ok(self.clone())
    }
}

impl IntoCurrency for &str {
    fn into_currency(self) -> Result<Currency> {
        Currency::of(self)
    }
}

impl IntoCurrency for String {
    fn into_currency(self) -> Result<Currency> {
        Currency::of(&self)
    }
}
