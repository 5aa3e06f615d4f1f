//! Serde support, enabled with the `with_serde` feature.
//!
//! [`Currency`] serializes as its code; deserializing fails for codes the
//! ISO table does not know. [`Money`] and [`RationalMoney`] serialize as
//! their canonical string form. The string form carries no cash step, so
//! deserialized `Money` values have step 1.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::Currency;
use crate::money::rational::RationalMoney;
use crate::money::Money;

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

struct CurrencyVisitor;

impl<'de> Visitor<'de> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 4217 currency code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Currency, E> {
        Currency::of(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Currency, D::Error> {
        deserializer.deserialize_str(CurrencyVisitor)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a monetary value like \"USD 12.34\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_str(MoneyVisitor)
    }
}

impl Serialize for RationalMoney {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct RationalMoneyVisitor;

impl<'de> Visitor<'de> for RationalMoneyVisitor {
    type Value = RationalMoney;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a monetary value like \"USD 12.34\" or \"GBP 1/3\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RationalMoney, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for RationalMoney {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RationalMoney, D::Error> {
        deserializer.deserialize_str(RationalMoneyVisitor)
    }
}
