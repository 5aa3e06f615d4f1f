//! The formatting seam.
//!
//! Locale-aware rendering wraps a platform formatting facility and lives
//! outside this library; this module fixes the interface such formatters
//! implement, plus the canonical code-prefixed rendering.

use crate::money::Money;

/// Formats a monetary value for display.
pub trait MoneyFormatter {
    fn format(&self, money: &Money) -> String;
}

/// Renders the canonical `"<CODE> <amount>"` form, the same shape that
/// [`Money`]'s `Display` and `FromStr` round-trip.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeFormatter;

impl MoneyFormatter for CodeFormatter {
    fn format(&self, money: &Money) -> String {
        money.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::money;

    #[test]
    fn code_formatter_round_trips() {
        let price = money("USD 12.34");
        assert_eq!(CodeFormatter.format(&price), "USD 12.34");
        assert_eq!(money(&CodeFormatter.format(&price)), price);
    }
}
