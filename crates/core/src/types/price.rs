//! Type-safe price representation using decimal arithmetic.
//!
//! The numeric amount is the only source of truth. Display strings are
//! derived at read time via [`Price::display`], never stored, so rendered
//! prices cannot drift from the amounts used for totals.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create a price from an amount in the currency's minor unit
    /// (centavos/cents), the representation used by the billing provider.
    #[must_use]
    pub fn from_minor_units(minor: i64, currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(minor, 2),
            currency,
        }
    }

    /// Format for display in the store's pt-BR convention
    /// (e.g., `R$ 1.234,50`).
    #[must_use]
    pub fn display(&self) -> String {
        let minor = (self.amount * Decimal::ONE_HUNDRED)
            .round()
            .to_i64()
            .unwrap_or(0);
        let sign = if minor < 0 { "-" } else { "" };
        let minor = minor.abs();
        format!(
            "{} {sign}{},{:02}",
            self.currency.symbol(),
            group_thousands(minor / 100),
            minor % 100
        )
    }
}

/// ISO 4217 currency codes accepted from the billing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "US$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Lowercase ISO code as used on the billing provider's wire format.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "brl",
            Self::USD => "usd",
            Self::EUR => "eur",
            Self::GBP => "gbp",
        }
    }

    /// Parse a wire-format currency code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "brl" => Some(Self::BRL),
            "usd" => Some(Self::USD),
            "eur" => Some(Self::EUR),
            "gbp" => Some(Self::GBP),
            _ => None,
        }
    }
}

/// Group an integer's digits with '.' separators, pt-BR style.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let price = Price::from_minor_units(1050, CurrencyCode::BRL);
        assert_eq!(price.amount, Decimal::new(1050, 2));
        assert_eq!(price.currency, CurrencyCode::BRL);
    }

    #[test]
    fn test_display_zero() {
        let price = Price::from_minor_units(0, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ 0,00");
    }

    #[test]
    fn test_display_simple() {
        let price = Price::from_minor_units(1000, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ 10,00");
    }

    #[test]
    fn test_display_groups_thousands() {
        let price = Price::from_minor_units(123_450, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ 1.234,50");

        let price = Price::from_minor_units(1_234_567_890, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ 12.345.678,90");
    }

    #[test]
    fn test_display_negative() {
        let price = Price::from_minor_units(-990, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ -9,90");
    }

    #[test]
    fn test_display_other_currencies() {
        assert_eq!(
            Price::from_minor_units(500, CurrencyCode::USD).display(),
            "US$ 5,00"
        );
        assert_eq!(
            Price::from_minor_units(500, CurrencyCode::EUR).display(),
            "€ 5,00"
        );
    }

    #[test]
    fn test_currency_code_round_trip() {
        for currency in [
            CurrencyCode::BRL,
            CurrencyCode::USD,
            CurrencyCode::EUR,
            CurrencyCode::GBP,
        ] {
            assert_eq!(CurrencyCode::from_code(currency.code()), Some(currency));
        }
    }

    #[test]
    fn test_currency_code_case_insensitive() {
        assert_eq!(CurrencyCode::from_code("BRL"), Some(CurrencyCode::BRL));
        assert_eq!(CurrencyCode::from_code("Usd"), Some(CurrencyCode::USD));
    }

    #[test]
    fn test_currency_code_unknown() {
        assert_eq!(CurrencyCode::from_code("xyz"), None);
        assert_eq!(CurrencyCode::from_code(""), None);
    }
}
