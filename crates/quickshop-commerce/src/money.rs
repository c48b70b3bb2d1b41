//! Money type for representing monetary values.
//!
//! Amounts are exact decimals, so catalog prices keep their full precision
//! through line totals and cart totals. Rounding to two places happens only
//! when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places every amount is displayed with.
pub const DISPLAY_PLACES: u32 = 2;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    MXN,
    ARS,
    COP,
    CLP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::MXN => "MXN",
            Currency::ARS => "ARS",
            Currency::COP => "COP",
            Currency::CLP => "CLP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    ///
    /// Dollar- and peso-denominated currencies all print as `$`, the way a
    /// local shop writes prices.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::USD
            | Currency::CAD
            | Currency::AUD
            | Currency::MXN
            | Currency::ARS
            | Currency::COP
            | Currency::CLP => "$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "MXN" => Some(Currency::MXN),
            "ARS" => Some(Currency::ARS),
            "COP" => Some(Currency::COP),
            "CLP" => Some(Currency::CLP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// The exact amount, in major units.
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from an exact decimal amount.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from hundredths of the major unit.
    ///
    /// ```
    /// use quickshop_commerce::money::{Money, Currency};
    /// let price = Money::from_cents(250, Currency::USD);
    /// assert_eq!(price.display_amount(), "2.50");
    /// ```
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(cents, DISPLAY_PLACES), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount alone, rounded half away from zero and fixed to
    /// two decimal places (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_PLACES);
        rounded.to_string()
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(Decimal::from(factor))
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_money_keeps_precision() {
        let bolt = Money::new(dec("0.125"), Currency::USD);
        assert_eq!(bolt.display_amount(), "0.13");
        assert_eq!(bolt.try_multiply(2).unwrap().display_amount(), "0.25");
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::from_cents(850, Currency::USD).display_amount(), "8.50");
        assert_eq!(Money::from_cents(5, Currency::USD).display_amount(), "0.05");
        assert_eq!(Money::new(dec("3"), Currency::USD).display_amount(), "3.00");
        assert_eq!(Money::from_cents(-250, Currency::EUR).display(), "\u{20ac}-2.50");
    }

    #[test]
    fn test_money_display_is_two_places_for_every_currency() {
        assert_eq!(Money::from_cents(100, Currency::JPY).display(), "\u{00a5}1.00");
        assert_eq!(Money::from_cents(850, Currency::CLP).display_amount(), "8.50");
    }

    #[test]
    fn test_money_equality_ignores_scale() {
        assert_eq!(
            Money::new(dec("1.250"), Currency::USD),
            Money::from_cents(125, Currency::USD)
        );
    }

    #[test]
    fn test_money_try_add() {
        let a = Money::from_cents(1000, Currency::USD);
        let b = Money::from_cents(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap(), Money::from_cents(1500, Currency::USD));

        let eur = Money::from_cents(1000, Currency::EUR);
        assert!(a.try_add(&eur).is_none());

        let max = Money::new(Decimal::MAX, Currency::USD);
        assert!(max.try_add(&b).is_none());
    }

    #[test]
    fn test_money_try_multiply() {
        let m = Money::from_cents(250, Currency::USD);
        assert_eq!(m.try_multiply(3).unwrap(), Money::from_cents(750, Currency::USD));
        assert!(Money::new(Decimal::MAX, Currency::USD).try_multiply(2).is_none());
    }

    #[test]
    fn test_money_try_sum() {
        let values = [Money::from_cents(750, Currency::USD), Money::from_cents(100, Currency::USD)];
        let total = Money::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(total.display_amount(), "8.50");

        let empty: [Money; 0] = [];
        assert!(Money::try_sum(empty.iter(), Currency::USD).unwrap().is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("mxn"), Some(Currency::MXN));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
