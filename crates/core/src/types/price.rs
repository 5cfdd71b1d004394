//! Type-safe price representation using decimal arithmetic.
//!
//! Catalogue prices travel as plain JSON numbers (`139.9`), so [`Price`]
//! serializes through `rust_decimal`'s float adapter while doing all
//! arithmetic in `Decimal`.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price in the store currency (BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Multiply by a quantity, e.g. to get a line subtotal.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display using Brazilian currency conventions (`R$ 1.234,56`).
    #[must_use]
    pub fn format_brl(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.2}", rounded.abs());
        let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        format!("{sign}R$ {},{cents}", group_thousands(units))
    }
}

/// Insert `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
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

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(Price::from_cents(13990).format_brl(), "R$ 139,90");
        assert_eq!(Price::from_cents(5).format_brl(), "R$ 0,05");
        assert_eq!(Price::from_cents(123_456).format_brl(), "R$ 1.234,56");
        assert_eq!(Price::from_cents(100_000_000).format_brl(), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_brl_rounds_to_cents() {
        let price = Price::new(Decimal::new(19_995, 3));
        assert_eq!(price.format_brl(), "R$ 20,00");
    }

    #[test]
    fn test_times_and_sum() {
        let line = Price::from_cents(13990).times(3);
        assert_eq!(line, Price::from_cents(41970));

        let total: Price = [Price::from_cents(100), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(350));
    }

    #[test]
    fn test_price_json_is_a_number() {
        let price: Price = serde_json::from_str("139.9").unwrap();
        assert_eq!(price, Price::from_cents(13990));
        assert_eq!(serde_json::to_string(&price).unwrap(), "139.9");
    }
}
