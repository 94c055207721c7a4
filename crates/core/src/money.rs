//! Monetary amounts.

use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Non-negative amount in the menu's currency (currency symbol is a
/// presentation concern and lives in the checkout config).
///
/// Displays with exactly two decimal places: `Money::from_cents(550)` prints `5.50`.
///
/// Unit amounts are capped at [`Money::MAX_AMOUNT`], which keeps every cart
/// total (quantity is a `u32`) far below the decimal's range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Largest accepted unit amount (one billion).
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Validate and wrap a decimal amount.
    pub fn try_new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!(
                "amount must not be negative (got {amount})"
            )));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(DomainError::validation(format!(
                "amount must not exceed {} (got {amount})",
                Self::MAX_AMOUNT
            )));
        }
        Ok(Self(amount))
    }

    /// Build from an integer count of cents (`from_cents(2550)` == `25.50`).
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::try_new(amount).map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_cents(550).to_string(), "5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(2000).to_string(), "20.00");
    }

    #[test]
    fn deserializes_json_numbers_and_strings() {
        let from_float: Money = serde_json::from_str("5.5").unwrap();
        let from_int: Money = serde_json::from_str("12").unwrap();
        let from_text: Money = serde_json::from_str("\"5.50\"").unwrap();
        assert_eq!(from_float, Money::from_cents(550));
        assert_eq!(from_int, Money::from_cents(1200));
        assert_eq!(from_text, Money::from_cents(550));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(serde_json::from_str::<Money>("-1.0").is_err());
        let err = Money::try_new(Decimal::new(-100, 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn amounts_above_the_cap_are_rejected() {
        assert!(serde_json::from_str::<Money>("\"79228162514264337593543950335\"").is_err());
        assert!(serde_json::from_str::<Money>("1000000000.01").is_err());
        let err = Money::try_new(Decimal::new(1_000_000_001, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            Money::try_new(Money::MAX_AMOUNT).unwrap().amount(),
            Decimal::new(1_000_000_000, 0)
        );
    }

    #[test]
    fn largest_line_total_stays_representable() {
        let max = Money::try_new(Money::MAX_AMOUNT).unwrap();
        let line = max * u32::MAX;
        assert_eq!(line.amount(), Decimal::from(u32::MAX) * Money::MAX_AMOUNT);
    }

    #[test]
    fn multiplication_and_sum() {
        let lines = [Money::from_cents(1000) * 2, Money::from_cents(550) * 1];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total, Money::from_cents(2550));
        assert_eq!(total.to_string(), "25.50");
    }
}
