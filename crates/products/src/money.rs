//! Monetary value objects: `Currency` and `Money`.

use serde::{Deserialize, Serialize};

use invero_core::{DomainError, DomainResult, ValueObject};

/// Supported currency codes. Closed set; any other code is rejected at parse
/// time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Cop,
}

impl Currency {
    /// Parse a currency code, accepting surrounding whitespace and any case.
    pub fn from_code(code: &str) -> DomainResult<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "COP" => Ok(Self::Cop),
            other => Err(DomainError::invalid_price(format!(
                "unsupported currency code: '{other}'"
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Cop => "COP",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl ValueObject for Currency {}

/// A strictly positive amount of a single currency.
///
/// The amount is stored in minor units (cents) to keep equality exact; two
/// `Money` values are equal iff amount and currency match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount_minor: i64,
    currency: Currency,
}

impl Money {
    /// Construct from minor units (cents). Fails when the amount is not
    /// strictly positive.
    pub fn new(amount_minor: i64, currency: Currency) -> DomainResult<Self> {
        if amount_minor <= 0 {
            return Err(DomainError::invalid_price(
                "amount must be greater than zero",
            ));
        }
        Ok(Self {
            amount_minor,
            currency,
        })
    }

    /// Construct from a decimal amount, rounding half-up to cents.
    pub fn from_decimal(amount: f64, currency: Currency) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_price("invalid price amount"));
        }
        Self::new((amount * 100.0).round() as i64, currency)
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// Decimal representation, for display only.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / 100.0
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add another amount of the same currency.
    pub fn add(&self, other: Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::invalid_price(
                "cannot add amounts in different currencies",
            ));
        }
        let amount_minor = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| DomainError::invalid_price("amount overflow"))?;
        Money::new(amount_minor, self.currency)
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_parsing_is_case_and_whitespace_insensitive() {
        assert_eq!(Currency::from_code(" usd ").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_code("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_code("cop").unwrap(), Currency::Cop);
    }

    #[test]
    fn currency_set_is_closed() {
        let err = Currency::from_code("GBP").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrice(_)));
    }

    #[test]
    fn money_rejects_non_positive_amounts() {
        assert!(Money::new(0, Currency::Usd).is_err());
        assert!(Money::new(-100, Currency::Usd).is_err());
        assert!(Money::from_decimal(0.0, Currency::Usd).is_err());
        assert!(Money::from_decimal(-9.99, Currency::Usd).is_err());
        assert!(Money::from_decimal(f64::NAN, Currency::Usd).is_err());
    }

    #[test]
    fn from_decimal_rounds_half_up_to_cents() {
        // 10.125 is exactly representable in binary, so the .5 tie is real.
        assert_eq!(
            Money::from_decimal(10.125, Currency::Usd).unwrap().amount_minor(),
            1013
        );
        assert_eq!(
            Money::from_decimal(10.12, Currency::Usd).unwrap().amount_minor(),
            1012
        );
        assert_eq!(Money::from_decimal(10.0, Currency::Usd).unwrap().to_decimal(), 10.0);
    }

    #[test]
    fn equality_is_exact_on_amount_and_currency() {
        let a = Money::new(1000, Currency::Usd).unwrap();
        let b = Money::from_decimal(10.0, Currency::Usd).unwrap();
        let c = Money::new(1000, Currency::Eur).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn add_requires_matching_currency() {
        let usd = Money::new(1000, Currency::Usd).unwrap();
        let eur = Money::new(500, Currency::Eur).unwrap();
        assert_eq!(usd.add(usd).unwrap().amount_minor(), 2000);
        assert!(matches!(usd.add(eur), Err(DomainError::InvalidPrice(_))));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction succeeds iff the minor amount is
            /// strictly positive.
            #[test]
            fn positive_amount_is_the_only_gate(amount in any::<i64>()) {
                let result = Money::new(amount, Currency::Cop);
                prop_assert_eq!(result.is_ok(), amount > 0);
            }

            /// Property: same-currency addition is commutative.
            #[test]
            fn addition_commutes(a in 1i64..1_000_000, b in 1i64..1_000_000) {
                let left = Money::new(a, Currency::Usd)?.add(Money::new(b, Currency::Usd)?)?;
                let right = Money::new(b, Currency::Usd)?.add(Money::new(a, Currency::Usd)?)?;
                prop_assert_eq!(left, right);
            }
        }
    }
}
