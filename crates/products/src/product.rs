use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use invero_core::{DomainError, DomainResult, Entity};

use crate::money::{Currency, Money};

/// Entity: Product, keyed by its code scoped to the owning company.
///
/// The owning company is referenced by NIT only — no live object reference —
/// and its existence is the registration service's concern, not the
/// entity's. An instance that exists is guaranteed valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: String,
    name: String,
    features: Vec<String>,
    prices: BTreeMap<Currency, Money>,
    company_nit: String,
}

fn required(value: &str, field: &str) -> DomainResult<String> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(DomainError::invalid_product(format!("{field} is required")));
    }
    Ok(normalized.to_string())
}

impl Product {
    /// Validate and construct a product.
    ///
    /// Rules, checked in order (first violation wins):
    /// - code, name and company NIT non-empty after trim
    /// - every feature non-empty after trim (the list itself may be empty)
    /// - at least one price, and at most one price per currency
    ///
    /// Price amounts are already guaranteed positive by [`Money`]'s own
    /// construction.
    pub fn new(
        code: &str,
        name: &str,
        features: Vec<String>,
        prices: Vec<(Currency, Money)>,
        company_nit: &str,
    ) -> DomainResult<Self> {
        let code = required(code, "code")?;
        let name = required(name, "name")?;
        let features = features
            .iter()
            .map(|feature| required(feature, "feature"))
            .collect::<DomainResult<Vec<_>>>()?;

        if prices.is_empty() {
            return Err(DomainError::invalid_price("at least one price is required"));
        }
        let mut price_map = BTreeMap::new();
        for (currency, money) in prices {
            if price_map.insert(currency, money).is_some() {
                return Err(DomainError::invalid_price(format!(
                    "duplicate price for currency {currency}"
                )));
            }
        }

        let company_nit = required(company_nit, "company NIT")?;

        Ok(Self {
            code,
            name,
            features,
            prices: price_map,
            company_nit,
        })
    }

    /// Product code, unique within the owning company.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn prices(&self) -> &BTreeMap<Currency, Money> {
        &self.prices
    }

    /// NIT of the owning company (relation by identifier only).
    pub fn company_nit(&self) -> &str {
        &self.company_nit
    }

    /// Price in the given currency, if one is defined.
    pub fn price_for(&self, currency: Currency) -> Option<Money> {
        self.prices.get(&currency).copied()
    }
}

impl Entity for Product {
    /// Product code; identity is scoped by `company_nit`.
    type Id = String;

    fn id(&self) -> &String {
        &self.code
    }
}
