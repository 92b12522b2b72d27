//! Product use cases.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, instrument};

use invero_companies::CompanyRepository;
use invero_core::DomainResult;
use invero_products::{Currency, Money, Product, ProductRegistrationService, ProductRepository};

/// Register a new product for an existing company and persist it.
///
/// The wire price shape is a map from currency code to decimal amount; each
/// entry is converted into a [`Money`] value before the domain service runs.
/// Codes that normalize to the same currency (e.g. `"usd"` and `"USD"`)
/// surface as a duplicate-price error from entity construction.
pub struct RegisterProductUseCase {
    products: Arc<dyn ProductRepository>,
    registration: ProductRegistrationService,
}

impl RegisterProductUseCase {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            products,
            registration: ProductRegistrationService::new(companies),
        }
    }

    #[instrument(skip(self, features, prices), err)]
    pub fn execute(
        &self,
        code: &str,
        name: &str,
        features: Vec<String>,
        prices: &BTreeMap<String, f64>,
        company_nit: &str,
    ) -> DomainResult<Product> {
        let prices = prices
            .iter()
            .map(|(currency_code, amount)| {
                let currency = Currency::from_code(currency_code)?;
                let money = Money::from_decimal(*amount, currency)?;
                Ok((currency, money))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let product = self
            .registration
            .register(code, name, features, prices, company_nit)?;
        let saved = self.products.save(product)?;
        info!(
            code = saved.code(),
            company_nit = saved.company_nit(),
            "product registered"
        );
        Ok(saved)
    }
}
