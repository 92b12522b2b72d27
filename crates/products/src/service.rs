//! Domain service: product registration.

use std::sync::Arc;

use invero_core::{DomainError, DomainResult};
use invero_companies::CompanyRepository;

use crate::money::{Currency, Money};
use crate::product::Product;

/// Orchestrates product creation across the product entity and the company
/// port, enforcing the one rule the entity cannot check on its own: a product
/// must belong to an existing company.
pub struct ProductRegistrationService {
    companies: Arc<dyn CompanyRepository>,
}

impl ProductRegistrationService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// Register a new product for a company.
    ///
    /// Verifies the company exists, then constructs the product (which runs
    /// the intrinsic validation). Returns the validated, not-yet-persisted
    /// product; persistence is the caller's step.
    pub fn register(
        &self,
        code: &str,
        name: &str,
        features: Vec<String>,
        prices: Vec<(Currency, Money)>,
        company_nit: &str,
    ) -> DomainResult<Product> {
        if !self.companies.exists(company_nit.trim())? {
            return Err(DomainError::invalid_product(format!(
                "company with NIT '{}' does not exist",
                company_nit.trim()
            )));
        }
        Product::new(code, name, features, prices, company_nit)
    }
}
