//! Port: persistence capabilities the product domain requires.

use invero_core::DomainResult;

use crate::product::Product;

/// Capability contract implemented by a persistence adapter. Products are
/// keyed by `(company_nit, code)`; the code alone is not unique across
/// companies.
pub trait ProductRepository: Send + Sync {
    /// Whether a product with the given code exists for the company.
    fn exists(&self, company_nit: &str, code: &str) -> DomainResult<bool>;

    /// Persist the product, returning the stored record.
    fn save(&self, product: Product) -> DomainResult<Product>;
}
