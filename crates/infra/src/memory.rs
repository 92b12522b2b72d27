//! In-memory repository adapters.
//!
//! Reference implementations of the repository ports over `Mutex<HashMap>`.
//! Each call locks the map for its full duration, so every `save` is atomic
//! with respect to other calls on the same repository. The read-modify-write
//! gap *between* a `find` and the following `save` of one logical operation
//! is not closed here — under concurrent adjustments of the same key, last
//! write wins. Adapters over real storage close that gap with a transaction
//! or an atomic upsert.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use invero_core::DomainResult;
use invero_companies::{Company, CompanyRepository};
use invero_inventory::{InventoryItem, InventoryRepository};
use invero_products::{Product, ProductRepository};

type PairKey = (String, String);

/// Companies keyed by NIT. `save` upserts; duplicate-insert detection is left
/// to adapters with real uniqueness constraints.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCompanyRepository {
    records: Arc<Mutex<HashMap<String, Company>>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn exists(&self, nit: &str) -> DomainResult<bool> {
        Ok(self.records.lock().unwrap().contains_key(nit))
    }

    fn find(&self, nit: &str) -> DomainResult<Option<Company>> {
        Ok(self.records.lock().unwrap().get(nit).cloned())
    }

    fn save(&self, company: Company) -> DomainResult<Company> {
        self.records
            .lock()
            .unwrap()
            .insert(company.nit().to_string(), company.clone());
        Ok(company)
    }
}

/// Products keyed by `(company_nit, code)`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    records: Arc<Mutex<HashMap<PairKey, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn exists(&self, company_nit: &str, code: &str) -> DomainResult<bool> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .contains_key(&(company_nit.to_string(), code.to_string())))
    }

    fn save(&self, product: Product) -> DomainResult<Product> {
        self.records.lock().unwrap().insert(
            (product.company_nit().to_string(), product.code().to_string()),
            product.clone(),
        );
        Ok(product)
    }
}

/// Stock records keyed by `(company_nit, product_code)`; `save` upserts.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInventoryRepository {
    records: Arc<Mutex<HashMap<PairKey, InventoryItem>>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn find(&self, company_nit: &str, product_code: &str) -> DomainResult<Option<InventoryItem>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&(company_nit.to_string(), product_code.to_string()))
            .cloned())
    }

    fn save(&self, item: InventoryItem) -> DomainResult<InventoryItem> {
        self.records.lock().unwrap().insert(
            (item.company_nit().to_string(), item.product_code().to_string()),
            item.clone(),
        );
        Ok(item)
    }
}
