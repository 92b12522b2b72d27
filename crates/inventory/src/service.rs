//! Domain service: inventory management.

use std::sync::Arc;

use invero_core::{DomainError, DomainResult};
use invero_companies::CompanyRepository;
use invero_products::ProductRepository;

use crate::item::InventoryItem;
use crate::repository::InventoryRepository;

/// Orchestrates stock adjustments across three ports: the company and product
/// must both exist before any quantity moves, and the resulting record is
/// returned unsaved — persisting it is the caller's step.
pub struct InventoryManagementService {
    companies: Arc<dyn CompanyRepository>,
    products: Arc<dyn ProductRepository>,
    inventory: Arc<dyn InventoryRepository>,
}

impl InventoryManagementService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        products: Arc<dyn ProductRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            companies,
            products,
            inventory,
        }
    }

    fn ensure_pair_exists(&self, company_nit: &str, product_code: &str) -> DomainResult<()> {
        if !self.companies.exists(company_nit)? {
            return Err(DomainError::invalid_inventory(format!(
                "company with NIT '{company_nit}' does not exist"
            )));
        }
        if !self.products.exists(company_nit, product_code)? {
            return Err(DomainError::invalid_inventory(format!(
                "product '{product_code}' does not exist for company '{company_nit}'"
            )));
        }
        Ok(())
    }

    fn positive_delta(delta: i64) -> DomainResult<u64> {
        if delta <= 0 {
            return Err(DomainError::invalid_inventory(
                "quantity must be greater than zero",
            ));
        }
        Ok(delta as u64)
    }

    /// Add stock for a company/product pair.
    ///
    /// Creates the record with `quantity = delta` when none exists, otherwise
    /// returns a replacement with the summed quantity.
    pub fn add(
        &self,
        company_nit: &str,
        product_code: &str,
        delta: i64,
    ) -> DomainResult<InventoryItem> {
        let company_nit = company_nit.trim();
        let product_code = product_code.trim();
        self.ensure_pair_exists(company_nit, product_code)?;
        let delta = Self::positive_delta(delta)?;

        match self.inventory.find(company_nit, product_code)? {
            Some(existing) => existing.increase(delta),
            None => InventoryItem::new(company_nit, product_code, delta),
        }
    }

    /// Remove stock for a company/product pair.
    ///
    /// Fails when no record exists or when `delta` exceeds the current
    /// quantity. Draining to exactly zero is a valid result, not a deletion.
    pub fn remove(
        &self,
        company_nit: &str,
        product_code: &str,
        delta: i64,
    ) -> DomainResult<InventoryItem> {
        let company_nit = company_nit.trim();
        let product_code = product_code.trim();
        self.ensure_pair_exists(company_nit, product_code)?;
        let delta = Self::positive_delta(delta)?;

        let existing = self
            .inventory
            .find(company_nit, product_code)?
            .ok_or_else(|| {
                DomainError::invalid_inventory(format!(
                    "no inventory to remove from for product '{product_code}'"
                ))
            })?;
        existing.decrease(delta)
    }

    /// Current quantity for a pair, or `None` when no record exists.
    pub fn stock_on_hand(
        &self,
        company_nit: &str,
        product_code: &str,
    ) -> DomainResult<Option<u64>> {
        let found = self
            .inventory
            .find(company_nit.trim(), product_code.trim())?;
        Ok(found.map(|item| item.quantity()))
    }
}
