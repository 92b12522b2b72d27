//! Inventory use cases.

use std::sync::Arc;

use tracing::{info, instrument};

use invero_companies::CompanyRepository;
use invero_core::DomainResult;
use invero_inventory::{InventoryItem, InventoryManagementService, InventoryRepository};
use invero_products::ProductRepository;

/// Add stock for a company/product pair and persist the resulting record.
pub struct AddInventoryUseCase {
    inventory: Arc<dyn InventoryRepository>,
    service: InventoryManagementService,
}

impl AddInventoryUseCase {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        products: Arc<dyn ProductRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            inventory: inventory.clone(),
            service: InventoryManagementService::new(companies, products, inventory),
        }
    }

    #[instrument(skip(self), err)]
    pub fn execute(
        &self,
        company_nit: &str,
        product_code: &str,
        quantity: i64,
    ) -> DomainResult<InventoryItem> {
        let item = self.service.add(company_nit, product_code, quantity)?;
        let saved = self.inventory.save(item)?;
        info!(
            company_nit = saved.company_nit(),
            product_code = saved.product_code(),
            quantity = saved.quantity(),
            "inventory increased"
        );
        Ok(saved)
    }
}

/// Remove stock for a company/product pair and persist the resulting record.
pub struct RemoveInventoryUseCase {
    inventory: Arc<dyn InventoryRepository>,
    service: InventoryManagementService,
}

impl RemoveInventoryUseCase {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        products: Arc<dyn ProductRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            inventory: inventory.clone(),
            service: InventoryManagementService::new(companies, products, inventory),
        }
    }

    #[instrument(skip(self), err)]
    pub fn execute(
        &self,
        company_nit: &str,
        product_code: &str,
        quantity: i64,
    ) -> DomainResult<InventoryItem> {
        let item = self.service.remove(company_nit, product_code, quantity)?;
        let saved = self.inventory.save(item)?;
        info!(
            company_nit = saved.company_nit(),
            product_code = saved.product_code(),
            quantity = saved.quantity(),
            "inventory decreased"
        );
        Ok(saved)
    }
}
