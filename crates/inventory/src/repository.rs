//! Port: persistence capabilities the inventory domain requires.

use invero_core::DomainResult;

use crate::item::InventoryItem;

/// Capability contract implemented by a persistence adapter.
///
/// `save` upserts keyed by the `(company_nit, product_code)` pair: insert if
/// absent, replace if present. The domain holds no lock between a `find` and
/// the following `save`, so an adapter must make that sequence atomic per
/// operation (a transaction or an atomic upsert/compare-and-swap) or document
/// the lost-update risk under concurrent adjustments of the same pair.
pub trait InventoryRepository: Send + Sync {
    /// Look up the stock record for a company/product pair.
    fn find(&self, company_nit: &str, product_code: &str) -> DomainResult<Option<InventoryItem>>;

    /// Persist the record, returning the stored state.
    fn save(&self, item: InventoryItem) -> DomainResult<InventoryItem>;
}
