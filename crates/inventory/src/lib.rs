//! Inventory domain module.
//!
//! Stock levels per `(company NIT, product code)` pair: one record per pair,
//! quantity never negative, adjustments expressed as constructing a new
//! validated record. Cross-entity existence checks live in the management
//! service, which reaches persistence only through the repository ports.

pub mod item;
pub mod repository;
pub mod service;

pub use item::InventoryItem;
pub use repository::InventoryRepository;
pub use service::InventoryManagementService;
