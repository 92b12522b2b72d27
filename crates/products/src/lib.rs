//! Products domain module.
//!
//! Monetary value objects and the product catalog rules: a product belongs to
//! an existing company, carries at least one price, and at most one price per
//! currency. Read-only after creation in this version.

pub mod money;
pub mod product;
pub mod repository;
pub mod service;

pub use money::{Currency, Money};
pub use product::Product;
pub use repository::ProductRepository;
pub use service::ProductRegistrationService;
