//! Infrastructure adapters for the domain's repository ports.
//!
//! Only the in-memory reference adapters live here; a SQL-backed adapter
//! would implement the same traits behind a transaction per operation.

pub mod memory;

pub use memory::{
    InMemoryCompanyRepository, InMemoryInventoryRepository, InMemoryProductRepository,
};
