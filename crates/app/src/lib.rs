//! Application use cases.
//!
//! Thin orchestrators between the transport layer and the domain: each
//! converts already-parsed primitive input into domain types, delegates
//! cross-entity validation to the matching domain service, persists through
//! the matching repository port, and returns the persisted entity. No
//! business rule lives here, and domain errors pass through unmodified.

pub mod company;
pub mod inventory;
pub mod product;

pub use company::{RegisterCompanyUseCase, UpdateCompanyUseCase};
pub use inventory::{AddInventoryUseCase, RemoveInventoryUseCase};
pub use product::RegisterProductUseCase;
