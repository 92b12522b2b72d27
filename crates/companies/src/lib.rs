//! Companies domain module.
//!
//! Business rules for company registration, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Persistence is
//! reached only through the [`CompanyRepository`] port.

pub mod company;
pub mod repository;
pub mod service;

pub use company::Company;
pub use repository::CompanyRepository;
pub use service::CompanyRegistrationService;
