//! Port: persistence capabilities the company domain requires.

use invero_core::DomainResult;

use crate::company::Company;

/// Capability contract implemented by a persistence adapter (SQL table,
/// in-memory map, remote service). The domain never depends on a concrete
/// adapter.
///
/// `save` upserts by NIT. Adapters that can distinguish a duplicate insert
/// (e.g. through a unique constraint) surface it as
/// [`DomainError::Conflict`](invero_core::DomainError::Conflict); the domain
/// layer performs no duplicate check of its own.
pub trait CompanyRepository: Send + Sync {
    /// Whether a company with the given NIT exists.
    fn exists(&self, nit: &str) -> DomainResult<bool>;

    /// Look up a company by NIT.
    fn find(&self, nit: &str) -> DomainResult<Option<Company>>;

    /// Persist the company, returning the stored record.
    fn save(&self, company: Company) -> DomainResult<Company>;
}
