//! Domain service: company registration.

use invero_core::DomainResult;

use crate::company::Company;

/// Single entry point for company creation.
///
/// Registration policies that span more than the entity itself (e.g. NIT
/// verification against an external registry) belong here, not in `Company`.
/// Duplicate-NIT detection is a persistence concern surfaced at save time and
/// is deliberately not checked here.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompanyRegistrationService;

impl CompanyRegistrationService {
    pub fn new() -> Self {
        Self
    }

    /// Register a new company.
    ///
    /// Construction performs the intrinsic validation; the returned company
    /// is valid but not yet persisted.
    pub fn register(
        &self,
        nit: &str,
        name: &str,
        address: &str,
        phone: &str,
    ) -> DomainResult<Company> {
        Company::new(nit, name, address, phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invero_core::DomainError;

    #[test]
    fn register_returns_validated_company() {
        let service = CompanyRegistrationService::new();
        let company = service
            .register("900123456", " Acme ", "Main St", "+5712345")
            .unwrap();
        assert_eq!(company.name(), "Acme");
    }

    #[test]
    fn register_propagates_entity_errors_unchanged() {
        let service = CompanyRegistrationService::new();
        let err = service
            .register("900123456", "Acme", "Main St", "not-a-phone")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCompany(_)));
    }
}
