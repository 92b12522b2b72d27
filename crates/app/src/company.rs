//! Company use cases.

use std::sync::Arc;

use tracing::{info, instrument};

use invero_companies::{Company, CompanyRegistrationService, CompanyRepository};
use invero_core::{DomainError, DomainResult};

/// Register a new company and persist it.
pub struct RegisterCompanyUseCase {
    companies: Arc<dyn CompanyRepository>,
    registration: CompanyRegistrationService,
}

impl RegisterCompanyUseCase {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self {
            companies,
            registration: CompanyRegistrationService::new(),
        }
    }

    #[instrument(skip(self), err)]
    pub fn execute(
        &self,
        nit: &str,
        name: &str,
        address: &str,
        phone: &str,
    ) -> DomainResult<Company> {
        let company = self.registration.register(nit, name, address, phone)?;
        let saved = self.companies.save(company)?;
        info!(nit = saved.nit(), "company registered");
        Ok(saved)
    }
}

/// Replace a company's record, field by field where provided.
///
/// Omitted fields keep their stored value; the merged record goes through the
/// same construction-time validation as a registration.
pub struct UpdateCompanyUseCase {
    companies: Arc<dyn CompanyRepository>,
}

impl UpdateCompanyUseCase {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    #[instrument(skip(self), err)]
    pub fn execute(
        &self,
        nit: &str,
        name: Option<&str>,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> DomainResult<Company> {
        let current = self
            .companies
            .find(nit.trim())?
            .ok_or_else(DomainError::not_found)?;
        let updated = current.update(
            name.unwrap_or_else(|| current.name()),
            address.unwrap_or_else(|| current.address()),
            phone.unwrap_or_else(|| current.phone()),
        )?;
        let saved = self.companies.save(updated)?;
        info!(nit = saved.nit(), "company updated");
        Ok(saved)
    }
}
