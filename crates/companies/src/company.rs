use serde::{Deserialize, Serialize};

use invero_core::{DomainError, DomainResult, Entity};

/// Entity: Company, keyed by its NIT (the business tax identifier).
///
/// Construction is the sole validation gate: every field is trimmed and
/// checked before the instance exists, so holding a `Company` is proof the
/// record is valid. Updates go through [`Company::update`], which rebuilds the
/// instance under the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    nit: String,
    name: String,
    address: String,
    phone: String,
}

fn required(value: &str, field: &str) -> DomainResult<String> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(DomainError::invalid_company(format!("{field} is required")));
    }
    Ok(normalized.to_string())
}

impl Company {
    /// Validate and construct a company.
    ///
    /// Rules, checked in order (first violation wins):
    /// - NIT non-empty after trim, at least 5 characters
    /// - name and address non-empty after trim
    /// - phone non-empty after trim, digits and `'+'` only
    pub fn new(nit: &str, name: &str, address: &str, phone: &str) -> DomainResult<Self> {
        let nit = required(nit, "NIT")?;
        if nit.chars().count() < 5 {
            return Err(DomainError::invalid_company(
                "NIT must have at least 5 characters",
            ));
        }
        let name = required(name, "name")?;
        let address = required(address, "address")?;
        let phone = required(phone, "phone")?;
        if !phone.chars().all(|c| c.is_ascii_digit() || c == '+') {
            return Err(DomainError::invalid_company(
                "phone may contain only digits and '+'",
            ));
        }

        Ok(Self {
            nit,
            name,
            address,
            phone,
        })
    }

    pub fn nit(&self) -> &str {
        &self.nit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Produce a replacement record with the same NIT.
    ///
    /// An update replaces the whole record through the same checks as
    /// creation; there is no partial mutation.
    pub fn update(&self, name: &str, address: &str, phone: &str) -> DomainResult<Self> {
        Self::new(&self.nit, name, address, phone)
    }

    /// Produce a replacement record with a new address only.
    pub fn change_address(&self, address: &str) -> DomainResult<Self> {
        Self::new(&self.nit, &self.name, address, &self.phone)
    }
}

impl Entity for Company {
    type Id = String;

    fn id(&self) -> &String {
        &self.nit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_trims_all_fields() {
        let company = Company::new(" 900123456 ", " Acme ", " Main St ", " +5712345 ").unwrap();
        assert_eq!(company.nit(), "900123456");
        assert_eq!(company.name(), "Acme");
        assert_eq!(company.address(), "Main St");
        assert_eq!(company.phone(), "+5712345");
    }

    #[test]
    fn rejects_short_nit() {
        let err = Company::new("9001", "Acme", "Main St", "+5712345").unwrap_err();
        match err {
            DomainError::InvalidCompany(msg) => assert!(msg.contains("5 characters")),
            other => panic!("expected InvalidCompany, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_fields() {
        for (nit, name, address, phone) in [
            ("   ", "Acme", "Main St", "+5712345"),
            ("900123456", "   ", "Main St", "+5712345"),
            ("900123456", "Acme", "", "+5712345"),
            ("900123456", "Acme", "Main St", "  "),
        ] {
            let err = Company::new(nit, name, address, phone).unwrap_err();
            assert!(matches!(err, DomainError::InvalidCompany(_)), "{err:?}");
        }
    }

    #[test]
    fn rejects_phone_with_letters() {
        let err = Company::new("900123456", "Acme", "Main St", "+57 call-me").unwrap_err();
        match err {
            DomainError::InvalidCompany(msg) => assert!(msg.contains("phone")),
            other => panic!("expected InvalidCompany, got {other:?}"),
        }
    }

    #[test]
    fn update_keeps_nit_and_revalidates() {
        let company = Company::new("900123456", "Acme", "Main St", "+5712345").unwrap();
        let updated = company.update(" Acme Corp ", "Second St", "12345").unwrap();
        assert_eq!(updated.nit(), "900123456");
        assert_eq!(updated.name(), "Acme Corp");
        assert_eq!(updated.address(), "Second St");

        let err = company.update("", "Second St", "12345").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCompany(_)));
    }

    #[test]
    fn change_address_replaces_only_the_address() {
        let company = Company::new("900123456", "Acme", "Main St", "+5712345").unwrap();
        let moved = company.change_address(" Second St ").unwrap();
        assert_eq!(moved.address(), "Second St");
        assert_eq!(moved.name(), "Acme");
        assert_eq!(moved.phone(), "+5712345");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction normalizes to trimmed values, and the
            /// normalized values reconstruct to an equal company.
            #[test]
            fn construction_is_idempotent_after_trim(
                nit in "[0-9]{5,12}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}[A-Za-z0-9]",
                address in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}[A-Za-z0-9]",
                phone in "\\+?[0-9]{5,12}",
            ) {
                let padded = Company::new(
                    &format!("  {nit} "),
                    &format!(" {name}  "),
                    &format!("  {address}"),
                    &format!("{phone}  "),
                )?;
                let rebuilt = Company::new(
                    padded.nit(),
                    padded.name(),
                    padded.address(),
                    padded.phone(),
                )?;
                prop_assert_eq!(padded, rebuilt);
            }

            /// Property: any phone containing a non-digit, non-plus character
            /// is rejected.
            #[test]
            fn phone_charset_is_closed(
                phone in "[0-9+]{0,6}[a-zA-Z:#-][0-9+]{0,6}",
            ) {
                let result = Company::new("900123456", "Acme", "Main St", &phone);
                prop_assert!(matches!(result, Err(DomainError::InvalidCompany(_))));
            }
        }
    }
}
