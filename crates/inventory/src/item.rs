use serde::{Deserialize, Serialize};

use invero_core::{DomainError, DomainResult};

/// Entity: one stock record per `(company_nit, product_code)` pair.
///
/// Quantity is unsigned, so the "never negative" invariant holds by type.
/// Zero is a valid resting state — decrementing to zero keeps the record,
/// deletion is not a stock operation. Adjustments return a new instance;
/// existing ones are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    company_nit: String,
    product_code: String,
    quantity: u64,
}

fn required(value: &str, field: &str) -> DomainResult<String> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(DomainError::invalid_inventory(format!(
            "{field} is required"
        )));
    }
    Ok(normalized.to_string())
}

impl InventoryItem {
    /// Validate and construct a stock record.
    pub fn new(company_nit: &str, product_code: &str, quantity: u64) -> DomainResult<Self> {
        Ok(Self {
            company_nit: required(company_nit, "company NIT")?,
            product_code: required(product_code, "product code")?,
            quantity,
        })
    }

    pub fn company_nit(&self) -> &str {
        &self.company_nit
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// New record with `delta` more units. `delta` must be positive.
    pub fn increase(&self, delta: u64) -> DomainResult<Self> {
        if delta == 0 {
            return Err(DomainError::invalid_inventory("increment must be positive"));
        }
        let quantity = self
            .quantity
            .checked_add(delta)
            .ok_or_else(|| DomainError::invalid_inventory("quantity overflow"))?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    /// New record with `delta` fewer units. `delta` must be positive and no
    /// greater than the current quantity.
    pub fn decrease(&self, delta: u64) -> DomainResult<Self> {
        if delta == 0 {
            return Err(DomainError::invalid_inventory("decrement must be positive"));
        }
        if delta > self.quantity {
            return Err(DomainError::invalid_inventory("insufficient stock"));
        }
        Ok(Self {
            quantity: self.quantity - delta,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u64) -> InventoryItem {
        InventoryItem::new("900123456", "P1", quantity).unwrap()
    }

    #[test]
    fn construction_trims_identifiers() {
        let item = InventoryItem::new(" 900123456 ", " P1 ", 0).unwrap();
        assert_eq!(item.company_nit(), "900123456");
        assert_eq!(item.product_code(), "P1");
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn rejects_blank_identifiers() {
        assert!(InventoryItem::new("  ", "P1", 1).is_err());
        assert!(InventoryItem::new("900123456", "", 1).is_err());
    }

    #[test]
    fn increase_adds_and_rejects_zero_delta() {
        let grown = item(10).increase(5).unwrap();
        assert_eq!(grown.quantity(), 15);

        let err = item(10).increase(0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInventory(_)));
    }

    #[test]
    fn decrease_subtracts_down_to_zero_but_not_below() {
        let drained = item(10).decrease(10).unwrap();
        assert_eq!(drained.quantity(), 0);

        let err = item(10).decrease(15).unwrap_err();
        match err {
            DomainError::InvalidInventory(msg) => assert!(msg.contains("insufficient")),
            other => panic!("expected InvalidInventory, got {other:?}"),
        }

        let err = item(10).decrease(0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInventory(_)));
    }

    #[test]
    fn adjustments_leave_the_original_untouched() {
        let original = item(10);
        let _ = original.increase(5).unwrap();
        let _ = original.decrease(3).unwrap();
        assert_eq!(original.quantity(), 10);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: increase then decrease by the same delta restores
            /// the starting quantity.
            #[test]
            fn increase_then_decrease_round_trips(
                start in 0u64..1_000_000,
                delta in 1u64..1_000_000,
            ) {
                let after = item(start).increase(delta)?.decrease(delta)?;
                prop_assert_eq!(after.quantity(), start);
            }

            /// Property: decrease succeeds iff 0 < delta <= quantity.
            #[test]
            fn decrease_is_bounded_by_stock(
                start in 0u64..1_000,
                delta in 0u64..2_000,
            ) {
                let result = item(start).decrease(delta);
                prop_assert_eq!(result.is_ok(), delta > 0 && delta <= start);
            }
        }
    }
}
