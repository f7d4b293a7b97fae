//! Write-payload validation.
//!
//! Serde already guarantees field presence and types by the time a
//! [`ProductDraft`] exists; this gate adds the semantic checks. It is pure:
//! on success the draft passes through untouched, on failure the route
//! handler must not reach the store.

use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::store::ProductDraft;

/// Validate a candidate product payload for create or update.
///
/// Every offending field is collected into a single human-readable
/// [`ApiError::Validation`] message.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), ApiError> {
    let mut problems = Vec::new();

    if draft.name.trim().is_empty() {
        problems.push("name must be a non-empty string");
    }
    if draft.price < Decimal::ZERO {
        problems.push("price must be a non-negative number");
    }
    if draft.category.trim().is_empty() {
        problems.push("category must be a non-empty string");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(problems.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Blender".to_string(),
            description: Some("500W countertop blender".to_string()),
            price: dec!(79.99),
            category: "kitchen".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn accepts_zero_price() {
        let draft = ProductDraft {
            price: Decimal::ZERO,
            ..valid_draft()
        };
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let draft = ProductDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let err = validate_draft(&draft).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_negative_price() {
        let draft = ProductDraft {
            price: dec!(-1),
            ..valid_draft()
        };
        let err = validate_draft(&draft).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn rejects_empty_category() {
        let draft = ProductDraft {
            category: String::new(),
            ..valid_draft()
        };
        let err = validate_draft(&draft).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn reports_all_offending_fields_at_once() {
        let draft = ProductDraft {
            name: String::new(),
            price: dec!(-5),
            ..valid_draft()
        };
        let message = validate_draft(&draft).unwrap_err().to_string();
        assert!(message.contains("name"));
        assert!(message.contains("price"));
    }
}
