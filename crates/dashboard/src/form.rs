//! Create/edit form session.

use shelfstack_catalog::{Product, ProductDraft, ProductId, ValidationReport, validate_draft};

/// What a submission of the open form should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Add a new record.
    Create,
    /// Replace the form-editable fields of an existing record.
    Edit(ProductId),
}

/// A form in flight: its mode, the working draft, and the latest field
/// errors.
///
/// The draft is public — the front end binds inputs straight to it and calls
/// [`FormSession::validate`] (or submits) when it wants fresh errors.
#[derive(Debug, Clone)]
pub struct FormSession {
    mode: FormMode,
    pub draft: ProductDraft,
    errors: ValidationReport,
}

impl FormSession {
    /// Open a creation form with empty defaults.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft::default(),
            errors: ValidationReport::default(),
        }
    }

    /// Open an edit form pre-populated with an existing record's fields.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            draft: product.to_draft(),
            errors: ValidationReport::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Field errors from the most recent validation.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Re-validate the working draft. Returns whether it is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_valid()
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationReport) {
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelfstack_catalog::Field;

    fn product() -> Product {
        let draft = ProductDraft {
            name: "Reading Lamp".to_string(),
            description: "Warm light, adjustable arm, weighted base".to_string(),
            price: Some(39.0),
            category: "Home & Garden".to_string(),
            stock: Some(12),
            image_url: None,
            in_stock: true,
        };
        Product::create(ProductId::generate(), &draft, Utc::now()).unwrap()
    }

    #[test]
    fn create_session_starts_from_empty_defaults() {
        let session = FormSession::create();
        assert_eq!(session.mode(), FormMode::Create);
        assert_eq!(session.draft, ProductDraft::default());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn edit_session_is_pre_populated() {
        let product = product();
        let session = FormSession::edit(&product);
        assert_eq!(session.mode(), FormMode::Edit(product.id));
        assert_eq!(session.draft, product.to_draft());
    }

    #[test]
    fn validate_records_field_errors_on_the_session() {
        let mut session = FormSession::create();
        assert!(!session.validate());
        assert!(session.errors().error(Field::Name).is_some());

        session.draft = product().to_draft();
        assert!(session.validate());
        assert!(session.errors().is_empty());
    }
}
