//! Capture-form state for adding and editing rows and sections.
//!
//! Forms hold raw text exactly as typed and only produce typed payloads
//! through [`ItemForm::validate`] / [`SectionForm::validate`], following
//! the required-field rules of the capture UI: a title is always required,
//! and an item additionally requires a price. Numeric text is normalized
//! leniently at validation time (see [`crate::utils`]), never stored raw in
//! the document.

use estimate_core::{EstimateRow, EstimateSection, NewEstimateRow, UnitOfMeasure};
use rust_decimal::Decimal;

use crate::utils::parse_amount_or_zero;

/// Form state for adding or editing a line item.
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub title: String,
    pub price: String,
    pub quantity: Decimal,
    pub uom: UnitOfMeasure,

    // Validation errors
    pub errors: Vec<String>,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    /// A blank form: quantity 1, unit Each.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            quantity: Decimal::ONE,
            uom: UnitOfMeasure::default(),
            errors: Vec::new(),
        }
    }

    /// Prefills the form from an existing row for editing.
    pub fn for_row(row: &EstimateRow) -> Self {
        Self {
            title: row.title.clone(),
            price: row.price.to_string(),
            quantity: row.quantity,
            uom: row.uom,
            errors: Vec::new(),
        }
    }

    /// Stepper increment.
    pub fn increment_quantity(&mut self) {
        self.quantity += Decimal::ONE;
    }

    /// Stepper decrement, floored at one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = (self.quantity - Decimal::ONE).max(Decimal::ONE);
    }

    /// Direct numeric entry: a positive decimal is accepted, an empty field
    /// resets to one, anything else leaves the current value alone.
    pub fn set_quantity_text(
        &mut self,
        text: &str,
    ) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.quantity = Decimal::ONE;
            return;
        }
        if let Ok(parsed) = trimmed.parse::<Decimal>() {
            if parsed > Decimal::ZERO {
                self.quantity = parsed;
            }
        }
    }

    /// Mirrors the Add button's enabled state: both a title and a price
    /// must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.price.trim().is_empty()
    }

    /// Parse form into a row payload, returning errors if invalid
    pub fn validate(&mut self) -> Result<NewEstimateRow, ()> {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors.push("Title is required".to_string());
        }
        if self.price.trim().is_empty() {
            self.errors.push("Price is required".to_string());
        }

        if !self.errors.is_empty() {
            return Err(());
        }

        Ok(NewEstimateRow {
            title: self.title.clone(),
            price: parse_amount_or_zero(&self.price),
            quantity: self.quantity,
            uom: self.uom,
        })
    }
}

/// Form state for adding or renaming a section.
#[derive(Debug, Clone, Default)]
pub struct SectionForm {
    pub title: String,

    // Validation errors
    pub errors: Vec<String>,
}

impl SectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form from an existing section for renaming.
    pub fn for_section(section: &EstimateSection) -> Self {
        Self {
            title: section.title.clone(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Parse form into the section title, returning errors if invalid
    pub fn validate(&mut self) -> Result<String, ()> {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors.push("Title is required".to_string());
            return Err(());
        }

        Ok(self.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn lumber() -> EstimateRow {
        EstimateRow {
            id: "item-lumber".to_string(),
            title: "Lumber".to_string(),
            price: dec!(12.50),
            quantity: dec!(4),
            uom: UnitOfMeasure::Each,
        }
    }

    // =========================================================================
    // ItemForm tests
    // =========================================================================

    #[test]
    fn new_item_form_defaults_to_one_each() {
        let form = ItemForm::new();

        assert_eq!(form.quantity, Decimal::ONE);
        assert_eq!(form.uom, UnitOfMeasure::Each);
        assert!(form.title.is_empty());
        assert!(form.price.is_empty());
    }

    #[test]
    fn for_row_prefills_every_field() {
        let form = ItemForm::for_row(&lumber());

        assert_eq!(form.title, "Lumber");
        assert_eq!(form.price, "12.50");
        assert_eq!(form.quantity, dec!(4));
        assert_eq!(form.uom, UnitOfMeasure::Each);
    }

    #[test]
    fn increment_adds_one() {
        let mut form = ItemForm::new();

        form.increment_quantity();
        form.increment_quantity();

        assert_eq!(form.quantity, dec!(3));
    }

    #[test]
    fn decrement_floors_at_one() {
        let mut form = ItemForm::new();
        form.quantity = dec!(2);

        form.decrement_quantity();
        form.decrement_quantity();
        form.decrement_quantity();

        assert_eq!(form.quantity, Decimal::ONE);
    }

    #[test]
    fn quantity_text_accepts_positive_decimals() {
        let mut form = ItemForm::new();

        form.set_quantity_text("2.5");

        assert_eq!(form.quantity, dec!(2.5));
    }

    #[test]
    fn quantity_text_empty_resets_to_one() {
        let mut form = ItemForm::new();
        form.quantity = dec!(7);

        form.set_quantity_text("");

        assert_eq!(form.quantity, Decimal::ONE);
    }

    #[test]
    fn quantity_text_ignores_junk_and_non_positive_input() {
        let mut form = ItemForm::new();
        form.quantity = dec!(7);

        form.set_quantity_text("many");
        form.set_quantity_text("0");
        form.set_quantity_text("-2");

        assert_eq!(form.quantity, dec!(7));
    }

    #[test]
    fn is_valid_requires_title_and_price() {
        let mut form = ItemForm::new();
        assert!(!form.is_valid());

        form.title = "Nails".to_string();
        assert!(!form.is_valid());

        form.price = "3.00".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn is_valid_rejects_whitespace_only_fields() {
        let mut form = ItemForm::new();
        form.title = "   ".to_string();
        form.price = "3.00".to_string();

        assert!(!form.is_valid());
    }

    #[test]
    fn validate_produces_row_payload() {
        let mut form = ItemForm::new();
        form.title = "Nails".to_string();
        form.price = "3.00".to_string();
        form.set_quantity_text("10");

        let payload = form.validate().unwrap();

        assert_eq!(payload.title, "Nails");
        assert_eq!(payload.price, dec!(3.00));
        assert_eq!(payload.quantity, dec!(10));
        assert_eq!(payload.uom, UnitOfMeasure::Each);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn validate_collects_required_field_errors() {
        let mut form = ItemForm::new();

        let result = form.validate();

        assert_eq!(result, Err(()));
        assert_eq!(
            form.errors,
            vec!["Title is required".to_string(), "Price is required".to_string()]
        );
    }

    #[test]
    fn validate_normalizes_junk_price_to_zero() {
        let mut form = ItemForm::new();
        form.title = "Nails".to_string();
        form.price = "three dollars".to_string();

        let payload = form.validate().unwrap();

        assert_eq!(payload.price, Decimal::ZERO);
    }

    #[test]
    fn validate_clears_stale_errors_on_success() {
        let mut form = ItemForm::new();
        assert_eq!(form.validate(), Err(()));

        form.title = "Nails".to_string();
        form.price = "3.00".to_string();
        form.validate().unwrap();

        assert!(form.errors.is_empty());
    }

    // =========================================================================
    // SectionForm tests
    // =========================================================================

    #[test]
    fn section_form_requires_title() {
        let mut form = SectionForm::new();

        let result = form.validate();

        assert_eq!(result, Err(()));
        assert_eq!(form.errors, vec!["Title is required".to_string()]);
    }

    #[test]
    fn section_form_validates_to_title() {
        let mut form = SectionForm::new();
        form.title = "Labor".to_string();

        assert_eq!(form.validate(), Ok("Labor".to_string()));
        assert!(form.is_valid());
    }

    #[test]
    fn for_section_prefills_title() {
        let section = EstimateSection::new("section-labor", "Labor");

        let form = SectionForm::for_section(&section);

        assert_eq!(form.title, "Labor");
    }
}
