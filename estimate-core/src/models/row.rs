use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::uom::UnitOfMeasure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRow {
    pub id: String,
    pub title: String,

    // Unit price, non-negative
    pub price: Decimal,
    // Positive; integer through stepper flows, decimal through direct entry
    pub quantity: Decimal,
    pub uom: UnitOfMeasure,
}

impl EstimateRow {
    /// Merges the patch into this row. `None` fields are left as-is; the id
    /// never changes.
    pub fn apply(&mut self, patch: RowPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(uom) = patch.uom {
            self.uom = uom;
        }
    }
}

/// For creating new rows (no id until the store assigns one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEstimateRow {
    pub title: String,
    pub price: Decimal,
    pub quantity: Decimal,
    pub uom: UnitOfMeasure,
}

impl NewEstimateRow {
    pub fn with_id(
        self,
        id: impl Into<String>,
    ) -> EstimateRow {
        EstimateRow {
            id: id.into(),
            title: self.title,
            price: self.price,
            quantity: self.quantity,
            uom: self.uom,
        }
    }
}

/// Field-level update for an existing row; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPatch {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub uom: Option<UnitOfMeasure>,
}

/// A full-row save is a patch of every mutable field.
impl From<EstimateRow> for RowPatch {
    fn from(row: EstimateRow) -> Self {
        Self {
            title: Some(row.title),
            price: Some(row.price),
            quantity: Some(row.quantity),
            uom: Some(row.uom),
        }
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

    #[test]
    fn apply_merges_only_present_fields() {
        let mut row = lumber();

        row.apply(RowPatch {
            price: Some(dec!(14.00)),
            ..RowPatch::default()
        });

        assert_eq!(row.price, dec!(14.00));
        assert_eq!(row.title, "Lumber");
        assert_eq!(row.quantity, dec!(4));
        assert_eq!(row.uom, UnitOfMeasure::Each);
    }

    #[test]
    fn apply_with_empty_patch_changes_nothing() {
        let mut row = lumber();

        row.apply(RowPatch::default());

        assert_eq!(row, lumber());
    }

    #[test]
    fn apply_never_touches_the_id() {
        let mut row = lumber();

        row.apply(RowPatch {
            title: Some("Plywood".to_string()),
            price: Some(dec!(32.00)),
            quantity: Some(dec!(2)),
            uom: Some(UnitOfMeasure::SquareFoot),
        });

        assert_eq!(row.id, "item-lumber");
        assert_eq!(row.title, "Plywood");
    }

    #[test]
    fn with_id_carries_all_fields() {
        let new_row = NewEstimateRow {
            title: "Nails".to_string(),
            price: dec!(3.00),
            quantity: dec!(10),
            uom: UnitOfMeasure::Box,
        };

        let row = new_row.with_id("item-nails");

        assert_eq!(row.id, "item-nails");
        assert_eq!(row.title, "Nails");
        assert_eq!(row.price, dec!(3.00));
        assert_eq!(row.quantity, dec!(10));
        assert_eq!(row.uom, UnitOfMeasure::Box);
    }

    #[test]
    fn patch_from_row_covers_every_mutable_field() {
        let patch = RowPatch::from(lumber());

        assert_eq!(patch.title, Some("Lumber".to_string()));
        assert_eq!(patch.price, Some(dec!(12.50)));
        assert_eq!(patch.quantity, Some(dec!(4)));
        assert_eq!(patch.uom, Some(UnitOfMeasure::Each));
    }
}
