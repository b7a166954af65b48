//! Fixed seed document used to initialize a session.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{Estimate, EstimateRow, EstimateSection, UnitOfMeasure};

/// Builds the starting estimate: one "Materials" section holding a single
/// lumber line at $12.50 × 4.
pub fn sample_estimate() -> Estimate {
    Estimate {
        title: "Workshop Remodel".to_string(),
        sections: vec![EstimateSection {
            id: "section-materials".to_string(),
            title: "Materials".to_string(),
            rows: vec![EstimateRow {
                id: "item-lumber".to_string(),
                title: "Lumber".to_string(),
                price: Decimal::new(1250, 2),
                quantity: Decimal::from(4),
                uom: UnitOfMeasure::Each,
            }],
        }],
        updated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::{estimate_total, section_total};

    #[test]
    fn seed_has_one_materials_section() {
        let estimate = sample_estimate();

        assert_eq!(estimate.title, "Workshop Remodel");
        assert_eq!(estimate.sections.len(), 1);
        assert_eq!(estimate.sections[0].id, "section-materials");
        assert_eq!(estimate.sections[0].rows.len(), 1);
    }

    #[test]
    fn seed_lumber_row_is_priced_as_expected() {
        let estimate = sample_estimate();
        let lumber = &estimate.sections[0].rows[0];

        assert_eq!(lumber.id, "item-lumber");
        assert_eq!(lumber.price, dec!(12.50));
        assert_eq!(lumber.quantity, dec!(4));
        assert_eq!(lumber.uom, UnitOfMeasure::Each);
    }

    #[test]
    fn seed_totals_to_fifty() {
        let estimate = sample_estimate();

        assert_eq!(section_total(&estimate.sections[0]), dec!(50.00));
        assert_eq!(estimate_total(&estimate), dec!(50.00));
    }
}
