//! Line, section, and estimate totals.
//!
//! All three functions are pure and order-independent, and they keep exact
//! [`Decimal`] precision. Rounding to two decimal places for display is a
//! presentation concern and happens in the formatting layer, not here.

use rust_decimal::Decimal;

use crate::models::{Estimate, EstimateRow, EstimateSection};

/// Computes a row's line total: unit price × quantity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::line_total;
/// use estimate_core::{EstimateRow, UnitOfMeasure};
///
/// let row = EstimateRow {
///     id: "item-lumber".to_string(),
///     title: "Lumber".to_string(),
///     price: dec!(12.50),
///     quantity: dec!(4),
///     uom: UnitOfMeasure::Each,
/// };
///
/// assert_eq!(line_total(&row), dec!(50.00));
/// ```
pub fn line_total(row: &EstimateRow) -> Decimal {
    row.price * row.quantity
}

/// Sums the line totals of every row in a section.
///
/// An empty section totals to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use estimate_core::calculations::section_total;
/// use estimate_core::EstimateSection;
///
/// let empty = EstimateSection::new("section-labor", "Labor");
///
/// assert_eq!(section_total(&empty), Decimal::ZERO);
/// ```
pub fn section_total(section: &EstimateSection) -> Decimal {
    section.rows.iter().map(line_total).sum()
}

/// Sums the section totals of every section in the estimate.
///
/// An estimate with no sections totals to zero.
pub fn estimate_total(estimate: &Estimate) -> Decimal {
    estimate.sections.iter().map(section_total).sum()
}
