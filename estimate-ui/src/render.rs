//! Plain-text rendering of an estimate for terminal output.

use std::fmt;

use estimate_core::Estimate;
use estimate_core::calculations::{estimate_total, line_total, section_total};

use crate::currency::format_amount;

/// Borrowing wrapper that renders an [`Estimate`] as indented text, one
/// line per row with per-section and grand totals.
pub struct EstimateView<'a>(pub &'a Estimate);

impl fmt::Display for EstimateView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let estimate = self.0;
        writeln!(f, "{}", estimate.title)?;

        for section in &estimate.sections {
            writeln!(f)?;
            writeln!(
                f,
                "{}  (${})",
                section.title,
                format_amount(section_total(section))
            )?;
            for row in &section.rows {
                writeln!(
                    f,
                    "  {:<20} ${} × {} {}  ${}",
                    row.title,
                    format_amount(row.price),
                    row.quantity,
                    row.uom.as_str(),
                    format_amount(line_total(row))
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "Total: ${}", format_amount(estimate_total(estimate)))
    }
}
