//! Unit-of-measure picker state and search filtering.

use estimate_core::UnitOfMeasure;

/// Returns the units whose code or label contains the query, matched
/// case-insensitively. A blank query returns the full set in display order.
pub fn filter_units(query: &str) -> Vec<UnitOfMeasure> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return UnitOfMeasure::all().to_vec();
    }

    UnitOfMeasure::all()
        .iter()
        .copied()
        .filter(|unit| {
            unit.as_str().to_lowercase().contains(&needle)
                || unit.label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Search-and-select state behind the unit picker sheet.
///
/// Both selecting and dismissing reset the search text so the next
/// presentation starts from the full list.
#[derive(Debug, Clone, Default)]
pub struct UomPicker {
    pub value: UnitOfMeasure,
    pub search: String,
}

impl UomPicker {
    pub fn new(value: UnitOfMeasure) -> Self {
        Self {
            value,
            search: String::new(),
        }
    }

    /// The options matching the current search text.
    pub fn options(&self) -> Vec<UnitOfMeasure> {
        filter_units(&self.search)
    }

    /// Accepts a unit and resets the search.
    pub fn select(
        &mut self,
        unit: UnitOfMeasure,
    ) {
        self.value = unit;
        self.search.clear();
    }

    /// Dismisses the sheet without changing the value; the search resets.
    pub fn dismiss(&mut self) {
        self.search.clear();
    }
}
