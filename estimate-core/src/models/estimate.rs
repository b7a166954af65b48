use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::row::EstimateRow;
use super::section::EstimateSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub title: String,

    // Insertion order is display order
    pub sections: Vec<EstimateSection>,

    pub updated_at: DateTime<Utc>,
}

impl Estimate {
    /// Creates an empty estimate stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Marks the document as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn section(
        &self,
        section_id: &str,
    ) -> Option<&EstimateSection> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_mut(
        &mut self,
        section_id: &str,
    ) -> Option<&mut EstimateSection> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    /// Looks a row up by id across every section.
    pub fn row(
        &self,
        row_id: &str,
    ) -> Option<&EstimateRow> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.id == row_id)
    }

    /// Mutable row lookup across every section.
    pub fn row_mut(
        &mut self,
        row_id: &str,
    ) -> Option<&mut EstimateRow> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.rows.iter_mut())
            .find(|r| r.id == row_id)
    }
}
