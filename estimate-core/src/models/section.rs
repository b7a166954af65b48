use serde::{Deserialize, Serialize};

use super::row::EstimateRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSection {
    pub id: String,
    pub title: String,

    // Insertion order is display order
    pub rows: Vec<EstimateRow>,
}

impl EstimateSection {
    /// Creates an empty section.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Merges the patch into this section. The id and the row list never
    /// change through a section patch; rows are edited via item operations.
    pub fn apply(&mut self, patch: SectionPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Field-level update for an existing section; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPatch {
    pub title: Option<String>,
}

impl SectionPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
