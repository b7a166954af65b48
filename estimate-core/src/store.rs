//! In-memory store for the estimate document and the edit selection.
//!
//! The store owns the single mutable [`Estimate`] for a session plus the
//! transient [`EditMode`] that tracks which entity, if any, is currently
//! targeted for editing. It is constructed explicitly at the application
//! root and injected into consumers; there is no ambient global instance.
//!
//! # Operation Effects
//!
//! | Operation | Document | `updated_at` | Edit mode |
//! |-----------|----------|--------------|-----------|
//! | `update_title` | replaces the title | touched | unchanged |
//! | `update_section` | merges a patch into one section | touched | cleared |
//! | `update_item` | merges a patch into one row | touched | cleared |
//! | `add_section` | appends an empty section | touched | unchanged |
//! | `add_item` | appends a row to one section | touched | unchanged |
//! | `select_item` / `select_section` | — | untouched | replaced |
//! | `clear_selection` | — | untouched | cleared |
//!
//! # Failure Contract
//!
//! Mutations that target a missing id return a typed [`StoreError`] and
//! leave both the document and the edit mode exactly as they were; an
//! operation either fully applies or fully no-ops. Readers that retain a
//! `clone()` of the document never observe later mutations.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::estimate_total;
//! use estimate_core::seed::sample_estimate;
//! use estimate_core::{EstimateStore, NewEstimateRow, UnitOfMeasure};
//!
//! let mut store = EstimateStore::new(sample_estimate());
//! assert_eq!(estimate_total(store.estimate()), dec!(50.00));
//!
//! let row_id = store
//!     .add_item(
//!         "section-materials",
//!         NewEstimateRow {
//!             title: "Nails".to_string(),
//!             price: dec!(3.00),
//!             quantity: dec!(10),
//!             uom: UnitOfMeasure::Each,
//!         },
//!     )
//!     .unwrap();
//!
//! assert!(row_id.starts_with("item-"));
//! assert_eq!(estimate_total(store.estimate()), dec!(80.00));
//! ```

use thiserror::Error;
use tracing::{debug, warn};

use crate::ids;
use crate::models::{
    Estimate, EstimateRow, EstimateSection, NewEstimateRow, RowPatch, SectionPatch,
};

/// Errors returned by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The targeted section id does not exist in the document.
    #[error("section '{0}' not found")]
    SectionNotFound(String),

    /// The targeted row id does not exist in any section.
    #[error("row '{0}' not found")]
    RowNotFound(String),
}

/// Which entity, if any, is currently targeted for editing.
///
/// The payload is a snapshot taken at selection time; the store remains the
/// source of truth for subsequent reads. At most one entity is ever being
/// edited, and selecting a new target simply replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Item(EstimateRow),
    Section(EstimateSection),
}

impl EditMode {
    /// Short name for logs and error payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Item(_) => "item",
            Self::Section(_) => "section",
        }
    }
}

/// Session-scoped holder of the estimate document and edit selection.
#[derive(Debug, Clone)]
pub struct EstimateStore {
    estimate: Estimate,
    edit_mode: EditMode,
}

impl EstimateStore {
    /// Creates a store around the given document with no active edit.
    pub fn new(estimate: Estimate) -> Self {
        Self {
            estimate,
            edit_mode: EditMode::Idle,
        }
    }

    /// The current document snapshot.
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// The current edit selection.
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit_mode
    }

    /// Replaces the estimate title.
    pub fn update_title(
        &mut self,
        title: impl Into<String>,
    ) {
        self.estimate.title = title.into();
        self.estimate.touch();
        debug!("estimate title updated");
    }

    /// Merges `patch` into the section with the given id and closes the
    /// edit workflow.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SectionNotFound`] when no section has that id;
    /// the document and the edit mode are left untouched.
    pub fn update_section(
        &mut self,
        section_id: &str,
        patch: SectionPatch,
    ) -> Result<(), StoreError> {
        match self.estimate.section_mut(section_id) {
            Some(section) => section.apply(patch),
            None => {
                warn!(section_id = %section_id, "section update targeted a missing section");
                return Err(StoreError::SectionNotFound(section_id.to_string()));
            }
        }

        self.estimate.touch();
        self.edit_mode = EditMode::Idle;
        debug!(section_id = %section_id, "section updated");
        Ok(())
    }

    /// Merges `patch` into the row with the given id, searching every
    /// section, and closes the edit workflow.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowNotFound`] when no section holds that row;
    /// the document and the edit mode are left untouched.
    pub fn update_item(
        &mut self,
        row_id: &str,
        patch: RowPatch,
    ) -> Result<(), StoreError> {
        match self.estimate.row_mut(row_id) {
            Some(row) => row.apply(patch),
            None => {
                warn!(row_id = %row_id, "row update targeted a missing row");
                return Err(StoreError::RowNotFound(row_id.to_string()));
            }
        }

        self.estimate.touch();
        self.edit_mode = EditMode::Idle;
        debug!(row_id = %row_id, "row updated");
        Ok(())
    }

    /// Appends a new empty section and returns its freshly generated id.
    ///
    /// The edit selection is left as it was; adding is always applicable.
    pub fn add_section(
        &mut self,
        title: impl Into<String>,
    ) -> String {
        let id = ids::new_section_id();
        self.estimate
            .sections
            .push(EstimateSection::new(id.clone(), title));
        self.estimate.touch();
        debug!(section_id = %id, "section added");
        id
    }

    /// Appends `item` to the named section under a freshly generated row id
    /// and returns that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SectionNotFound`] when no section has that id;
    /// the document is left untouched.
    pub fn add_item(
        &mut self,
        section_id: &str,
        item: NewEstimateRow,
    ) -> Result<String, StoreError> {
        let section = match self.estimate.section_mut(section_id) {
            Some(section) => section,
            None => {
                warn!(section_id = %section_id, "item add targeted a missing section");
                return Err(StoreError::SectionNotFound(section_id.to_string()));
            }
        };

        let id = ids::new_row_id();
        section.rows.push(item.with_id(id.clone()));
        self.estimate.touch();
        debug!(section_id = %section_id, row_id = %id, "row added");
        Ok(id)
    }

    /// Targets a row for editing. Does not modify the document.
    pub fn select_item(
        &mut self,
        row: EstimateRow,
    ) {
        debug!(row_id = %row.id, "row selected for editing");
        self.edit_mode = EditMode::Item(row);
    }

    /// Targets a section for editing. Does not modify the document.
    pub fn select_section(
        &mut self,
        section: EstimateSection,
    ) {
        debug!(section_id = %section.id, "section selected for editing");
        self.edit_mode = EditMode::Section(section);
    }

    /// Drops any active edit selection. Does not modify the document.
    pub fn clear_selection(&mut self) {
        self.edit_mode = EditMode::Idle;
    }
}
