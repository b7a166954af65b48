//! Screen-level controller between a rendering shell and the estimate store.
//!
//! Save callbacks arriving from forms are gated on the active [`EditMode`]:
//! a row save only applies while a row edit is in progress, and a section
//! save only while a section edit is in progress. The gate exists because a
//! shell can race a stale callback from a dismissed form against a newly
//! opened one; a mismatched save must never write through to the wrong
//! entity type. Rejections are typed [`ScreenError`]s carrying the mode
//! that was actually active, and they leave the document untouched.

use estimate_core::{
    EditMode, Estimate, EstimateRow, EstimateSection, EstimateStore, NewEstimateRow, RowPatch,
    SectionPatch, StoreError,
};
use thiserror::Error;
use tracing::warn;

/// Errors returned by screen-level save callbacks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// A row save arrived while no row edit was in progress.
    #[error("no item edit in progress, current mode is {0}")]
    NotEditingItem(&'static str),

    /// A section save arrived while no section edit was in progress.
    #[error("no section edit in progress, current mode is {0}")]
    NotEditingSection(&'static str),

    /// The store rejected the operation after the gate passed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the injected [`EstimateStore`] and adapts it to the callbacks a
/// presentation shell invokes.
#[derive(Debug, Clone)]
pub struct EstimateScreen {
    store: EstimateStore,
}

impl EstimateScreen {
    pub fn new(store: EstimateStore) -> Self {
        Self { store }
    }

    /// The current document snapshot.
    pub fn estimate(&self) -> &Estimate {
        self.store.estimate()
    }

    /// The current edit selection.
    pub fn edit_mode(&self) -> &EditMode {
        self.store.edit_mode()
    }

    /// Replaces the estimate title.
    pub fn update_title(
        &mut self,
        title: impl Into<String>,
    ) {
        self.store.update_title(title);
    }

    /// Opens a row edit session.
    pub fn start_item_edit(
        &mut self,
        row: EstimateRow,
    ) {
        self.store.select_item(row);
    }

    /// Opens a section edit session.
    pub fn start_section_edit(
        &mut self,
        section: EstimateSection,
    ) {
        self.store.select_section(section);
    }

    /// Abandons any edit session without saving.
    pub fn stop_edit(&mut self) {
        self.store.clear_selection();
    }

    /// Saves an edited row. The target is the id carried in `updated`.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotEditingItem`] when no row edit is in
    /// progress, or a wrapped [`StoreError`] when the id no longer exists.
    /// Either way the document is unchanged.
    pub fn save_item(
        &mut self,
        updated: EstimateRow,
    ) -> Result<(), ScreenError> {
        if !matches!(self.store.edit_mode(), EditMode::Item(_)) {
            let mode = self.store.edit_mode().as_str();
            warn!(mode = %mode, row_id = %updated.id, "item save rejected outside item edit");
            return Err(ScreenError::NotEditingItem(mode));
        }

        let row_id = updated.id.clone();
        self.store.update_item(&row_id, RowPatch::from(updated))?;
        Ok(())
    }

    /// Saves a section edit. The target is the currently selected section.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::NotEditingSection`] when no section edit is
    /// in progress, or a wrapped [`StoreError`] when the selected section
    /// no longer exists. Either way the document is unchanged.
    pub fn save_section(
        &mut self,
        patch: SectionPatch,
    ) -> Result<(), ScreenError> {
        let section_id = match self.store.edit_mode() {
            EditMode::Section(section) => section.id.clone(),
            other => {
                let mode = other.as_str();
                warn!(mode = %mode, "section save rejected outside section edit");
                return Err(ScreenError::NotEditingSection(mode));
            }
        };

        self.store.update_section(&section_id, patch)?;
        Ok(())
    }

    /// Appends a new section; always applicable, no gating.
    pub fn add_section(
        &mut self,
        title: impl Into<String>,
    ) -> String {
        self.store.add_section(title)
    }

    /// Appends a new row to the named section; always applicable, no gating.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`StoreError`] when the section id is unknown.
    pub fn add_item(
        &mut self,
        section_id: &str,
        item: NewEstimateRow,
    ) -> Result<String, ScreenError> {
        Ok(self.store.add_item(section_id, item)?)
    }
}
