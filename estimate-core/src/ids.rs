//! Identifier generation for sections and rows.
//!
//! Ids are random UUIDs with a short prefix naming the entity kind, so
//! they stay readable in logs and serialized documents.

use uuid::Uuid;

/// Returns a fresh section id, e.g. `section-67e55044-…`.
pub fn new_section_id() -> String {
    format!("section-{}", Uuid::new_v4())
}

/// Returns a fresh row id, e.g. `item-1f3870be-…`.
pub fn new_row_id() -> String {
    format!("item-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_carry_the_section_prefix() {
        assert!(new_section_id().starts_with("section-"));
    }

    #[test]
    fn row_ids_carry_the_item_prefix() {
        assert!(new_row_id().starts_with("item-"));
    }

    #[test]
    fn consecutive_ids_are_distinct() {
        assert_ne!(new_section_id(), new_section_id());
        assert_ne!(new_row_id(), new_row_id());
    }
}
