//! Monetary derivations over the estimate document.
//!
//! Totals are never stored on the document; they are recomputed from the
//! current snapshot on every read.

pub mod totals;

pub use totals::{estimate_total, line_total, section_total};
