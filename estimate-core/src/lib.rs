pub mod calculations;
pub mod ids;
pub mod models;
pub mod seed;
pub mod store;

pub use store::{EditMode, EstimateStore, StoreError};
pub use models::*;
