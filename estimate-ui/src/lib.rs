pub mod currency;
pub mod forms;
pub mod picker;
pub mod render;
pub mod screen;
pub mod utils;

pub use screen::{EstimateScreen, ScreenError};
