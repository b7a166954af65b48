mod estimate;
mod row;
mod section;
mod uom;

pub use estimate::Estimate;
pub use row::{EstimateRow, NewEstimateRow, RowPatch};
pub use section::{EstimateSection, SectionPatch};
pub use uom::UnitOfMeasure;
