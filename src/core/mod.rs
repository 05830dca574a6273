pub mod dataset;
pub mod geometry;
pub mod line;
pub mod max;
pub mod row;
pub mod variant;

pub use dataset::{Dataset, DatasetShape, LabeledValue};
pub use geometry::{CellGeometry, RowGeometry, format_value, value_fraction};
pub use line::{build_flat_segments, build_nested_segment_rows, build_segments};
pub use max::resolve_max;
pub use row::{build_flat_rows, build_labeled_rows, build_nested_rows, build_row};
pub use variant::{VariantFlags, VariantTokens};
