pub mod config;
pub mod model;

pub use config::{ChartConfig, ChartType};
pub use model::ChartModel;
