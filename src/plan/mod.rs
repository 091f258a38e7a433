//! Plan layer: dataset names and the list of combinations to plot.

pub mod dataset;
pub mod combinations;

pub use dataset::{DatasetName, image_path};
pub use combinations::{BUILTIN_COMBINATIONS, Plan, PlanSpec};
