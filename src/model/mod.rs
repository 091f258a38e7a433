//! Series model: reshape clock records into per-metric series and lay them out
//! on a figure.

pub mod figure;
pub mod transpose;

pub use figure::{DatasetSeries, FigureData, build_figure};
pub use transpose::{MetricSeries, transpose};
