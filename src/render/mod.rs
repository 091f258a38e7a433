//! Rendering of laid-out figures to image files.

pub mod png;

use crate::model::FigureData;
use std::path::Path;

pub use png::render_png;

/// Destination for finished figures.
pub trait FigureSink {
    fn save(&mut self, figure: &FigureData, path: &Path) -> anyhow::Result<()>;
}

/// Writes figures as PNG files via `plotters`.
#[derive(Debug, Default)]
pub struct PngSink;

impl FigureSink for PngSink {
    fn save(&mut self, figure: &FigureData, path: &Path) -> anyhow::Result<()> {
        render_png(figure, path)
    }
}
