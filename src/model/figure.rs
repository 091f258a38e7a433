//! Figure model: where each metric series of each dataset is drawn, and how.

use crate::model::MetricSeries;
use crate::plan::DatasetName;
use anyhow::bail;
use std::collections::BTreeMap;

/// Legend titles for the clock record fields, by field position.
pub const METRIC_NAMES: [&str; 7] = [
    "Pid",
    "Core",
    "CoreCount",
    "CreateTick",
    "TicksToDetach",
    "TicksToEnd",
    "TicksToCleaned",
];

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 2;
pub const PANEL_COUNT: usize = GRID_ROWS * GRID_COLS;

/// 15x15 inches at 100 dpi.
pub const FIGURE_SIZE: (u32, u32) = (1500, 1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Cross,
    Circle,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub marker: Marker,
    pub rgb: (u8, u8, u8),
}

/// One style per dataset position within a combination.
pub const LINE_STYLES: [LineStyle; 3] = [
    LineStyle {
        marker: Marker::Cross,
        rgb: (0x1f, 0x77, 0xb4),
    },
    LineStyle {
        marker: Marker::Circle,
        rgb: (0xff, 0x7f, 0x0e),
    },
    LineStyle {
        marker: Marker::Plus,
        rgb: (0x2c, 0xa0, 0x2c),
    },
];

pub fn line_style(dataset_index: usize) -> Option<LineStyle> {
    LINE_STYLES.get(dataset_index).copied()
}

pub fn metric_name(field: usize) -> String {
    METRIC_NAMES
        .get(field)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Field{}", field))
}

/// Transposed clock records of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSeries {
    pub name: DatasetName,
    pub columns: Vec<MetricSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub label: String,
    pub style: LineStyle,
    pub values: MetricSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Row-major position in the grid, 0-based.
    pub slot: usize,
    pub title: String,
    pub lines: Vec<SeriesLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureData {
    pub number: u32,
    pub title: String,
    pub size: (u32, u32),
    /// Sorted by slot; empty slots are absent.
    pub panels: Vec<Panel>,
}

/// Grid slot for field `field` of a record with `width` fields.
///
/// The last field lands in the first slot, the first field in slot `width - 1`.
pub fn panel_slot(width: usize, field: usize) -> usize {
    width - field - 1
}

/// Lay out every dataset's columns on one shared figure.
///
/// Dataset `d` is drawn with `LINE_STYLES[d]`. A panel's title follows the
/// field most recently drawn into it.
pub fn build_figure(number: u32, datasets: &[DatasetSeries]) -> anyhow::Result<FigureData> {
    let mut panels: BTreeMap<usize, Panel> = BTreeMap::new();

    for (d, dataset) in datasets.iter().enumerate() {
        let Some(style) = line_style(d) else {
            bail!(
                "no line style for dataset #{} ({}): at most {} datasets can share a figure",
                d + 1,
                dataset.name,
                LINE_STYLES.len()
            );
        };

        let width = dataset.columns.len();
        if width > PANEL_COUNT {
            bail!(
                "dataset {} has {} fields but the figure grid only has {} panels",
                dataset.name,
                width,
                PANEL_COUNT
            );
        }

        for (field, values) in dataset.columns.iter().enumerate() {
            let slot = panel_slot(width, field);
            let panel = panels.entry(slot).or_insert_with(|| Panel {
                slot,
                title: String::new(),
                lines: Vec::new(),
            });
            panel.title = metric_name(field);
            panel.lines.push(SeriesLine {
                label: dataset.name.to_string(),
                style,
                values: values.clone(),
            });
        }
    }

    let title = format!(
        "Figure {}: {}",
        number,
        datasets
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(" vs ")
    );

    Ok(FigureData {
        number,
        title,
        size: FIGURE_SIZE,
        panels: panels.into_values().collect(),
    })
}
