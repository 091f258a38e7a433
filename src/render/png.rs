use crate::model::FigureData;
use crate::model::figure::{GRID_COLS, GRID_ROWS, Marker, Panel};
use anyhow::bail;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const MARKER_SIZE: i32 = 4;

/// Render a figure as a PNG grid of line charts, one chart per panel.
pub fn render_png(figure: &FigureData, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, figure.size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&figure.title, ("sans-serif", 24))?;
    let cells = root.split_evenly((GRID_ROWS, GRID_COLS));

    for panel in &figure.panels {
        let Some(cell) = cells.get(panel.slot) else {
            bail!(
                "panel {} ({}) is outside the {}x{} grid",
                panel.slot,
                panel.title,
                GRID_ROWS,
                GRID_COLS
            );
        };
        draw_panel(cell, panel)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &Panel) -> anyhow::Result<()> {
    let (y_lo, y_hi) = y_range(panel);
    let x_hi = x_extent(panel);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0f64..x_hi, y_lo..y_hi)?;

    chart.configure_mesh().x_desc("record").draw()?;

    for line in &panel.lines {
        let (r, g, b) = line.style.rgb;
        let color = RGBColor(r, g, b);
        let points: Vec<(f64, f64)> = line
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        match line.style.marker {
            Marker::Cross => {
                chart.draw_series(points.iter().map(|&p| Cross::new(p, MARKER_SIZE, color)))?;
            }
            Marker::Circle => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, MARKER_SIZE, color)))?;
            }
            Marker::Plus => {
                chart.draw_series(points.iter().map(|&p| {
                    EmptyElement::at(p)
                        + PathElement::new(vec![(-MARKER_SIZE, 0), (MARKER_SIZE, 0)], color)
                        + PathElement::new(vec![(0, -MARKER_SIZE), (0, MARKER_SIZE)], color)
                }))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Vertical span covering every finite value of the panel, padded by a twentieth of the span.
pub(crate) fn y_range(panel: &Panel) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in panel.lines.iter().flat_map(|l| l.values.iter()) {
        if v.is_finite() {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
    }
    if lo > hi {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) / 20.0;
    (lo - pad, hi + pad)
}

/// Horizontal span: the longest series' last index, at least 1.
pub(crate) fn x_extent(panel: &Panel) -> f64 {
    let longest = panel.lines.iter().map(|l| l.values.len()).max().unwrap_or(0);
    (longest.saturating_sub(1) as f64).max(1.0)
}
