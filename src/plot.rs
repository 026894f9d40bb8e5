use std::{fmt, fs, ops::Range, path::Path};

use plotters::prelude::*;

use crate::data::PointSet;
use crate::error::{FitErr, Result};
use crate::regression::LinearModel;

/// Output canvas size in pixels.
const CANVAS_SIZE: (u32, u32) = (256, 256);

/// Renders the scatter plus the fitted line to a PNG at `path`.
///
/// The image is drawn into a sibling temporary file and renamed over `path`
/// once encoding has succeeded, so a failed render never leaves a
/// half-written file at the destination.
///
/// # Errors
/// - `FitErr::EmptyPointSet` when there are no points to span.
/// - `FitErr::Render` when the plotting backend fails.
/// - `FitErr::Io` when the finished image cannot be moved into place.
pub fn render(points: &PointSet, model: &LinearModel, path: &Path) -> Result<()> {
    let x_bounds = points
        .x_bounds()
        .ok_or(FitErr::EmptyPointSet { what: "the plot range" })?;

    let tmp = path.with_extension("tmp.png");
    draw(points, model, x_bounds, &tmp)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

fn draw(
    points: &PointSet,
    model: &LinearModel,
    (min_x, max_x): (f64, f64),
    path: &Path,
) -> Result<()> {
    // Line segment spanning the data's x-range.
    let ends = [(min_x, model.predict(min_x)), (max_x, model.predict(max_x))];

    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points.points() {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    for (_, y) in ends {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Random Plot", ("sans-serif", 14))
        .margin(5)
        .x_label_area_size(24)
        .y_label_area_size(32)
        .build_cartesian_2d(padded(min_x, max_x), padded(min_y, max_y))
        .map_err(to_render_err)?;

    chart
        .configure_mesh()
        .x_desc("X values")
        .y_desc("Y values")
        .draw()
        .map_err(to_render_err)?;

    chart
        .draw_series(points.points().iter().map(|p| Cross::new((p.x, p.y), 3, &RED)))
        .map_err(to_render_err)?;

    chart
        .draw_series(LineSeries::new(ends, &BLACK))
        .map_err(to_render_err)?;

    root.present().map_err(to_render_err)?;

    Ok(())
}

/// Widens a degenerate (zero-width) span so the chart still has an area.
fn padded(min: f64, max: f64) -> Range<f64> {
    if min < max {
        min..max
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

fn to_render_err(e: impl fmt::Display) -> FitErr {
    FitErr::Render(e.to_string())
}
