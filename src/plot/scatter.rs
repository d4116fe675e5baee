//! Scatter plot rendering

use plotters::prelude::*;
use std::path::Path;

use crate::error::Result;
use crate::error::MetriscopeError;
use crate::plot::{axis_range, PLOT_SIZE};

/// Render one scatter plot to a PNG file
///
/// Non-finite points are skipped. Explicit axis limits override the
/// data-driven range.
pub fn render_scatter(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x_values: &[f64],
    y_values: &[f64],
    x_limit: Option<(f64, f64)>,
    y_limit: Option<(f64, f64)>,
) -> Result<()> {
    let points: Vec<(f64, f64)> = x_values
        .iter()
        .zip(y_values.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (*x, *y))
        .collect();

    let (x_min, x_max) = axis_range(points.iter().map(|p| p.0), x_limit);
    let (y_min, y_max) = axis_range(points.iter().map(|p| p.1), y_limit);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    root.present()
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    Ok(())
}
