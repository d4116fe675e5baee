//! Correlation-matrix heatmap rendering

use plotters::prelude::*;
use std::path::Path;

use crate::error::{MetriscopeError, Result};
use crate::models::report::CorrelationMatrix;
use crate::plot::PLOT_SIZE;

/// Render a correlation matrix as a heatmap PNG
///
/// Cells are colored on a blue-white-red diverging scale over [-1, 1] and
/// annotated with the coefficient value. Undefined coefficients render as
/// grey cells without annotation.
pub fn render_heatmap(path: &Path, title: &str, matrix: &CorrelationMatrix) -> Result<()> {
    let n = matrix.len();
    if n == 0 {
        return Ok(());
    }

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(110)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    let x_labels = matrix.labels.clone();
    let y_labels = matrix.labels.clone();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&move |v| label_at(&x_labels, *v))
        .y_label_formatter(&move |v| label_at(&y_labels, *v))
        .draw()
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    chart
        .draw_series((0..n).flat_map(|row| {
            let values = &matrix.values;
            (0..n).map(move |col| {
                let value = values[row][col];
                Rectangle::new(
                    [(col as f64, row as f64), (col as f64 + 1.0, row as f64 + 1.0)],
                    cell_color(value).filled(),
                )
            })
        }))
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    let annotation_style = ("sans-serif", 16).into_font().color(&BLACK);
    chart
        .draw_series((0..n).flat_map(|row| {
            let values = &matrix.values;
            let style = annotation_style.clone();
            (0..n).filter_map(move |col| {
                let value = values[row][col];
                if value.is_finite() {
                    Some(Text::new(
                        format!("{:.2}", value),
                        (col as f64 + 0.4, row as f64 + 0.5),
                        style.clone(),
                    ))
                } else {
                    None
                }
            })
        }))
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    root.present()
        .map_err(|e| MetriscopeError::plot_render(path, e.to_string()))?;

    Ok(())
}

/// Column label for a tick position, empty past the matrix edge
fn label_at(labels: &[String], position: f64) -> String {
    let index = position.floor() as usize;
    labels.get(index).cloned().unwrap_or_default()
}

/// Diverging blue-white-red color for a coefficient in [-1, 1]
pub(crate) fn cell_color(value: f64) -> RGBColor {
    if !value.is_finite() {
        return RGBColor(189, 189, 189);
    }

    let value = value.clamp(-1.0, 1.0);
    let lerp = |from: u8, to: u8, t: f64| (from as f64 + (to as f64 - from as f64) * t) as u8;

    if value >= 0.0 {
        // white -> red
        RGBColor(
            lerp(255, 178, value),
            lerp(255, 24, value),
            lerp(255, 43, value),
        )
    } else {
        // white -> blue
        let t = -value;
        RGBColor(lerp(255, 33, t), lerp(255, 102, t), lerp(255, 172, t))
    }
}
