//! Plot rendering
//!
//! Scatter plots and correlation-matrix heatmaps written as PNG files via
//! plotters. The original analysis displayed transient plot windows; a CLI
//! writes the same figures to the plots directory instead.

pub mod heatmap;
pub mod scatter;

pub use heatmap::render_heatmap;
pub use scatter::render_scatter;

/// Pixel dimensions of every generated figure
pub const PLOT_SIZE: (u32, u32) = (1000, 600);

/// Axis range for a plotted value set
///
/// An explicit limit wins; otherwise the range spans the finite data with a
/// small margin.
pub(crate) fn axis_range(values: impl Iterator<Item = f64>, limit: Option<(f64, f64)>) -> (f64, f64) {
    if let Some((low, high)) = limit {
        return (low, high);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.filter(|v| v.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }

    if min > max {
        // No finite data at all
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }

    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}
