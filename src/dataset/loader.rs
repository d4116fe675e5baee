//! Delimited-file loading for the repository dataset

use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{MetriscopeError, Result};
use crate::models::config::ColumnLabels;

/// Load a delimited dataset file into named numeric columns
///
/// The file must carry a header row containing every configured column
/// label. Cells that fail to parse as a number become NaN; they are
/// filtered pairwise when correlations are computed.
pub fn load_dataset(path: &Path, delimiter: char, labels: &ColumnLabels) -> Result<Dataset> {
    if !path.exists() {
        return Err(MetriscopeError::DataFileNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| MetriscopeError::dataset_read_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| MetriscopeError::dataset_read_error(path, e))?
        .clone();

    // Resolve each configured label to a column index up front so a missing
    // column is reported before any row is read.
    let indices: Vec<usize> = labels
        .all()
        .iter()
        .map(|label| {
            headers
                .iter()
                .position(|h| h == *label)
                .ok_or_else(|| MetriscopeError::missing_column(*label, path))
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); indices.len()];

    for record in reader.records() {
        let record = record.map_err(|e| MetriscopeError::dataset_read_error(path, e))?;
        for (column, &index) in columns.iter_mut().zip(indices.iter()) {
            column.push(parse_cell(record.get(index)));
        }
    }

    if columns[0].is_empty() {
        return Err(MetriscopeError::EmptyDataset {
            file: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let mut columns = columns.into_iter();
    // Order matches ColumnLabels::all
    Ok(Dataset {
        path: path.to_path_buf(),
        labels: labels.clone(),
        avg_cbo: columns.next().unwrap_or_default(),
        dit_max: columns.next().unwrap_or_default(),
        avg_lcom: columns.next().unwrap_or_default(),
        stars: columns.next().unwrap_or_default(),
        years: columns.next().unwrap_or_default(),
        releases: columns.next().unwrap_or_default(),
        loc: columns.next().unwrap_or_default(),
    })
}

/// Parse a cell into a number, mapping absent or malformed values to NaN
fn parse_cell(cell: Option<&str>) -> f64 {
    match cell {
        Some(text) if !text.is_empty() => text.parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
