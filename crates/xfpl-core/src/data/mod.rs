// Reference data: the player table, the model prediction table, and the
// position codes they share.

pub mod players;
pub mod position;
pub mod predictions;

use std::path::Path;

/// Errors raised while loading a CSV table from disk.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

/// Open `path` for reading, mapping failures to `TableError::Io`.
pub(crate) fn open_table(path: &Path) -> Result<std::fs::File, TableError> {
    std::fs::File::open(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Round a CSV numeric to a non-negative whole number of tenths.
///
/// Returns `None` for non-finite or negative input.
pub(crate) fn to_tenths(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}
