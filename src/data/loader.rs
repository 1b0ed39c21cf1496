//! File I/O around the codec: reading a CSV file into a [`Grid`] and
//! writing filter results back out.

use std::path::Path;

use super::codec::decode;
use super::model::Grid;
use crate::error::{ExportError, LoadError, ReadSource};

/// Default name offered when saving filter results.
pub const RESULTS_FILE_NAME: &str = "results.csv";

/// Media type of the exported results.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Read a CSV file and decode it into a [`Grid`].
///
/// Fails with:
/// * [`LoadError::Read`]  – the file is unreadable or not UTF-8
/// * [`LoadError::Empty`] – the file holds only whitespace
/// * [`LoadError::Parse`] – no header row could be decoded
pub fn load_file(path: &Path) -> Result<Grid, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e.into()))?;
    let text = String::from_utf8(bytes).map_err(|e| read_error(path, e.into()))?;

    let grid = load_text(&text)?;
    log::info!(
        "Loaded {} with {} rows and {} columns",
        path.display(),
        grid.len(),
        grid.column_count()
    );
    Ok(grid)
}

/// Validate and decode already-read text.
pub fn load_text(text: &str) -> Result<Grid, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        log::warn!("Rejected empty CSV input");
        return Err(LoadError::Empty);
    }

    let grid = decode(text);
    if grid.is_empty() || grid.header().is_empty() {
        log::warn!("CSV input decoded to no usable header");
        return Err(LoadError::Parse);
    }
    Ok(grid)
}

fn read_error(path: &Path, source: ReadSource) -> LoadError {
    log::warn!("Failed to read {}: {source}", path.display());
    LoadError::Read {
        path: path.to_path_buf(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write already-encoded CSV text to `path`.
pub fn export_results(path: &Path, csv_text: &str) -> Result<(), ExportError> {
    std::fs::write(path, csv_text).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported {} bytes to {}", csv_text.len(), path.display());
    Ok(())
}
