use std::path::Path;

use crate::data::codec::encode;
use crate::data::filter::{apply, FilterOperator, FilterSpec};
use crate::data::loader::{export_results, load_file};
use crate::data::model::Grid;
use crate::error::{ExportError, LoadError};

// ---------------------------------------------------------------------------
// Column selector labels
// ---------------------------------------------------------------------------

/// One selector label per header column: the zero-based index, followed by
/// ` - <name>` when the header field is not empty.
pub fn column_options(header: &[String]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                i.to_string()
            } else {
                format!("{i} - {name}")
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The viewer session, independent of rendering.
///
/// Owns the loaded grid; every filter runs against `self.grid` explicitly.
pub struct AppState {
    /// Loaded grid (None until a file loads successfully).
    pub grid: Option<Grid>,

    /// Display name of the loaded file.
    pub file_name: Option<String>,

    /// Current filter selection.
    pub column: usize,
    pub operator: FilterOperator,
    pub value: String,

    /// Last filter output, as a grid for the table and as CSV text for export.
    pub result: Option<Grid>,
    pub result_text: String,

    /// Error shown in the UI.
    pub error_message: Option<String>,

    pub show_filter: bool,
    pub show_results: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            grid: None,
            file_name: None,
            column: 0,
            operator: FilterOperator::Equals,
            value: String::new(),
            result: None,
            result_text: String::new(),
            error_message: None,
            show_filter: false,
            show_results: false,
        }
    }
}

impl AppState {
    /// Load a file from disk and replace the current grid.
    pub fn load_path(&mut self, path: &Path) {
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.finish_load(load_file(path));
    }

    #[cfg(test)]
    fn load_csv_text(&mut self, text: &str) {
        self.finish_load(crate::data::loader::load_text(text));
    }

    fn finish_load(&mut self, loaded: Result<Grid, LoadError>) {
        self.result = None;
        self.result_text.clear();
        self.show_results = false;

        match loaded {
            Ok(grid) => {
                self.grid = Some(grid);
                self.column = 0;
                self.show_filter = true;
                self.error_message = None;
            }
            Err(e) => {
                self.grid = None;
                self.show_filter = false;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Selector labels for the loaded grid's header.
    pub fn column_labels(&self) -> Vec<String> {
        self.grid
            .as_ref()
            .map(|g| column_options(g.header()))
            .unwrap_or_default()
    }

    /// Run the current selection against the loaded grid.
    ///
    /// A bad column index still shows the unfiltered header.
    pub fn apply_filter(&mut self) {
        self.error_message = None;
        let Some(grid) = &self.grid else {
            return;
        };

        let spec = FilterSpec::new(self.column, self.operator, self.value.clone());
        let result = match apply(grid, &spec) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("{e}");
                self.error_message = Some(e.to_string());
                Grid::new(vec![grid.header().to_vec()])
            }
        };

        self.result_text = encode(&result);
        self.result = Some(result);
        self.show_results = true;
    }

    /// Write the last result's CSV text to `path`.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        export_results(path, &self.result_text)
    }
}
