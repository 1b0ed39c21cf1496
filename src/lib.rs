//! csv-sieve: decode CSV text into a grid, filter it by one column, and
//! encode the result back to CSV.
//!
//! ```
//! use csv_sieve::data::codec::{decode, encode};
//! use csv_sieve::data::filter::{apply, FilterOperator, FilterSpec};
//!
//! let grid = decode("name,age\nann,34\nbob,19");
//! let spec = FilterSpec::new(1, FilterOperator::GreaterThan, "21");
//! let result = apply(&grid, &spec).unwrap();
//! assert_eq!(encode(&result), "name,age\nann,34");
//! ```

pub mod app;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::codec::{decode, encode, encode_quoted};
pub use data::filter::{apply, matching_rows, FilterOperator, FilterResult, FilterSpec};
pub use data::model::{Grid, Row};
pub use error::{ColumnIndexError, EncodeError, ExportError, LoadError, ParseOperatorError};
