//! Single-column row filtering over a decoded [`Grid`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::Grid;
use crate::error::{ColumnIndexError, ParseOperatorError};

// ---------------------------------------------------------------------------
// FilterOperator
// ---------------------------------------------------------------------------

/// Comparison applied between a field and the filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Contains,
}

impl FilterOperator {
    /// All operators, in the order offered to the user.
    pub const ALL: [FilterOperator; 7] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::GreaterOrEqual,
        FilterOperator::LessOrEqual,
        FilterOperator::Contains,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            FilterOperator::Equals => "==",
            FilterOperator::NotEquals => "!=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
            FilterOperator::Contains => "contains",
        }
    }

    /// Whether the operator compares fields as numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FilterOperator::GreaterThan
                | FilterOperator::LessThan
                | FilterOperator::GreaterOrEqual
                | FilterOperator::LessOrEqual
        )
    }

    /// Evaluate the operator for one field.  `None` is an absent field.
    pub fn matches(self, field: Option<&str>, value: &str) -> bool {
        let text = field.unwrap_or("");
        match self {
            FilterOperator::Equals => text == value,
            FilterOperator::NotEquals => text != value,
            FilterOperator::Contains => text.contains(value),
            _ => {
                let a = field.map_or(f64::NAN, parse_number);
                let b = parse_number(value);
                // NaN on either side makes every comparison false
                match self {
                    FilterOperator::GreaterThan => a > b,
                    FilterOperator::LessThan => a < b,
                    FilterOperator::GreaterOrEqual => a >= b,
                    FilterOperator::LessOrEqual => a <= b,
                    _ => false,
                }
            }
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FilterOperator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" | "equals" => Ok(FilterOperator::Equals),
            "!=" | "notEquals" => Ok(FilterOperator::NotEquals),
            ">" | "greaterThan" => Ok(FilterOperator::GreaterThan),
            "<" | "lessThan" => Ok(FilterOperator::LessThan),
            ">=" | "greaterOrEqual" => Ok(FilterOperator::GreaterOrEqual),
            "<=" | "lessOrEqual" => Ok(FilterOperator::LessOrEqual),
            "contains" => Ok(FilterOperator::Contains),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

/// Parse a field as a finite number; anything else is NaN.
///
/// `inf`, `NaN` and overflowing literals like `1e400` are not numbers here.
fn parse_number(s: &str) -> f64 {
    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
    if s.is_empty() {
        return f64::NAN;
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – one filter request
// ---------------------------------------------------------------------------

/// Column, operator and comparison value for one filter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub column_index: usize,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterSpec {
    pub fn new(column_index: usize, operator: FilterOperator, value: impl Into<String>) -> Self {
        FilterSpec {
            column_index,
            operator,
            value: value.into(),
        }
    }
}

/// A filtered grid: the source header followed by the matching data rows.
pub type FilterResult = Grid;

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return grid indices (always ≥ 1) of the data rows matching `spec`.
///
/// Fails without scanning when the column is not present in the header.
/// Rows too short for the column are tested as an absent field.
pub fn matching_rows(grid: &Grid, spec: &FilterSpec) -> Result<Vec<usize>, ColumnIndexError> {
    let count = grid.column_count();
    if spec.column_index >= count {
        return Err(ColumnIndexError {
            index: spec.column_index,
            count,
        });
    }

    let indices: Vec<usize> = grid
        .data_rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let field = row.get(spec.column_index).map(String::as_str);
            spec.operator.matches(field, &spec.value)
        })
        .map(|(i, _)| i + 1)
        .collect();

    log::debug!(
        "filter column {} {} {:?}: {} of {} rows match",
        spec.column_index,
        spec.operator,
        spec.value,
        indices.len(),
        grid.data_rows().len()
    );
    Ok(indices)
}

/// Filter `grid` by `spec`, keeping the header and the matching rows in
/// their original order.
///
/// The header is present even when nothing matches.
pub fn apply(grid: &Grid, spec: &FilterSpec) -> Result<FilterResult, ColumnIndexError> {
    let indices = matching_rows(grid, spec)?;

    let mut rows = Vec::with_capacity(indices.len() + 1);
    rows.push(grid.header().to_vec());
    rows.extend(indices.into_iter().map(|i| grid.rows()[i].clone()));
    Ok(Grid::new(rows))
}
