//! Row Classification Module
//!
//! Classifies each input row into exactly one [`RowKind`]. The rules are
//! mutually exclusive by precedence: they are checked in a fixed order
//! and the first match consumes the row. Keeping the whole decision in
//! one function avoids the fallthrough bugs a chain of independent
//! conditionals invites.

use regex::Regex;

use crate::api::RowLayout;
use crate::catalog::Catalog;
use crate::error::ReportError;
use crate::types::{Priority, RowKind};

/// Pattern of a cost-estimate cell: digits, dash, digits, literal "000"
/// (e.g. "150 - 200 000").
const COST_RANGE_PATTERN: &str = r"^\d+\s*-\s*\d+\s*000$";

/// Stateless row classifier.
///
/// Holds the compiled cost-range pattern; everything else it needs is
/// passed per call.
#[derive(Debug)]
pub(crate) struct RowClassifier {
    cost_range: Regex,
}

impl RowClassifier {
    /// Compile the classifier.
    pub fn new() -> Result<Self, ReportError> {
        let cost_range = Regex::new(COST_RANGE_PATTERN)
            .map_err(|e| ReportError::Config(format!("cost-range pattern: {}", e)))?;
        Ok(Self { cost_range })
    }

    /// Classify one row.
    ///
    /// Precedence, first match wins:
    ///
    /// 1. category header — description cell exactly matches a catalog
    ///    category label;
    /// 2. grand total — weight cell is the literal "100%" and the
    ///    description contains the grand-total marker;
    /// 3. cost range — any vendor cell matches the cost-range pattern;
    /// 4. subtotal — weight cell non-empty with a percent sign, priority
    ///    cell empty;
    /// 5. criterion — priority cell is one of the MoSCoW literals.
    ///
    /// Anything else is [`RowKind::Unrecognized`].
    pub fn classify(&self, row: &[String], layout: RowLayout, catalog: &Catalog) -> RowKind {
        let priority_cell = cell(row, layout.priority_col());
        let weight_cell = cell(row, layout.weight_col());
        let description_cell = cell(row, layout.description_col());

        // 1. Category header
        if catalog.category_by_label(description_cell).is_some() {
            return RowKind::CategoryHeader {
                label: description_cell.to_string(),
            };
        }

        // 2. Grand total
        if weight_cell == "100%" && description_cell.contains(&catalog.grand_total_marker) {
            return RowKind::GrandTotal;
        }

        // 3. Cost range
        let has_cost_cell = (0..catalog.vendor_count())
            .any(|i| self.is_cost_range(cell(row, layout.vendor_col(i))));
        if has_cost_cell {
            return RowKind::CostRange;
        }

        // 4. Subtotal
        if !weight_cell.is_empty() && weight_cell.contains('%') && priority_cell.is_empty() {
            return RowKind::Subtotal;
        }

        // 5. Criterion
        if let Ok(priority) = priority_cell.parse::<Priority>() {
            return RowKind::Criterion { priority };
        }

        RowKind::Unrecognized
    }

    /// Whether a single cell matches the cost-range pattern.
    pub fn is_cost_range(&self, cell: &str) -> bool {
        !cell.is_empty() && self.cost_range.is_match(cell)
    }

    /// Whether a row carries the header sentinels in its first two
    /// prefix columns.
    pub fn is_header(&self, row: &[String], catalog: &Catalog) -> bool {
        cell(row, 0) == catalog.header_sentinel_first
            && cell(row, 1) == catalog.header_sentinel_second
    }
}

/// Trimmed view of a cell; out-of-range columns read as empty.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or("")
}
