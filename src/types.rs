//! Types Module
//!
//! Data model shared by the extractor and the renderers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// MoSCoW priority of a criterion.
///
/// Closed three-value enumeration, ordered by importance. Only the three
/// literal strings `Must`, `Should` and `Could` parse; anything else in
/// the priority column keeps a row from becoming a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    /// Mandatory for launch.
    Must,
    /// Needed for growth.
    Should,
    /// Nice to have.
    Could,
}

impl Priority {
    /// The literal as it appears in the input table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Must => "Must",
            Priority::Should => "Should",
            Priority::Could => "Could",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Must" => Ok(Priority::Must),
            "Should" => Ok(Priority::Should),
            "Could" => Ok(Priority::Could),
            _ => Err(()),
        }
    }
}

/// One evaluated requirement row.
///
/// Immutable once appended to its owning category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    /// MoSCoW priority.
    pub priority: Priority,

    /// Numeric weight of the criterion inside its category.
    pub weight: f64,

    /// Short display name. Under the three-column layout this equals the
    /// description; renderers truncate it for table rows.
    pub name: String,

    /// Free-text requirement description.
    pub description: String,

    /// Vendor id → score (0–5, halves allowed). A vendor whose cell was
    /// missing has no entry; renderers treat absence as 0.
    pub scores: BTreeMap<String, f64>,
}

/// A named, weighted grouping of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// Stable identifier used for tab anchors and lookups.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Weight of the category, out of 100 across all categories.
    pub weight_percent: f64,

    /// Criteria in input order.
    pub criteria: Vec<Criterion>,

    /// Vendor id → pre-formatted subtotal string (e.g. "72%").
    pub subtotals: BTreeMap<String, String>,
}

impl Category {
    /// A fresh, empty category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight_percent: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight_percent,
            criteria: Vec::new(),
            subtotals: BTreeMap::new(),
        }
    }
}

/// The full extracted evaluation: one pass over the input builds one of
/// these, and rendering is a pure function of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    /// Categories in the order their headers were first encountered.
    pub categories: Vec<Category>,

    /// Vendor id → final overall percentage string ("84.1%").
    pub final_scores: BTreeMap<String, String>,

    /// Vendor id → estimated cost range string ("150 - 200 000").
    pub cost_estimates: BTreeMap<String, String>,
}

impl Evaluation {
    /// Look up a category by its stable id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of criteria across all categories.
    pub fn criteria_count(&self) -> usize {
        self.categories.iter().map(|c| c.criteria.len()).sum()
    }
}

/// Row counts accumulated during one extraction pass.
///
/// The CLI surfaces these as part of its summary; nothing else is
/// reported for rows that fail classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Rows scanned after the header.
    pub rows: usize,

    /// Rows consumed by a classification rule.
    pub recognized: usize,

    /// Rows skipped: unrecognized, or subtotal/criterion rows that
    /// arrived before any category header was open.
    pub skipped: usize,
}

/// Classification of one input row.
///
/// Produced once per row by the classifier; the first matching rule wins
/// and the row is fully consumed by it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowKind {
    /// The description cell exactly matches a catalog category label.
    CategoryHeader {
        /// The matched label (catalog lookup key).
        label: String,
    },

    /// Weight cell is the literal "100%" and the description carries the
    /// grand-total marker.
    GrandTotal,

    /// At least one vendor cell matches the cost-range pattern.
    CostRange,

    /// Percent in the weight cell, empty priority cell.
    Subtotal,

    /// Priority cell holds one of the three MoSCoW literals.
    Criterion {
        /// Parsed priority.
        priority: Priority,
    },

    /// No rule matched; the row is skipped without diagnostics.
    Unrecognized,
}
