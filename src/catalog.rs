//! Catalog Module
//!
//! Reference data driving extraction and rendering: the ordered vendor
//! roster, the closed category table, and the textual markers that anchor
//! row classification. The catalog is plain data — it is passed into the
//! extractor and the renderers instead of living as global literals, so
//! "which vendors exist" is decoupled from the parsing logic.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One scored vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Identifier, also the map key of every per-vendor value.
    pub id: String,

    /// Display label for table headers. May contain `<br>` line breaks;
    /// it is emitted verbatim into the HTML header cells.
    pub label: String,
}

impl Vendor {
    /// Vendor whose display label equals its id.
    pub fn plain(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
        }
    }
}

/// One entry of the closed category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Exact header label as it appears in the input's description cell.
    pub label: String,

    /// Stable identifier (tab anchor, lookup key).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Weight of the category, out of 100 across all categories.
    pub weight_percent: f64,
}

/// Reference data for one evaluation: roster, categories and markers.
///
/// # Example
///
/// ```rust
/// use vendorboard::Catalog;
///
/// let catalog = Catalog::ai_copilot();
/// assert_eq!(catalog.vendors.len(), 12);
/// assert!(catalog.category_by_label("COPILOT").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Ordered vendor roster. Order fixes the column offset of every
    /// vendor value in the input table.
    pub vendors: Vec<Vendor>,

    /// Closed category table, in display order.
    pub categories: Vec<CategorySpec>,

    /// Sentinel expected in the first header column.
    pub header_sentinel_first: String,

    /// Sentinel expected in the second header column.
    pub header_sentinel_second: String,

    /// Substring of the description cell that marks the grand-total row.
    pub grand_total_marker: String,
}

impl Catalog {
    /// The built-in AI-copilot provider evaluation: twelve vendors, six
    /// categories, Ukrainian grand-total marker.
    pub fn ai_copilot() -> Self {
        let vendors = [
            ("Google Cloud CCAI", "Google<br><br>Cloud<br>CCAI"),
            ("Ender Turing", "Ender<br>Turing"),
            ("NICE", "NICE"),
            ("Microsoft Copilot", "Microsoft<br>Copilot"),
            ("Genesys Cloud CX", "Genesys<br><br>Cloud<br>CX"),
            ("NICE Cognigy", "NICECognigy"),
            ("Live Person", "Live<br>Person"),
            ("Ringo stat", "Ringo<br>stat"),
            ("Deca gon", "Deca<br>gon"),
            ("Eleven Labs", "Eleven<br>Labs"),
            ("Poly AI", "Poly<br>AI"),
            ("Get Vocal", "Get<br>Vocal"),
        ]
        .into_iter()
        .map(|(id, label)| Vendor {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect();

        let categories = [
            ("COPILOT", "copilot", "Copilot", 15.0),
            ("ПОСТОБРОБКА (ACW)", "acw", "Постобробка", 25.0),
            ("АНАЛІТИКА ТА QA", "analytics", "Аналітика & QA", 15.0),
            (
                "PRE-CALL AI, як повноцінний IVR-замінник",
                "precall",
                "PreCall AI",
                5.0,
            ),
            ("IT, ENTERPRISE & SECURITY", "it", "IT & Security", 30.0),
            ("БІЗНЕС ТА ВПРОВАДЖЕННЯ", "business", "Бізнес", 10.0),
        ]
        .into_iter()
        .map(|(label, id, name, weight_percent)| CategorySpec {
            label: label.to_string(),
            id: id.to_string(),
            name: name.to_string(),
            weight_percent,
        })
        .collect();

        Self {
            vendors,
            categories,
            header_sentinel_first: "MSCW".to_string(),
            header_sentinel_second: "Weight %".to_string(),
            grand_total_marker: "Загальна оцінка".to_string(),
        }
    }

    /// Load a catalog from JSON.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use vendorboard::Catalog;
    ///
    /// # fn main() -> Result<(), vendorboard::ReportError> {
    /// let catalog = Catalog::from_json(File::open("catalog.json")?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json<R: Read>(reader: R) -> Result<Self, ReportError> {
        serde_json::from_reader(reader)
            .map_err(|e| ReportError::Config(format!("invalid catalog JSON: {}", e)))
    }

    /// Category spec whose header label equals `label` exactly.
    pub fn category_by_label(&self, label: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Category spec by stable id.
    pub fn category_by_id(&self, id: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of vendor columns every data row is expected to carry.
    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }

    /// Validate the catalog before extraction starts.
    ///
    /// # Errors
    ///
    /// * empty vendor roster
    /// * duplicate vendor ids
    /// * duplicate category labels or ids
    pub(crate) fn validate(&self) -> Result<(), ReportError> {
        if self.vendors.is_empty() {
            return Err(ReportError::Config("vendor roster is empty".to_string()));
        }

        for (i, vendor) in self.vendors.iter().enumerate() {
            if self.vendors[..i].iter().any(|v| v.id == vendor.id) {
                return Err(ReportError::Config(format!(
                    "duplicate vendor id '{}'",
                    vendor.id
                )));
            }
        }

        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i]
                .iter()
                .any(|c| c.label == category.label || c.id == category.id)
            {
                return Err(ReportError::Config(format!(
                    "duplicate category '{}'",
                    category.label
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::ai_copilot()
    }
}
