//! Extraction Module
//!
//! Single sequential pass over the input rows. The header row anchors the
//! column layout; every later row is classified once and consumed by the
//! rule that matched it.

use std::collections::BTreeMap;

use crate::api::{RowLayout, Strictness};
use crate::catalog::Catalog;
use crate::classify::{cell, RowClassifier};
use crate::error::ReportError;
use crate::types::{Category, Criterion, Evaluation, ExtractionStats, RowKind};
use crate::value::{coerce_decimal, Coerced};

/// Row-to-model extractor.
pub(crate) struct Extractor<'a> {
    catalog: &'a Catalog,
    layout: RowLayout,
    strictness: Strictness,
    classifier: &'a RowClassifier,
}

impl<'a> Extractor<'a> {
    pub fn new(
        catalog: &'a Catalog,
        layout: RowLayout,
        strictness: Strictness,
        classifier: &'a RowClassifier,
    ) -> Self {
        Self {
            catalog,
            layout,
            strictness,
            classifier,
        }
    }

    /// Run the pass.
    ///
    /// # Errors
    ///
    /// * [`ReportError::HeaderNotFound`] when no row carries the header
    ///   sentinels — nothing anchors the layout, so extraction aborts
    ///   before consuming any data.
    /// * [`ReportError::LayoutMismatch`] when the header row is narrower
    ///   than the declared prefix plus roster.
    /// * [`ReportError::Value`] in strict mode, for a non-empty numeric
    ///   cell that fails to parse.
    pub fn extract(
        &self,
        rows: &[Vec<String>],
    ) -> Result<(Evaluation, ExtractionStats), ReportError> {
        // 1. Locate the header row.
        let header_idx = rows
            .iter()
            .position(|row| self.classifier.is_header(row, self.catalog))
            .ok_or_else(|| ReportError::HeaderNotFound {
                first: self.catalog.header_sentinel_first.clone(),
                second: self.catalog.header_sentinel_second.clone(),
            })?;

        // 2. Validate the header width against the declared layout. A
        // narrower header would misalign every vendor column.
        let expected = self.layout.prefix_len() + self.catalog.vendor_count();
        let found = rows[header_idx].len();
        if found < expected {
            return Err(ReportError::LayoutMismatch { expected, found });
        }

        // 3. Consume the remaining rows in order.
        let mut evaluation = Evaluation::default();
        let mut stats = ExtractionStats::default();
        let mut current: Option<usize> = None;

        for (offset, row) in rows[header_idx + 1..].iter().enumerate() {
            let row_idx = header_idx + 1 + offset;
            stats.rows += 1;

            match self.classifier.classify(row, self.layout, self.catalog) {
                RowKind::CategoryHeader { label } => {
                    // The classifier only emits labels present in the catalog.
                    if let Some(spec) = self.catalog.category_by_label(&label).cloned() {
                        current = Some(open_category(&mut evaluation, &spec));
                        stats.recognized += 1;
                    } else {
                        stats.skipped += 1;
                    }
                }

                RowKind::GrandTotal => {
                    self.capture_displays(row, &mut evaluation.final_scores);
                    stats.recognized += 1;
                }

                RowKind::CostRange => {
                    self.capture_cost_ranges(row, &mut evaluation.cost_estimates);
                    stats.recognized += 1;
                }

                RowKind::Subtotal => match current {
                    Some(idx) => {
                        self.capture_displays(row, &mut evaluation.categories[idx].subtotals);
                        stats.recognized += 1;
                    }
                    // Subtotal with no open category is a no-op.
                    None => stats.skipped += 1,
                },

                RowKind::Criterion { priority } => match current {
                    Some(idx) => {
                        let criterion = self.build_criterion(row, row_idx, priority)?;
                        evaluation.categories[idx].criteria.push(criterion);
                        stats.recognized += 1;
                    }
                    // Criterion before any category header is dropped.
                    None => stats.skipped += 1,
                },

                RowKind::Unrecognized => stats.skipped += 1,
            }
        }

        Ok((evaluation, stats))
    }

    /// Capture one pre-formatted display string per vendor column. Empty
    /// and missing cells stay absent; renderers supply the sentinel.
    fn capture_displays(&self, row: &[String], target: &mut BTreeMap<String, String>) {
        for (i, vendor) in self.catalog.vendors.iter().enumerate() {
            let value = cell(row, self.layout.vendor_col(i));
            if !value.is_empty() {
                target.insert(vendor.id.clone(), value.to_string());
            }
        }
    }

    /// Capture only the vendor cells that match the cost-range pattern;
    /// everything else stays absent, never zero-filled.
    fn capture_cost_ranges(&self, row: &[String], target: &mut BTreeMap<String, String>) {
        for (i, vendor) in self.catalog.vendors.iter().enumerate() {
            let value = cell(row, self.layout.vendor_col(i));
            if self.classifier.is_cost_range(value) {
                target.insert(vendor.id.clone(), value.to_string());
            }
        }
    }

    /// Build a criterion from a classified row.
    fn build_criterion(
        &self,
        row: &[String],
        row_idx: usize,
        priority: crate::types::Priority,
    ) -> Result<Criterion, ReportError> {
        let weight_col = self.layout.weight_col();
        let weight = self.coerce(cell(row, weight_col), row_idx, weight_col)?;

        let description = cell(row, self.layout.description_col()).to_string();
        let name = match self.layout.short_name_col() {
            Some(col) => {
                let short = cell(row, col);
                if short.is_empty() {
                    description.clone()
                } else {
                    short.to_string()
                }
            }
            None => description.clone(),
        };

        let mut scores = BTreeMap::new();
        for (i, vendor) in self.catalog.vendors.iter().enumerate() {
            let col = self.layout.vendor_col(i);
            // A row shorter than this vendor's offset omits the value.
            if row.get(col).is_none() {
                continue;
            }
            let score = self.coerce(cell(row, col), row_idx, col)?;
            scores.insert(vendor.id.clone(), score);
        }

        Ok(Criterion {
            priority,
            weight,
            name,
            description,
            scores,
        })
    }

    /// Numeric coercion under the configured strictness. Empty cells are
    /// 0 in both modes; invalid cells are 0 when lenient and an error
    /// when strict.
    fn coerce(&self, raw: &str, row: usize, column: usize) -> Result<f64, ReportError> {
        match coerce_decimal(raw) {
            Coerced::Number(n) => Ok(n),
            Coerced::Empty => Ok(0.0),
            Coerced::Invalid => match self.strictness {
                Strictness::Lenient => Ok(0.0),
                Strictness::Strict => Err(ReportError::Value {
                    row,
                    column,
                    cell: raw.to_string(),
                }),
            },
        }
    }
}

/// Open (or re-open) a category. A later header for the same category
/// resets its accumulated criteria and subtotals.
fn open_category(evaluation: &mut Evaluation, spec: &crate::catalog::CategorySpec) -> usize {
    let fresh = Category::new(spec.id.clone(), spec.name.clone(), spec.weight_percent);

    match evaluation.categories.iter().position(|c| c.id == spec.id) {
        Some(idx) => {
            evaluation.categories[idx] = fresh;
            idx
        }
        None => {
            evaluation.categories.push(fresh);
            evaluation.categories.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
        table
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn header() -> Vec<String> {
        let mut row = vec!["MSCW".to_string(), "Weight %".to_string(), "Description".to_string()];
        for i in 0..12 {
            row.push(format!("V{}", i));
        }
        row
    }

    fn extract(table: Vec<Vec<String>>) -> Result<(Evaluation, ExtractionStats), ReportError> {
        let catalog = Catalog::ai_copilot();
        let classifier = RowClassifier::new().unwrap();
        let extractor = Extractor::new(
            &catalog,
            RowLayout::Classic,
            Strictness::Lenient,
            &classifier,
        );
        extractor.extract(&table)
    }

    fn extract_strict(table: Vec<Vec<String>>) -> Result<(Evaluation, ExtractionStats), ReportError> {
        let catalog = Catalog::ai_copilot();
        let classifier = RowClassifier::new().unwrap();
        let extractor = Extractor::new(
            &catalog,
            RowLayout::Classic,
            Strictness::Strict,
            &classifier,
        );
        extractor.extract(&table)
    }

    #[test]
    fn test_header_not_found_is_fatal() {
        let table = rows(&[
            &["AI Copilot evaluation", "", ""],
            &["Must", "4", "Some requirement", "5"],
        ]);
        let result = extract(table);
        match result {
            Err(ReportError::HeaderNotFound { first, second }) => {
                assert_eq!(first, "MSCW");
                assert_eq!(second, "Weight %");
            }
            _ => panic!("Expected HeaderNotFound"),
        }
    }

    #[test]
    fn test_narrow_header_is_layout_mismatch() {
        let table = rows(&[&["MSCW", "Weight %", "Description", "V0", "V1"]]);
        let result = extract(table);
        match result {
            Err(ReportError::LayoutMismatch { expected, found }) => {
                assert_eq!(expected, 15);
                assert_eq!(found, 5);
            }
            _ => panic!("Expected LayoutMismatch"),
        }
    }

    #[test]
    fn test_category_then_criterion() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4.5", "Some requirement text", "5", "3"],
        ]));

        let (evaluation, stats) = extract(table).unwrap();
        assert_eq!(evaluation.categories.len(), 1);
        let category = &evaluation.categories[0];
        assert_eq!(category.id, "copilot");
        assert_eq!(category.criteria.len(), 1);

        let criterion = &category.criteria[0];
        assert_eq!(criterion.priority, Priority::Must);
        assert_eq!(criterion.weight, 4.5);
        assert_eq!(criterion.scores.get("Google Cloud CCAI"), Some(&5.0));
        assert_eq!(criterion.scores.get("Ender Turing"), Some(&3.0));
        assert_eq!(stats.recognized, 2);
    }

    #[test]
    fn test_criterion_before_any_category_is_dropped() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["Must", "4.5", "Orphan requirement", "5", "3"],
            &["", "", "COPILOT"],
        ]));

        let (evaluation, stats) = extract(table).unwrap();
        assert_eq!(evaluation.criteria_count(), 0);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_subtotal_recorded_not_as_criterion() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["", "20%", "", "80%", "65%"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        let category = &evaluation.categories[0];
        assert!(category.criteria.is_empty());
        assert_eq!(
            category.subtotals.get("Google Cloud CCAI"),
            Some(&"80%".to_string())
        );
        assert_eq!(
            category.subtotals.get("Ender Turing"),
            Some(&"65%".to_string())
        );
        // Vendors with empty cells stay absent.
        assert!(category.subtotals.get("NICE").is_none());
    }

    #[test]
    fn test_subtotal_without_category_is_noop() {
        let mut table = vec![header()];
        table.extend(rows(&[&["", "20%", "", "80%"]]));

        let (evaluation, stats) = extract(table).unwrap();
        assert!(evaluation.categories.is_empty());
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_comma_decimal_weight() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4,5", "Req", "4,5", "3"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        let criterion = &evaluation.categories[0].criteria[0];
        assert_eq!(criterion.weight, 4.5);
        assert_eq!(criterion.scores.get("Google Cloud CCAI"), Some(&4.5));
    }

    #[test]
    fn test_unparsable_score_defaults_to_zero() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "bad", "Req", "n/a", "3"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        let criterion = &evaluation.categories[0].criteria[0];
        assert_eq!(criterion.weight, 0.0);
        assert_eq!(criterion.scores.get("Google Cloud CCAI"), Some(&0.0));
        assert_eq!(criterion.scores.get("Ender Turing"), Some(&3.0));
    }

    #[test]
    fn test_strict_mode_rejects_unparsable_score() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4", "Req", "n/a", "3"],
        ]));

        let result = extract_strict(table);
        match result {
            Err(ReportError::Value { row, column, cell }) => {
                assert_eq!(row, 2);
                assert_eq!(column, 3);
                assert_eq!(cell, "n/a");
            }
            _ => panic!("Expected Value error"),
        }
    }

    #[test]
    fn test_strict_mode_accepts_empty_cells() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "", "Req", "", "3"],
        ]));

        let (evaluation, _) = extract_strict(table).unwrap();
        let criterion = &evaluation.categories[0].criteria[0];
        assert_eq!(criterion.weight, 0.0);
        assert_eq!(criterion.scores.get("Google Cloud CCAI"), Some(&0.0));
    }

    #[test]
    fn test_short_row_omits_trailing_vendors() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4", "Req", "5", "3"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        let criterion = &evaluation.categories[0].criteria[0];
        assert_eq!(criterion.scores.len(), 2);
        assert!(criterion.scores.get("NICE").is_none());
    }

    #[test]
    fn test_grand_total_row() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["", "100%", "Загальна оцінка", "84.1%", "79%"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        assert_eq!(
            evaluation.final_scores.get("Google Cloud CCAI"),
            Some(&"84.1%".to_string())
        );
        assert_eq!(
            evaluation.final_scores.get("Ender Turing"),
            Some(&"79%".to_string())
        );
        // The grand-total row never lands in a category.
        assert_eq!(evaluation.criteria_count(), 0);
        assert!(evaluation.categories[0].subtotals.is_empty());
    }

    #[test]
    fn test_cost_range_partial_capture() {
        let mut table = vec![header()];
        table.extend(rows(&[&[
            "", "", "TCO", "150 - 200 000", "free text", "90-120 000",
        ]]));

        let (evaluation, _) = extract(table).unwrap();
        assert_eq!(
            evaluation.cost_estimates.get("Google Cloud CCAI"),
            Some(&"150 - 200 000".to_string())
        );
        // Non-matching cells are absent, not zero-filled.
        assert!(evaluation.cost_estimates.get("Ender Turing").is_none());
        assert_eq!(
            evaluation.cost_estimates.get("NICE"),
            Some(&"90-120 000".to_string())
        );
    }

    #[test]
    fn test_reopened_category_resets_criteria() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4", "First", "5"],
            &["", "", "COPILOT"],
            &["Should", "2", "Second", "3"],
        ]));

        let (evaluation, _) = extract(table).unwrap();
        assert_eq!(evaluation.categories.len(), 1);
        let category = &evaluation.categories[0];
        assert_eq!(category.criteria.len(), 1);
        assert_eq!(category.criteria[0].description, "Second");
    }

    #[test]
    fn test_unrecognized_rows_skipped_silently() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "just a note"],
            &["", "", ""],
            &["", "", "COPILOT"],
        ]));

        let (evaluation, stats) = extract(table).unwrap();
        assert_eq!(evaluation.categories.len(), 1);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.recognized, 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut table = vec![header()];
        table.extend(rows(&[
            &["", "", "COPILOT"],
            &["Must", "4,5", "Req", "5", "3", "x"],
            &["", "20%", "", "80%", "65%"],
            &["", "100%", "Загальна оцінка", "84.1%"],
        ]));

        let first = extract(table.clone()).unwrap();
        let second = extract(table).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn test_named_layout_short_name_column() {
        let catalog = Catalog::ai_copilot();
        let classifier = RowClassifier::new().unwrap();
        let extractor = Extractor::new(
            &catalog,
            RowLayout::Named,
            Strictness::Lenient,
            &classifier,
        );

        let mut head = vec![
            "MSCW".to_string(),
            "Weight %".to_string(),
            "Name".to_string(),
            "Description".to_string(),
        ];
        for i in 0..12 {
            head.push(format!("V{}", i));
        }
        let table = vec![
            head,
            rows(&[&["", "", "", "COPILOT"]]).remove(0),
            rows(&[&["Must", "3", "Summaries", "Automatic call summaries", "5", "4"]]).remove(0),
        ];

        let (evaluation, _) = extractor.extract(&table).unwrap();
        let criterion = &evaluation.categories[0].criteria[0];
        assert_eq!(criterion.name, "Summaries");
        assert_eq!(criterion.description, "Automatic call summaries");
        assert_eq!(criterion.scores.get("Google Cloud CCAI"), Some(&5.0));
    }

    #[test]
    fn test_rows_before_header_are_ignored() {
        let mut table = rows(&[
            &["Must", "4", "Looks like a criterion", "5"],
            &["", "", "COPILOT"],
        ]);
        table.push(header());
        table.extend(rows(&[&["", "", "COPILOT"], &["Must", "4", "Real", "5"]]));

        let (evaluation, stats) = extract(table).unwrap();
        assert_eq!(evaluation.categories.len(), 1);
        assert_eq!(evaluation.criteria_count(), 1);
        assert_eq!(stats.rows, 2);
    }
}
