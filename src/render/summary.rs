//! Text Summary Renderer
//!
//! The short textual feedback described by the report contract: category
//! and criteria counts followed by the vendors ranked by final score.
//! Vendor names mix Cyrillic and Latin, so columns are padded by display
//! width rather than byte length.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::catalog::Catalog;
use crate::error::ReportError;
use crate::render::ranked_vendors;
use crate::types::Evaluation;

/// Render the plain-text ranking summary.
pub(crate) fn render_summary<W: Write>(
    evaluation: &Evaluation,
    catalog: &Catalog,
    writer: &mut W,
) -> Result<(), ReportError> {
    writeln!(
        writer,
        "Parsed {} categories, {} criteria:",
        evaluation.categories.len(),
        evaluation.criteria_count()
    )?;
    for category in &evaluation.categories {
        writeln!(
            writer,
            "  - {}: {} criteria",
            category.name,
            category.criteria.len()
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Final scores:")?;

    let name_width = catalog
        .vendors
        .iter()
        .map(|v| v.id.width())
        .max()
        .unwrap_or(0);

    for (rank, vendor) in ranked_vendors(evaluation, catalog).iter().enumerate() {
        let score = evaluation
            .final_scores
            .get(&vendor.id)
            .map(String::as_str)
            .unwrap_or("0%");
        let cost = evaluation
            .cost_estimates
            .get(&vendor.id)
            .map(String::as_str)
            .unwrap_or("N/A");

        writeln!(
            writer,
            "  {:>2}. {}{}  {:>7}  ~${}",
            rank + 1,
            vendor.id,
            pad(&vendor.id, name_width),
            score,
            cost
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Spaces needed to pad `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let current = text.width();
    if current < width {
        " ".repeat(width - current)
    } else {
        String::new()
    }
}
