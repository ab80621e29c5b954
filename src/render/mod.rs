//! Render Module
//!
//! Strategy dispatch over the report output formats. Each renderer is a
//! pure function of the extracted [`Evaluation`] and the [`Catalog`].

mod html;
mod json;
mod summary;

use std::io::Write;

use crate::api::OutputFormat;
use crate::catalog::{Catalog, Vendor};
use crate::error::ReportError;
use crate::types::Evaluation;
use crate::value::percent_value;

pub(crate) use summary::render_summary;

/// Report renderer selected from the output format.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Renderer {
    Html,
    Json,
    Summary,
}

impl Renderer {
    pub fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Renderer::Html,
            OutputFormat::Json => Renderer::Json,
            OutputFormat::Summary => Renderer::Summary,
        }
    }

    /// Render the evaluation to `writer`.
    pub fn render<W: Write>(
        &self,
        evaluation: &Evaluation,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        match self {
            Renderer::Html => html::render(evaluation, catalog, writer),
            Renderer::Json => json::render(evaluation, writer),
            Renderer::Summary => summary::render_summary(evaluation, catalog, writer),
        }
    }
}

/// Vendors ordered by final score, best first. Ties keep roster order.
pub(crate) fn ranked_vendors<'a>(
    evaluation: &Evaluation,
    catalog: &'a Catalog,
) -> Vec<&'a Vendor> {
    let mut ranked: Vec<&Vendor> = catalog.vendors.iter().collect();
    ranked.sort_by(|a, b| {
        let score_a = final_score_value(evaluation, &a.id);
        let score_b = final_score_value(evaluation, &b.id);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Parsed final score of one vendor; absent or unparsable ranks as 0.
pub(crate) fn final_score_value(evaluation: &Evaluation, vendor_id: &str) -> f64 {
    evaluation
        .final_scores
        .get(vendor_id)
        .map(|s| percent_value(s))
        .unwrap_or(0.0)
}
