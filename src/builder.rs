//! Builder Module
//!
//! Fluent builder producing the [`Report`] facade, which runs the whole
//! pipeline: delimited-text reading, row classification and extraction,
//! and rendering in the configured output format.

use std::io::{BufWriter, Read, Write};

use crate::api::{OutputFormat, RowLayout, Strictness};
use crate::catalog::Catalog;
use crate::classify::RowClassifier;
use crate::error::ReportError;
use crate::extract::Extractor;
use crate::render::Renderer;
use crate::types::{Evaluation, ExtractionStats};

/// Resolved configuration of one report run.
#[derive(Debug, Clone)]
pub(crate) struct ReportConfig {
    /// Roster, category table and markers.
    pub catalog: Catalog,

    /// Declared column layout of the input.
    pub layout: RowLayout,

    /// Numeric coercion mode.
    pub strictness: Strictness,

    /// Output format.
    pub output_format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::ai_copilot(),
            layout: RowLayout::Classic,
            strictness: Strictness::Lenient,
            output_format: OutputFormat::Html,
        }
    }
}

/// Fluent builder for [`Report`].
///
/// Every setting has a default; override only what differs.
///
/// # Example
///
/// ```rust
/// use vendorboard::{OutputFormat, ReportBuilder, RowLayout};
///
/// # fn main() -> Result<(), vendorboard::ReportError> {
/// let report = ReportBuilder::new()
///     .with_layout(RowLayout::Classic)
///     .with_output_format(OutputFormat::Json)
///     .build()?;
/// # let _ = report;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Builder with default settings: built-in AI-copilot catalog,
    /// three-column layout, lenient coercion, HTML output.
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// Supply the catalog (vendor roster, category table, markers).
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.config.catalog = catalog;
        self
    }

    /// Declare the input's column layout.
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Set the numeric coercion mode.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.config.strictness = strictness;
        self
    }

    /// Choose the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Validate the configuration and produce a [`Report`].
    ///
    /// # Errors
    ///
    /// [`ReportError::Config`] when the catalog is invalid (empty roster,
    /// duplicate vendor or category identifiers).
    pub fn build(self) -> Result<Report, ReportError> {
        self.config.catalog.validate()?;
        let classifier = RowClassifier::new()?;
        Ok(Report {
            config: self.config,
            classifier,
        })
    }
}

/// Report pipeline facade.
///
/// # Example
///
/// ```rust,no_run
/// use std::fs::File;
/// use vendorboard::ReportBuilder;
///
/// fn main() -> Result<(), vendorboard::ReportError> {
///     let report = ReportBuilder::new().build()?;
///     let input = File::open("data.csv")?;
///     let output = File::create("index.html")?;
///     report.convert(input, output)?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Report {
    config: ReportConfig,
    classifier: RowClassifier,
}

impl Report {
    /// The catalog this report was built with.
    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    /// Read the delimited input and run the extraction pass.
    ///
    /// # Errors
    ///
    /// * [`ReportError::Csv`] when the reader rejects the input.
    /// * [`ReportError::HeaderNotFound`] when no header row is present.
    /// * [`ReportError::LayoutMismatch`] when the header is narrower than
    ///   the declared layout.
    /// * [`ReportError::Value`] in strict mode on unparsable numerics.
    pub fn extract<R: Read>(
        &self,
        input: R,
    ) -> Result<(Evaluation, ExtractionStats), ReportError> {
        let rows = read_rows(input)?;
        let extractor = Extractor::new(
            &self.config.catalog,
            self.config.layout,
            self.config.strictness,
            &self.classifier,
        );
        extractor.extract(&rows)
    }

    /// Render an already-extracted evaluation in the configured format.
    pub fn render<W: Write>(
        &self,
        evaluation: &Evaluation,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        Renderer::from_format(self.config.output_format).render(
            evaluation,
            &self.config.catalog,
            writer,
        )
    }

    /// Extract and render in one step.
    ///
    /// Returns the extraction stats so callers can print a run summary.
    pub fn convert<R: Read, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<ExtractionStats, ReportError> {
        let (evaluation, stats) = self.extract(input)?;
        let mut writer = BufWriter::new(&mut output);
        self.render(&evaluation, &mut writer)?;
        writer.flush()?;
        Ok(stats)
    }

    /// Render the plain-text ranking summary, regardless of the
    /// configured output format. The CLI prints this after writing the
    /// report file.
    pub fn summary<W: Write>(
        &self,
        evaluation: &Evaluation,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        crate::render::render_summary(evaluation, &self.config.catalog, writer)
    }

    /// Extract and render into a `String`.
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ReportError::Render(format!("output is not valid UTF-8: {}", e)))
    }
}

/// Read the whole input into rows of raw cells (trimming happens at
/// classification). The reader is flexible: real exports have ragged row
/// widths, and short rows are the extractor's business, not a read error.
fn read_rows<R: Read>(input: R) -> Result<Vec<Vec<String>>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}
