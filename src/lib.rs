//! vendorboard - CSV scoring-matrix parser and HTML dashboard generator
//!
//! This crate reads a semi-structured CSV export of a weighted vendor
//! evaluation (MoSCoW-prioritized criteria scored per vendor), extracts
//! it into a typed model, and renders a static HTML dashboard, a JSON
//! dump, or a plain-text ranking summary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use vendorboard::ReportBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a report pipeline with default settings
//!     let report = ReportBuilder::new().build()?;
//!
//!     // Open input CSV export
//!     let input = File::open("data.csv")?;
//!
//!     // Create the output HTML document
//!     let output = File::create("index.html")?;
//!
//!     // Extract and render
//!     report.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use vendorboard::{OutputFormat, ReportBuilder, RowLayout, Strictness};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = ReportBuilder::new()
//!         .with_layout(RowLayout::Named)          // 4-column prefix exports
//!         .with_strictness(Strictness::Strict)    // reject unparsable numerics
//!         .with_output_format(OutputFormat::Json) // structured dump
//!         .build()?;
//!
//!     let input = File::open("data.csv")?;
//!     let output = File::create("evaluation.json")?;
//!     report.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Inspect the Extracted Model
//!
//! ```rust,no_run
//! use std::fs::File;
//! use vendorboard::ReportBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = ReportBuilder::new().build()?;
//!     let (evaluation, stats) = report.extract(File::open("data.csv")?)?;
//!
//!     println!("{} categories, {} criteria ({} rows skipped)",
//!         evaluation.categories.len(),
//!         evaluation.criteria_count(),
//!         stats.skipped);
//!     Ok(())
//! }
//! ```

mod api;
mod backup;
mod builder;
mod catalog;
mod classify;
mod error;
mod extract;
mod render;
mod types;
mod value;

pub use api::{OutputFormat, RowLayout, Strictness};
pub use backup::backup_existing;
pub use builder::{Report, ReportBuilder};
pub use catalog::{Catalog, CategorySpec, Vendor};
pub use error::ReportError;
pub use types::{Category, Criterion, Evaluation, ExtractionStats, Priority};
