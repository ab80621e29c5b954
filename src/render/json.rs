//! JSON Renderer
//!
//! Pretty-printed dump of the extracted evaluation. Output is
//! deterministic: all per-vendor maps are ordered, so identical input
//! produces identical bytes.

use std::io::Write;

use crate::error::ReportError;
use crate::types::Evaluation;

/// Serialize the evaluation as pretty-printed JSON.
pub(crate) fn render<W: Write>(evaluation: &Evaluation, writer: &mut W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *writer, evaluation)
        .map_err(|e| ReportError::Render(format!("JSON serialization error: {}", e)))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
