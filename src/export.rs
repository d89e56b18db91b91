//! Quotation Export
//!
//! Hands a frozen snapshot to the browser print dialog ("Save as PDF").

use crate::error::{QuoteError, QuoteResult};
use crate::models::QuoteSnapshot;

/// `Quotation-<project>-<date>`, with "Project" standing in for a blank name
pub fn export_file_name(snapshot: &QuoteSnapshot, date: &str) -> String {
    let project = snapshot.client_info.name.trim();
    let project = if project.is_empty() { "Project" } else { project };
    format!("Quotation-{}-{}", project, date)
}

/// Print the current preview.
///
/// The document title becomes the suggested PDF file name for the duration of
/// the dialog and is restored afterwards.
pub fn export_pdf(snapshot: &QuoteSnapshot, date: &str) -> QuoteResult<()> {
    let window = web_sys::window().ok_or_else(|| QuoteError::Export("no window".to_string()))?;
    let document = window.document().ok_or_else(|| QuoteError::Export("no document".to_string()))?;

    let previous_title = document.title();
    let file_name = export_file_name(snapshot, date);
    document.set_title(&file_name);
    log::info!("Exporting {} ({} pages, total {})", file_name, snapshot.pages.len(), snapshot.total);

    let result = window.print().map_err(|e| QuoteError::Export(format!("{:?}", e)));
    document.set_title(&previous_title);
    result
}
