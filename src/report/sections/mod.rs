//! Section builders
//!
//! Each builder appends one part of the report to the shared document and
//! never looks at what the others wrote.

pub mod closing;
pub mod contents;
pub mod cover;
pub mod findings;
pub mod summary;

pub use closing::{add_appendix_section, add_conclusion_section};
pub use contents::add_table_of_contents;
pub use cover::add_cover_page;
pub use findings::add_findings_section;
pub use summary::{add_executive_summary, add_methodology_section};

use crate::docx::{Paragraph, TextRun};

/// Bold "Label:" paragraph introducing a block of body text
pub(crate) fn label_paragraph(label: &str) -> Paragraph {
    Paragraph::new().run(TextRun::new(format!("{}:", label)).bold().size(11.0))
}

/// 11pt body paragraph
pub(crate) fn body_paragraph(text: &str) -> Paragraph {
    Paragraph::new().run(TextRun::new(text).size(11.0))
}
