pub mod line;
pub mod render;
pub mod section;
pub mod terminal;

pub use render::{format_section, render_report, FOOTER_URL, HEADER_TEXT, MAX_ROWS};
pub use section::{default_sections, ResultRow, SectionSpec};

/// Console link for one rendered section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLink {
    pub label: String,
    pub url: String,
}

/// A finished digest: the plain-text document and the links it contains,
/// in section order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub text: String,
    pub links: Vec<SectionLink>,
}
