//! Javadoc page parsers
//!
//! Pure functions from page HTML to normalized records. Two page generations
//! are supported: the legacy table-based layout and the modern section-based
//! layout. Each fallback chain is an ordered strategy list evaluated until one
//! strategy produces a value.
//!
//! The parsers never fail. Malformed, truncated or empty input yields a record
//! with empty fields, which the storage layer then rejects where needed.

mod class;
mod members;
mod package;
mod selectors;
mod text;

use crate::model::{ClassKind, Constructor, Field, Method};

pub use class::parse_class_page;
pub use package::{class_link_candidates, parse_package_summary};
pub use text::extract_first_sentence;

/// A parsed package summary page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPackage {
    /// Dotted package name; empty when no strategy could recover it
    pub package_name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub source_url: String,
    /// Fully-qualified names of the classes listed on the page
    pub classes: Vec<String>,
}

/// A parsed class page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedClass {
    /// Fully-qualified name; empty when the page does not name its package
    pub fqcn: String,
    pub simple_name: String,
    pub kind: ClassKind,
    pub modifiers: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub deprecated: bool,
    pub deprecated_message: Option<String>,
    pub annotations: Vec<String>,
    pub source_url: String,
    pub methods: Vec<Method>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
}
