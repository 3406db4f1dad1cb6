use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_SEPARATOR, PDF_FORMAT};

/// A link to an alternate representation of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Declared file format, e.g. "PDF" or "HTML".
    pub format: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(format: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            url: url.into(),
        }
    }

    /// Whether the declared format is PDF (case-insensitive).
    pub fn is_pdf(&self) -> bool {
        self.format.eq_ignore_ascii_case(PDF_FORMAT)
    }
}

/// One search result as returned by the search-results provider.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub resource_links: Vec<ResourceLink>,
}

impl DocumentRecord {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            resource_links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: ResourceLink) -> Self {
        self.resource_links.push(link);
        self
    }

    /// The first resource link whose format is PDF, in link order.
    pub fn first_pdf_link(&self) -> Option<&ResourceLink> {
        self.resource_links.iter().find(|r| r.is_pdf())
    }

    /// Title and snippet joined as `"{title}. {snippet}"`.
    pub fn fallback_text(&self) -> String {
        format!("{}{}{}", self.title, FALLBACK_SEPARATOR, self.snippet)
    }
}
