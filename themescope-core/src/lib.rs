//! # themescope-core
//!
//! Foundation crate for Themescope.
//! Defines the corpus data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ThemeConfig;
pub use errors::{ThemeError, ThemeResult};
pub use models::{ClusterSummary, DocumentRecord, ExtractedDocument, ResourceLink};
