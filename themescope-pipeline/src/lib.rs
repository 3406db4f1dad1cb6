//! # themescope-pipeline
//!
//! Drives a corpus through acquisition and keyphrase extraction, keeps the
//! corpus-wide phrase frequencies, persists keyword and summary tables, and
//! runs the corpus-level theme analysis.

pub mod analysis;
pub mod document_pipeline;
pub mod frequency;
pub mod report;
pub mod tables;

pub use analysis::{AnalysisReport, ThemeAnalysis};
pub use document_pipeline::{DocumentPipeline, KeywordRow, PipelineRun};
pub use frequency::PhraseFrequency;
pub use tables::KeywordTableWriter;
