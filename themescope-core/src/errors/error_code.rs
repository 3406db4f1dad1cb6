//! Stable error codes surfaced to logs and the CLI.

/// Maps an error to a stable, machine-readable code.
pub trait ThemeErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const NO_PDF_LINK: &str = "NO_PDF_LINK";
pub const ACQUISITION_DISABLED: &str = "ACQUISITION_DISABLED";
pub const FETCH_FAILED: &str = "FETCH_FAILED";
pub const NOT_A_PDF: &str = "NOT_A_PDF";
pub const PAYLOAD_TOO_SMALL: &str = "PAYLOAD_TOO_SMALL";
pub const PDF_PARSE_FAILED: &str = "PDF_PARSE_FAILED";
pub const TEXT_TOO_SHORT: &str = "TEXT_TOO_SHORT";
pub const BLOCK_SIGNAL: &str = "BLOCK_SIGNAL";
pub const SEARCH_ERROR: &str = "SEARCH_ERROR";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const KEYPHRASE_ERROR: &str = "KEYPHRASE_ERROR";
pub const EMPTY_CORPUS: &str = "EMPTY_CORPUS";
pub const ZERO_CLUSTERS: &str = "ZERO_CLUSTERS";
pub const CLUSTER_COUNT_EXCEEDS_PHRASES: &str = "CLUSTER_COUNT_EXCEEDS_PHRASES";
pub const CLUSTERING_FAILED: &str = "CLUSTERING_FAILED";
pub const TABLE_ERROR: &str = "TABLE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
