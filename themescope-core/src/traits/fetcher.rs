use crate::errors::AcquisitionError;

/// Raw HTTP response body plus the declared content type.
#[derive(Debug, Clone, Default)]
pub struct FetchedPayload {
    /// Lower-cased `Content-Type` header, empty when absent.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Retrieves a remote document.
pub trait IDocumentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, AcquisitionError>;
}

/// Converts PDF bytes to plain text, pages concatenated in order.
pub trait IPdfTextParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<String, AcquisitionError>;
}
