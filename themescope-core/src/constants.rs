/// Themescope version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum phrases kept per document.
pub const DEFAULT_TOP_N: usize = 5;

/// Candidate phrase length bounds, in tokens.
pub const DEFAULT_MIN_NGRAM: usize = 1;
pub const DEFAULT_MAX_NGRAM: usize = 3;

/// Upper bound on candidate phrases scored per document.
pub const DEFAULT_MAX_CANDIDATES: usize = 2000;

/// Target cluster count for the semantic clusterer.
pub const DEFAULT_N_CLUSTERS: usize = 10;

/// PDF fetch timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Payloads smaller than this are treated as error pages.
pub const DEFAULT_MIN_PDF_BYTES: usize = 50_000;

/// Parsed PDF text with fewer words is rejected.
pub const DEFAULT_MIN_WORD_COUNT: usize = 100;

/// Browser-like identification sent with PDF fetches.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Case-insensitive substrings that mark a wrapper or access-block page.
pub const DEFAULT_BLOCK_SIGNALS: [&str; 4] = [
    "403 forbidden",
    "enable javascript",
    "researchgate",
    "access denied",
];

/// Resource format that marks a full-text link.
pub const PDF_FORMAT: &str = "pdf";

/// Separator between title and snippet on the fallback path.
pub const FALLBACK_SEPARATOR: &str = ". ";

/// Embedding defaults.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
/// Positions a MiniLM-class encoder accepts, including [CLS] and [SEP].
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 512;

/// Search defaults.
pub const DEFAULT_QUERY: &str = "supportive partner";
pub const DEFAULT_NUM_RESULTS: usize = 30;
pub const DEFAULT_SEARCH_ENGINE: &str = "google_scholar";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Output defaults.
pub const DEFAULT_KEYWORDS_PATH: &str = "scholar_keywords.csv";
pub const DEFAULT_SUMMARY_PATH: &str = "summary_result.csv";
pub const DEFAULT_TOP_PHRASES: usize = 5;
