//! Top-level Themescope configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::embedding_config::PROVIDERS;
use super::{
    AcquisitionConfig, ClusteringConfig, EmbeddingConfig, KeyphraseConfig, OutputConfig,
    PipelineConfig, SearchConfig,
};
use crate::errors::ConfigError;

/// Project config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "themescope.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`THEMESCOPE_*`, plus `SERPAPI_KEY`)
/// 3. Project config (`themescope.toml` in the root)
/// 4. User config (`~/.themescope/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub search: SearchConfig,
    pub acquisition: AcquisitionConfig,
    pub keyphrase: KeyphraseConfig,
    pub embedding: EmbeddingConfig,
    pub clustering: ClusteringConfig,
    pub output: OutputConfig,
    pub pipeline: PipelineConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub query: Option<String>,
    pub num_results: Option<usize>,
    pub n_clusters: Option<usize>,
    pub keywords_path: Option<String>,
    pub summary_path: Option<String>,
    pub embedding_provider: Option<String>,
    pub model_path: Option<String>,
    pub offline: bool,
    pub parallel: bool,
}

impl ThemeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse failure is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ThemeConfig) -> Result<(), ConfigError> {
        fn invalid(field: &str, message: &str) -> ConfigError {
            ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            }
        }

        if config.clustering.n_clusters == Some(0) {
            return Err(invalid("clustering.n_clusters", "must be at least 1"));
        }
        if config.keyphrase.top_n == Some(0) {
            return Err(invalid("keyphrase.top_n", "must be at least 1"));
        }
        if config.keyphrase.min_ngram == Some(0) {
            return Err(invalid("keyphrase.min_ngram", "must be at least 1"));
        }
        if config.keyphrase.effective_min_ngram() > config.keyphrase.effective_max_ngram() {
            return Err(invalid(
                "keyphrase.max_ngram",
                "must be greater than or equal to keyphrase.min_ngram",
            ));
        }
        if config.acquisition.timeout_secs == Some(0) {
            return Err(invalid("acquisition.timeout_secs", "must be greater than 0"));
        }
        if config.embedding.dimensions == Some(0) {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if matches!(config.embedding.max_sequence_length, Some(n) if n < 3) {
            return Err(invalid(
                "embedding.max_sequence_length",
                "must be at least 3",
            ));
        }
        if !PROVIDERS.contains(&config.embedding.effective_provider()) {
            return Err(invalid(
                "embedding.provider",
                "must be one of \"hashed\", \"onnx\"",
            ));
        }
        if config.embedding.effective_provider() == "onnx" && config.embedding.model_path.is_none()
        {
            return Err(invalid(
                "embedding.model_path",
                "required when embedding.provider = \"onnx\"",
            ));
        }
        if config.search.num_results == Some(0) {
            return Err(invalid("search.num_results", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.themescope/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".themescope").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ThemeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ThemeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ThemeConfig, other: &ThemeConfig) {
        // Search
        merge_option(&mut base.search.api_key, &other.search.api_key);
        merge_option(&mut base.search.query, &other.search.query);
        merge_option(&mut base.search.num_results, &other.search.num_results);
        merge_option(&mut base.search.engine, &other.search.engine);
        merge_option(&mut base.search.endpoint, &other.search.endpoint);

        // Acquisition
        merge_option(&mut base.acquisition.enabled, &other.acquisition.enabled);
        merge_option(
            &mut base.acquisition.timeout_secs,
            &other.acquisition.timeout_secs,
        );
        merge_option(
            &mut base.acquisition.min_pdf_bytes,
            &other.acquisition.min_pdf_bytes,
        );
        merge_option(
            &mut base.acquisition.min_word_count,
            &other.acquisition.min_word_count,
        );
        merge_option(&mut base.acquisition.user_agent, &other.acquisition.user_agent);
        if !other.acquisition.block_signals.is_empty() {
            base.acquisition.block_signals = other.acquisition.block_signals.clone();
        }

        // Keyphrase
        merge_option(&mut base.keyphrase.top_n, &other.keyphrase.top_n);
        merge_option(&mut base.keyphrase.min_ngram, &other.keyphrase.min_ngram);
        merge_option(&mut base.keyphrase.max_ngram, &other.keyphrase.max_ngram);
        merge_option(
            &mut base.keyphrase.max_candidates,
            &other.keyphrase.max_candidates,
        );

        // Embedding
        merge_option(&mut base.embedding.provider, &other.embedding.provider);
        merge_option(&mut base.embedding.model_path, &other.embedding.model_path);
        merge_option(&mut base.embedding.dimensions, &other.embedding.dimensions);
        merge_option(&mut base.embedding.cache_size, &other.embedding.cache_size);
        merge_option(
            &mut base.embedding.max_sequence_length,
            &other.embedding.max_sequence_length,
        );
        merge_option(
            &mut base.embedding.token_type_ids,
            &other.embedding.token_type_ids,
        );

        // Clustering
        merge_option(&mut base.clustering.n_clusters, &other.clustering.n_clusters);
        merge_option(&mut base.clustering.linkage, &other.clustering.linkage);

        // Output
        merge_option(&mut base.output.keywords_path, &other.output.keywords_path);
        merge_option(&mut base.output.summary_path, &other.output.summary_path);
        merge_option(&mut base.output.top_phrases, &other.output.top_phrases);

        // Pipeline
        merge_option(&mut base.pipeline.parallel, &other.pipeline.parallel);
    }

    /// Apply environment variable overrides.
    /// Pattern: `THEMESCOPE_SEARCH_QUERY`, `THEMESCOPE_CLUSTERING_N_CLUSTERS`, etc.
    fn apply_env_overrides(config: &mut ThemeConfig) {
        if let Ok(val) = std::env::var("SERPAPI_KEY") {
            config.search.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_SEARCH_API_KEY") {
            config.search.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_SEARCH_QUERY") {
            config.search.query = Some(val);
        }
        if let Some(v) = env_parse::<usize>("THEMESCOPE_SEARCH_NUM_RESULTS") {
            config.search.num_results = Some(v);
        }
        if let Some(v) = env_parse::<bool>("THEMESCOPE_ACQUISITION_ENABLED") {
            config.acquisition.enabled = Some(v);
        }
        if let Some(v) = env_parse::<u64>("THEMESCOPE_ACQUISITION_TIMEOUT_SECS") {
            config.acquisition.timeout_secs = Some(v);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_EMBEDDING_PROVIDER") {
            config.embedding.provider = Some(val);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_EMBEDDING_MODEL_PATH") {
            config.embedding.model_path = Some(val);
        }
        if let Some(v) = env_parse::<usize>("THEMESCOPE_CLUSTERING_N_CLUSTERS") {
            config.clustering.n_clusters = Some(v);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_OUTPUT_KEYWORDS_PATH") {
            config.output.keywords_path = Some(val);
        }
        if let Ok(val) = std::env::var("THEMESCOPE_OUTPUT_SUMMARY_PATH") {
            config.output.summary_path = Some(val);
        }
        if let Some(v) = env_parse::<bool>("THEMESCOPE_PIPELINE_PARALLEL") {
            config.pipeline.parallel = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ThemeConfig, cli: &CliOverrides) {
        merge_option(&mut config.search.query, &cli.query);
        merge_option(&mut config.search.num_results, &cli.num_results);
        merge_option(&mut config.clustering.n_clusters, &cli.n_clusters);
        merge_option(&mut config.output.keywords_path, &cli.keywords_path);
        merge_option(&mut config.output.summary_path, &cli.summary_path);
        merge_option(&mut config.embedding.provider, &cli.embedding_provider);
        merge_option(&mut config.embedding.model_path, &cli.model_path);
        if cli.offline {
            config.acquisition.enabled = Some(false);
        }
        if cli.parallel {
            config.pipeline.parallel = Some(true);
        }
    }
}

fn merge_option<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        *base = other.clone();
    }
}

/// Parse an environment variable, ignoring unset or malformed values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
