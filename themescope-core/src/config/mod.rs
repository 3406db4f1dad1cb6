//! Configuration system for Themescope.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod acquisition_config;
pub mod clustering_config;
pub mod embedding_config;
pub mod keyphrase_config;
pub mod output_config;
pub mod pipeline_config;
pub mod search_config;
pub mod theme_config;

pub use acquisition_config::AcquisitionConfig;
pub use clustering_config::{ClusteringConfig, Linkage};
pub use embedding_config::EmbeddingConfig;
pub use keyphrase_config::KeyphraseConfig;
pub use output_config::OutputConfig;
pub use pipeline_config::PipelineConfig;
pub use search_config::SearchConfig;
pub use theme_config::{CliOverrides, ThemeConfig};
