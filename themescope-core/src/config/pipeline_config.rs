//! Per-document pipeline configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Acquire and extract documents in parallel. Default: false.
    pub parallel: Option<bool>,
}

impl PipelineConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
