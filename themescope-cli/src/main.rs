//! `themescope`: keyphrase extraction and semantic theme clustering for
//! academic search results.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use themescope_core::config::{CliOverrides, ThemeConfig};
use themescope_core::tracing_setup::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "themescope")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory searched for themescope.toml
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Skip PDF downloads and use title + snippet for every document
    #[arg(long, global = true)]
    offline: bool,

    /// Process documents on a thread pool
    #[arg(long, global = true)]
    parallel: bool,

    /// Embedding provider: hashed or onnx
    #[arg(long, global = true, value_parser = ["hashed", "onnx"])]
    embedding_provider: Option<String>,

    /// ONNX model file for the onnx provider
    #[arg(long, global = true)]
    model_path: Option<String>,

    /// Keyword table path
    #[arg(long, global = true)]
    keywords: Option<String>,

    /// Cluster summary table path
    #[arg(long, global = true)]
    summary: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search query
    #[arg(short, long)]
    query: Option<String>,

    /// Number of search results to request
    #[arg(short, long)]
    num_results: Option<usize>,

    /// Read search results from a local JSON file instead of SerpApi
    #[arg(long)]
    corpus: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ClusterArgs {
    /// Target number of clusters
    #[arg(short = 'k', long)]
    n_clusters: Option<usize>,

    /// Print the analysis report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search, extract keyphrases per document, write the keyword table
    Extract {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Cluster phrases from a keyword table and write the summary table
    Cluster {
        #[command(flatten)]
        cluster: ClusterArgs,
    },
    /// Extract then cluster in one pass
    Run {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        cluster: ClusterArgs,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (search, cluster) = match &self.command {
            Commands::Extract { search } => (Some(search), None),
            Commands::Cluster { cluster } => (None, Some(cluster)),
            Commands::Run { search, cluster } => (Some(search), Some(cluster)),
        };
        CliOverrides {
            query: search.and_then(|s| s.query.clone()),
            num_results: search.and_then(|s| s.num_results),
            n_clusters: cluster.and_then(|c| c.n_clusters),
            keywords_path: self.global.keywords.clone(),
            summary_path: self.global.summary.clone(),
            embedding_provider: self.global.embedding_provider.clone(),
            model_path: self.global.model_path.clone(),
            offline: self.global.offline,
            parallel: self.global.parallel,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.global.verbose { "debug" } else { "info" };
    init_tracing(level, cli.global.json_logs);

    let config = ThemeConfig::load(&cli.global.root, Some(&cli.overrides()))
        .with_context(|| format!("loading configuration from {}", cli.global.root.display()))?;

    match cli.command {
        Commands::Extract { search } => commands::extract(&config, &search).map(|_| ())?,
        Commands::Cluster { cluster } => commands::cluster(&config, &cluster)?,
        Commands::Run { search, cluster } => commands::run(&config, &search, &cluster)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_subcommand_collects_overrides() {
        let cli = Cli::try_parse_from([
            "themescope", "run", "-q", "couples stress", "-k", "4", "--offline", "--corpus",
            "results.json",
        ])
        .unwrap();
        let o = cli.overrides();
        assert_eq!(o.query.as_deref(), Some("couples stress"));
        assert_eq!(o.n_clusters, Some(4));
        assert!(o.offline);
        assert!(!o.parallel);
    }

    #[test]
    fn cluster_subcommand_has_no_search_overrides() {
        let cli = Cli::try_parse_from(["themescope", "cluster", "--keywords", "k.csv"]).unwrap();
        let o = cli.overrides();
        assert!(o.query.is_none());
        assert_eq!(o.keywords_path.as_deref(), Some("k.csv"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(Cli::try_parse_from(["themescope", "extract", "--embedding-provider", "bert"]).is_err());
    }
}
