//! Subcommand drivers. Each builds its collaborators from the resolved
//! configuration and prints the console report.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use themescope_acquisition::{
    AcquisitionPolicy, HttpPdfFetcher, JsonCorpusProvider, PdfExtractParser, SerpApiProvider,
    TextAcquirer,
};
use themescope_clustering::SemanticClusterer;
use themescope_core::errors::ThemeErrorCode;
use themescope_core::models::ExtractedDocument;
use themescope_core::traits::{IEmbeddingProvider, ISearchProvider};
use themescope_core::ThemeConfig;
use themescope_embeddings::EmbeddingEngine;
use themescope_keyphrase::EmbeddingKeyphraseExtractor;
use themescope_pipeline::{report, tables, DocumentPipeline, KeywordTableWriter, ThemeAnalysis};
use tracing::{info, warn};

use crate::{ClusterArgs, SearchArgs};

fn embedder(config: &ThemeConfig) -> Arc<dyn IEmbeddingProvider> {
    Arc::new(EmbeddingEngine::new(&config.embedding))
}

fn search_provider(config: &ThemeConfig, args: &SearchArgs) -> Result<Box<dyn ISearchProvider>> {
    Ok(match &args.corpus {
        Some(path) => Box::new(JsonCorpusProvider::new(path)),
        None => Box::new(SerpApiProvider::from_config(&config.search)?),
    })
}

/// Search, process every document, print progress and append its keyword
/// row as it finishes, then print the top phrases. Returns the extracted documents.
pub fn extract(config: &ThemeConfig, args: &SearchArgs) -> Result<Vec<ExtractedDocument>> {
    extract_with(config, args, embedder(config))
}

fn extract_with(
    config: &ThemeConfig,
    args: &SearchArgs,
    embedder: Arc<dyn IEmbeddingProvider>,
) -> Result<Vec<ExtractedDocument>> {
    let provider = search_provider(config, args)?;
    let records = provider.search()?;
    info!(provider = provider.name(), results = records.len(), "search complete");

    let fetcher = HttpPdfFetcher::from_config(&config.acquisition)?;
    let acquirer = TextAcquirer::new(
        Box::new(fetcher),
        Box::new(PdfExtractParser),
        AcquisitionPolicy::from_config(&config.acquisition),
    );
    let extractor = EmbeddingKeyphraseExtractor::from_config(embedder, &config.keyphrase)?;
    let pipeline = DocumentPipeline::new(acquirer, Arc::new(extractor))
        .with_parallel(config.pipeline.effective_parallel());

    let path = Path::new(config.output.effective_keywords_path());
    let mut table = KeywordTableWriter::create(path)?;
    let mut table_error = None;
    let outcome = pipeline.run_with_progress(&records, |index, row| {
        println!("{}", report::document_block(index, row));
        if table_error.is_none() {
            table_error = table.append(row).err();
        }
    });
    if let Some(err) = table_error {
        return Err(err.into());
    }
    table.finish()?;
    for (index, err) in &outcome.errors {
        warn!(result = index + 1, code = err.error_code(), error = %err, "document degraded");
    }

    let n = config.output.effective_top_phrases();
    print!("{}", report::top_phrases_block(n, &outcome.data.frequency.top(n)));
    println!("\nCSV output saved to: {}", path.display());

    Ok(outcome.data.documents)
}

/// Read the keyword table and cluster its phrases.
pub fn cluster(config: &ThemeConfig, args: &ClusterArgs) -> Result<()> {
    let path = Path::new(config.output.effective_keywords_path());
    let documents = tables::read_keyword_table(path)
        .with_context(|| format!("reading keyword table {}", path.display()))?;
    analyze(config, args, embedder(config), &documents)
}

/// Extract then cluster, sharing one embedding engine and its cache.
pub fn run(config: &ThemeConfig, search: &SearchArgs, cluster: &ClusterArgs) -> Result<()> {
    let embedder = embedder(config);
    let documents = extract_with(config, search, Arc::clone(&embedder))?;
    analyze(config, cluster, embedder, &documents)
}

fn analyze(
    config: &ThemeConfig,
    args: &ClusterArgs,
    embedder: Arc<dyn IEmbeddingProvider>,
    documents: &[ExtractedDocument],
) -> Result<()> {
    let analysis = ThemeAnalysis::new(SemanticClusterer::from_config(embedder, &config.clustering));
    let outcome = analysis.run(documents)?;

    let path = Path::new(config.output.effective_summary_path());
    tables::write_summary_table(path, &outcome.summaries)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!();
        print!("{}", report::summary_table(&outcome.summaries));
        println!("\nSummary saved to: {}", path.display());
    }
    Ok(())
}
