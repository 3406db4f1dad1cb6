//! Console report formatting. Pure string builders; the binary prints them.

use std::fmt::Write;

use themescope_core::models::ClusterSummary;

use crate::document_pipeline::KeywordRow;

/// Progress block for the document at zero-based `index`.
pub fn document_block(index: usize, row: &KeywordRow) -> String {
    let source = if row.used_pdf {
        "(used full-text PDF)"
    } else {
        "(used snippet/abstract)"
    };
    format!(
        "{}. {}\n   Keywords: {}\n   {}\n",
        index + 1,
        row.title,
        row.phrases.join(", "),
        source
    )
}

/// Corpus-wide ranking of the `n` most frequent phrases.
pub fn top_phrases_block(n: usize, top: &[(String, usize)]) -> String {
    let mut out = format!("===== Top {n} Keywords Across All Documents =====\n");
    for (phrase, count) in top {
        let _ = writeln!(out, "{phrase}: {count} times");
    }
    out
}

/// Cluster summaries as aligned text columns.
pub fn summary_table(summaries: &[ClusterSummary]) -> String {
    let phrase_width = summaries
        .iter()
        .map(|s| s.representative_phrase.chars().count())
        .max()
        .unwrap_or(0)
        .max("Representative Phrase".len());

    let mut out = format!(
        "{:>10}  {:<phrase_width$}  {:>12}  {:>9}\n",
        "Cluster ID", "Representative Phrase", "Doc Coverage", "# Phrases"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:>10}  {:<phrase_width$}  {:>12}  {:>9}",
            s.cluster_id, s.representative_phrase, s.doc_coverage, s.phrase_count
        );
    }
    out
}
