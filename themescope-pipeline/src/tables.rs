//! Keyword and cluster-summary tables (CSV, UTF-8, header row).

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use themescope_core::errors::TableError;
use themescope_core::models::{ClusterSummary, ExtractedDocument};
use tracing::info;

use crate::document_pipeline::KeywordRow;

pub const KEYWORD_HEADERS: [&str; 4] = ["Title", "Top Keywords", "Used PDF", "PDF URL"];
pub const SUMMARY_HEADERS: [&str; 4] = [
    "Cluster ID",
    "Representative Phrase",
    "Doc Coverage",
    "# Phrases",
];

const PHRASE_SEPARATOR: &str = ", ";

fn csv_error(path: &Path, e: csv::Error) -> TableError {
    let path = path.display().to_string();
    if e.is_io_error() {
        TableError::Io {
            path,
            reason: e.to_string(),
        }
    } else {
        TableError::Csv {
            path,
            reason: e.to_string(),
        }
    }
}

fn write_rows<I>(path: &Path, headers: &[&str], rows: I) -> Result<(), TableError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    wtr.write_record(headers).map_err(|e| csv_error(path, e))?;
    for row in rows {
        wtr.write_record(&row).map_err(|e| csv_error(path, e))?;
    }
    wtr.flush().map_err(|e| TableError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn keyword_record(row: &KeywordRow) -> [String; 4] {
    [
        row.title.clone(),
        row.phrases.join(PHRASE_SEPARATOR),
        if row.used_pdf { "yes" } else { "no" }.to_string(),
        row.pdf_url.clone().unwrap_or_default(),
    ]
}

/// Keyword table written one row at a time as documents finish.
///
/// Every row is flushed on append, so an interrupted run leaves the rows it
/// completed on disk.
pub struct KeywordTableWriter {
    path: PathBuf,
    writer: Writer<File>,
    rows: usize,
}

impl KeywordTableWriter {
    /// Create (or truncate) the table at `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self, TableError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;
        writer
            .write_record(KEYWORD_HEADERS)
            .map_err(|e| csv_error(path, e))?;
        let mut table = Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        };
        table.flush()?;
        Ok(table)
    }

    pub fn append(&mut self, row: &KeywordRow) -> Result<(), TableError> {
        self.writer
            .write_record(keyword_record(row))
            .map_err(|e| csv_error(&self.path, e))?;
        self.rows += 1;
        self.flush()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the table, returning the number of rows written.
    pub fn finish(mut self) -> Result<usize, TableError> {
        self.flush()?;
        info!(path = %self.path.display(), rows = self.rows, "keyword table written");
        Ok(self.rows)
    }

    fn flush(&mut self) -> Result<(), TableError> {
        self.writer.flush().map_err(|e| TableError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

pub fn write_keyword_table(path: &Path, rows: &[KeywordRow]) -> Result<(), TableError> {
    let mut table = KeywordTableWriter::create(path)?;
    for row in rows {
        table.append(row)?;
    }
    table.finish().map(|_| ())
}

pub fn write_summary_table(path: &Path, summaries: &[ClusterSummary]) -> Result<(), TableError> {
    write_rows(
        path,
        &SUMMARY_HEADERS,
        summaries.iter().map(|s| {
            vec![
                s.cluster_id.to_string(),
                s.representative_phrase.clone(),
                s.doc_coverage.to_string(),
                s.phrase_count.to_string(),
            ]
        }),
    )?;
    info!(path = %path.display(), clusters = summaries.len(), "summary table written");
    Ok(())
}

/// Read a keyword table back into rows. Columns are located by header name.
pub fn read_keyword_rows(path: &Path) -> Result<Vec<KeywordRow>, TableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| TableError::MissingColumn {
                path: path.display().to_string(),
                column: name.to_string(),
            })
    };
    let title_idx = column(KEYWORD_HEADERS[0])?;
    let phrases_idx = column(KEYWORD_HEADERS[1])?;
    let used_idx = column(KEYWORD_HEADERS[2])?;
    let url_idx = column(KEYWORD_HEADERS[3])?;

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let get = |idx: usize| field(&record, idx);

        let used_raw = get(used_idx);
        let used_pdf = match used_raw.to_ascii_lowercase().as_str() {
            "yes" => true,
            "no" => false,
            _ => {
                return Err(TableError::InvalidValue {
                    row,
                    column: KEYWORD_HEADERS[2].to_string(),
                    value: used_raw.to_string(),
                })
            }
        };
        let url = get(url_idx);

        rows.push(KeywordRow {
            title: get(title_idx).to_string(),
            phrases: split_phrases(get(phrases_idx)),
            used_pdf,
            pdf_url: (!url.is_empty()).then(|| url.to_string()),
        });
    }
    Ok(rows)
}

/// Rows as extracted documents, indexed by row position. Only rows that
/// used the PDF carry a source URL.
pub fn rows_to_documents(rows: &[KeywordRow]) -> Vec<ExtractedDocument> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match (&row.pdf_url, row.used_pdf) {
            (Some(url), true) => ExtractedDocument::full_text(i, row.phrases.clone(), url.clone()),
            _ => ExtractedDocument::fallback(i, row.phrases.clone()),
        })
        .collect()
}

pub fn read_keyword_table(path: &Path) -> Result<Vec<ExtractedDocument>, TableError> {
    Ok(rows_to_documents(&read_keyword_rows(path)?))
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim()
}

fn split_phrases(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
