//! Plain-text rendering of assembled documents

use async_trait::async_trait;
use std::path::PathBuf;

use crate::document::{Alignment, Cell, Document, TableRow};
use crate::traits::*;
use crate::types::*;

/// Lay a document out as monospaced text
pub fn render_text(document: &Document) -> String {
    let widths = column_widths(&document.table.rows);
    let table_width = widths.iter().sum::<usize>() + 3 * widths.len() + 1;
    let separator = separator_line(&widths);

    let mut lines = vec![pad(&document.title, table_width, Alignment::Center), String::new()];

    lines.push(document.header.recipient_label.clone());
    lines.push(document.header.recipient_name.clone());
    lines.extend(document.header.address_lines.iter().cloned());
    lines.push(pad(&document.header.bill_line, table_width, Alignment::Right));
    lines.push(pad(&document.header.date_line, table_width, Alignment::Right));
    lines.push(String::new());
    lines.push(document.narrative.clone());
    lines.push(String::new());

    lines.push(separator.clone());
    for (index, row) in document.table.rows.iter().enumerate() {
        lines.push(row_line(row, &widths));
        if index + 1 == document.table.header_rows {
            lines.push(separator.clone());
        }
    }
    lines.push(separator);
    lines.push(String::new());

    lines.extend(document.signature.iter().map(|line| line.text.clone()));

    let mut text = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

fn column_widths(rows: &[TableRow]) -> [usize; 3] {
    let mut widths = [0usize; 3];
    for row in rows {
        for (column, cell) in row.cells.iter().enumerate() {
            if cell.col_span == 1 {
                widths[column] = widths[column].max(text_len(cell));
            }
        }
    }
    // Spanned cells widen the last column they cover
    for row in rows {
        for (column, cell) in row.cells.iter().enumerate() {
            if cell.col_span > 1 {
                let end = (column + cell.col_span).min(widths.len());
                let available = span_width(&widths[column..end]);
                if text_len(cell) > available {
                    widths[end - 1] += text_len(cell) - available;
                }
            }
        }
    }
    widths
}

fn span_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)
}

fn text_len(cell: &Cell) -> usize {
    cell.text.chars().count()
}

fn row_line(row: &TableRow, widths: &[usize; 3]) -> String {
    let mut parts = Vec::new();
    for (column, cell) in row.cells.iter().enumerate() {
        if cell.is_covered() {
            continue;
        }
        let end = (column + cell.col_span).min(widths.len());
        parts.push(pad(&cell.text, span_width(&widths[column..end]), cell.alignment));
    }
    format!("| {} |", parts.join(" | "))
}

fn separator_line(widths: &[usize; 3]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", dashes.join("+"))
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let gap = width - len;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(gap)),
        Alignment::Right => format!("{}{}", " ".repeat(gap), text),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

/// Replace characters that are unsafe in file names
pub fn sanitize_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | ' ') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "invoice".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sink writing each document as a `.txt` file into a directory
///
/// Writes go through `tokio::fs`, so rendering must happen inside a Tokio
/// runtime and never blocks the executor thread.
#[derive(Debug, Clone)]
pub struct TextFileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl TextFileSink {
    /// Create a sink writing into `dir`, created on first render
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

#[async_trait]
impl DocumentSink for TextFileSink {
    async fn render(&mut self, document: &Document, file_stem: &str) -> InvoiceResult<()> {
        let path = self
            .dir
            .join(format!("{}.txt", sanitize_file_stem(file_stem)));
        let text = render_text(document);
        let written = match tokio::fs::create_dir_all(&self.dir).await {
            Ok(()) => tokio::fs::write(&path, text).await,
            Err(e) => Err(e),
        };
        written.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to write document");
            InvoiceError::Render(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "document written");
        self.written.push(path);
        Ok(())
    }
}
