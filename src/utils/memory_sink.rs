//! In-memory sink implementation for testing and previews

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::{Arc, RwLock};

use crate::document::Document;
use crate::traits::*;
use crate::types::*;

/// A document captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// File name the PDF backend would have produced
    pub file_name: String,
    pub document: Document,
    pub rendered_at: NaiveDateTime,
}

/// Sink that keeps every rendered document in memory
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rendered: Arc<RwLock<Vec<RenderedDocument>>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, oldest first
    pub fn rendered(&self) -> InvoiceResult<Vec<RenderedDocument>> {
        self.rendered
            .read()
            .map(|rendered| rendered.clone())
            .map_err(|e| InvoiceError::Render(e.to_string()))
    }

    /// Most recently rendered document
    pub fn last(&self) -> InvoiceResult<Option<RenderedDocument>> {
        Ok(self.rendered()?.pop())
    }

    /// Drop all captured documents
    pub fn clear(&self) -> InvoiceResult<()> {
        self.rendered
            .write()
            .map(|mut rendered| rendered.clear())
            .map_err(|e| InvoiceError::Render(e.to_string()))
    }
}

#[async_trait]
impl DocumentSink for MemorySink {
    async fn render(&mut self, document: &Document, file_stem: &str) -> InvoiceResult<()> {
        let entry = RenderedDocument {
            file_name: format!("{}.pdf", file_stem),
            document: document.clone(),
            rendered_at: chrono::Utc::now().naive_utc(),
        };
        self.rendered
            .write()
            .map_err(|e| InvoiceError::Render(e.to_string()))?
            .push(entry);
        Ok(())
    }
}
