//! Ordered row collections with stable identifiers

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Anything stored in a [`RowBook`]
pub trait Row {
    /// Identifier of this row
    fn id(&self) -> RowId;
}

impl Row for ChargeRow {
    fn id(&self) -> RowId {
        self.id
    }
}

impl Row for AdjustmentRow {
    fn id(&self) -> RowId {
        self.id
    }
}

/// Monotonic id source owned by a row book
///
/// Ids are never handed out twice, even after the highest row is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: RowId,
}

impl IdSequence {
    /// Start a sequence after the largest existing id
    pub fn after<I: IntoIterator<Item = RowId>>(existing: I) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Peek at the id the next call to [`IdSequence::next_id`] returns
    pub fn peek(&self) -> RowId {
        self.next
    }

    /// Take the next id
    pub fn next_id(&mut self) -> RowId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

/// Ordered collection of rows; insertion order is display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowBook<R> {
    rows: Vec<R>,
    ids: IdSequence,
}

impl<R: Row> RowBook<R> {
    /// Create an empty row book
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            ids: IdSequence::default(),
        }
    }

    /// Seed a row book; new ids continue after the largest seeded id
    pub fn from_rows(rows: Vec<R>) -> Self {
        let ids = IdSequence::after(rows.iter().map(Row::id));
        Self { rows, ids }
    }

    /// Current rows in display order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by id
    pub fn get(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Append a row built from the next id
    pub fn push(&mut self, build: impl FnOnce(RowId) -> R) -> RowId {
        let id = self.ids.next_id();
        self.rows.push(build(id));
        tracing::debug!(row_id = id, rows = self.rows.len(), "row appended");
        id
    }

    /// Edit a row in place
    pub fn update(&mut self, id: RowId, edit: impl FnOnce(&mut R)) -> InvoiceResult<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(InvoiceError::RowNotFound(id))?;
        edit(row);
        Ok(())
    }

    /// Remove a row, keeping the order of the rest
    pub fn remove(&mut self, id: RowId) -> InvoiceResult<R> {
        let index = self
            .rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(InvoiceError::RowNotFound(id))?;
        let removed = self.rows.remove(index);
        tracing::debug!(row_id = id, rows = self.rows.len(), "row removed");
        Ok(removed)
    }
}

impl<R: Row> Default for RowBook<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl RowBook<ChargeRow> {
    /// Append a blank "New Item" charge labelled after its id
    pub fn append_default(&mut self) -> RowId {
        self.push(|id| {
            ChargeRow::new(id, Some(format!("{:02}", id)), "New Item".to_string(), 0)
        })
    }

    /// Append a charge with the given description and amount
    pub fn append(&mut self, description: &str, amount: impl Into<Amount>) -> RowId {
        let amount = amount.into();
        self.push(|id| {
            ChargeRow::new(id, Some(format!("{:02}", id)), description.to_string(), amount)
        })
    }
}

impl RowBook<AdjustmentRow> {
    /// Append a zero-amount adjustment of the given kind
    pub fn append_kind(&mut self, kind: AdjustmentKind) -> RowId {
        self.push(|id| AdjustmentRow::new(id, kind, kind.default_label().to_string(), 0))
    }

    /// Append an adjustment with the given label and amount
    pub fn append(
        &mut self,
        kind: AdjustmentKind,
        label: &str,
        amount: impl Into<Amount>,
    ) -> RowId {
        let amount = amount.into();
        self.push(|id| AdjustmentRow::new(id, kind, label.to_string(), amount))
    }

    /// Move a row between the addition and deduction buckets
    pub fn set_kind(&mut self, id: RowId, kind: AdjustmentKind) -> InvoiceResult<()> {
        self.update(id, |row| row.kind = kind)
    }
}
