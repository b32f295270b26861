use chrono::{DateTime, Utc};

use crate::models::ParseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    /// Every row became a draft.
    Clean,
    /// Some rows failed; the rest can still be confirmed.
    Partial,
    /// Whole-file failure; nothing to confirm.
    Unusable,
}

pub struct ReviewRow {
    pub date: String,
    pub description: String,
    pub amount: f64,
}

pub struct RowError {
    /// Position of the record among the kept data rows, starting at 1.
    /// Blank rows are not counted and a quoted field may span lines, so this
    /// is not a physical line number.
    pub row: usize,
    pub messages: Vec<String>,
}

pub struct ImportReview {
    pub status: ImportStatus,
    pub rows: Vec<ReviewRow>,
    pub base_errors: Vec<String>,
    pub row_errors: Vec<RowError>,
    pub total: f64,
}

pub fn summarize(result: &ParseResult) -> ImportReview {
    let status = if result.is_unusable() {
        ImportStatus::Unusable
    } else if result.has_row_errors() {
        ImportStatus::Partial
    } else {
        ImportStatus::Clean
    };

    let rows: Vec<ReviewRow> = result
        .transactions
        .iter()
        .map(|t| ReviewRow {
            date: DateTime::<Utc>::from_timestamp_millis(t.created_at)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            description: t.description.clone(),
            amount: t.amount,
        })
        .collect();
    let total = rows.iter().map(|r| r.amount).sum();

    let row_errors = result
        .errors
        .transactions
        .iter()
        .map(|(index, messages)| RowError {
            row: index + 1,
            messages: messages.clone(),
        })
        .collect();

    ImportReview {
        status,
        rows,
        base_errors: result.errors.base.clone(),
        row_errors,
        total,
    }
}
