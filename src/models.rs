use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The account an import targets. Only the fields the parsers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub currency: String,
}

impl Account {
    pub fn new(id: i64, currency: &str) -> Self {
        Self {
            id,
            currency: currency.trim().to_uppercase(),
        }
    }

    pub fn is_currency(&self, code: &str) -> bool {
        self.currency.eq_ignore_ascii_case(code)
    }
}

/// One CSV record, header included, as tokenized.
pub type RawRow = Vec<String>;

/// A normalized transaction awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub id: String,
    pub account_id: i64,
    /// Epoch milliseconds at UTC midnight of the row's date.
    pub created_at: i64,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSet {
    /// Whole-file failures. Non-empty means no rows were processed.
    pub base: Vec<String>,
    /// Row failures keyed by data-row index (header excluded).
    pub transactions: BTreeMap<usize, Vec<String>>,
}

impl ErrorSet {
    pub fn fatal(base: Vec<String>) -> Self {
        Self {
            base,
            transactions: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.transactions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub transactions: Vec<TransactionDraft>,
    pub errors: ErrorSet,
}

impl ParseResult {
    pub fn fatal(base: Vec<String>) -> Self {
        Self {
            transactions: Vec::new(),
            errors: ErrorSet::fatal(base),
        }
    }

    /// True when the file cannot be imported at all.
    pub fn is_unusable(&self) -> bool {
        !self.errors.base.is_empty()
    }

    pub fn has_row_errors(&self) -> bool {
        !self.errors.transactions.is_empty()
    }
}
