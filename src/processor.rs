use std::collections::BTreeMap;

use tracing::debug;

use crate::formats::Format;
use crate::ids::IdGenerator;
use crate::models::{Account, RawRow, TransactionDraft};

#[derive(Debug, Default)]
pub struct RowOutcome {
    pub transactions: Vec<TransactionDraft>,
    pub errors: BTreeMap<usize, Vec<String>>,
}

/// Map every data row (header already removed) independently.
///
/// Drafts keep source order. A failed row lands in `errors` under its index and
/// never stops the rows after it.
pub fn process_rows(
    rows: &[RawRow],
    account: &Account,
    format: Format,
    ids: &mut dyn IdGenerator,
) -> RowOutcome {
    let mut outcome = RowOutcome::default();
    for (index, fields) in rows.iter().enumerate() {
        match format.map_row(fields, account, ids) {
            Ok(draft) => outcome.transactions.push(draft),
            Err(messages) => {
                debug!(row = index, errors = ?messages, "row rejected");
                outcome.errors.insert(index, messages);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn rows(lines: &[&[&str]]) -> Vec<RawRow> {
        lines
            .iter()
            .map(|l| l.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_bad_row_does_not_stop_later_rows() {
        let data = rows(&[
            &["2024-01-01", "A", "1"],
            &["yesterday", "B", "2"],
            &["2024-01-03", "C", "3"],
        ]);
        let mut ids = SequentialIds::default();
        let outcome = process_rows(&data, &Account::new(9, "CAD"), Format::Generic, &mut ids);
        let descs: Vec<&str> = outcome.transactions.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descs, vec!["A", "C"]);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors.contains_key(&1));
        assert!(outcome.transactions.iter().all(|t| t.account_id == 9));
    }

    #[test]
    fn test_every_row_is_draft_or_error() {
        let data = rows(&[
            &["x", "", "1"],
            &["2024-01-02", "B", "zz"],
            &["2024-01-03", "C", "3"],
            &["2024-01-04", "D"],
        ]);
        let mut ids = SequentialIds::default();
        let outcome = process_rows(&data, &Account::new(1, "CAD"), Format::Generic, &mut ids);
        assert_eq!(outcome.transactions.len() + outcome.errors.len(), data.len());
        assert_eq!(outcome.errors.keys().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(outcome.errors[&0].len(), 2);
    }

    #[test]
    fn test_no_rows() {
        let mut ids = SequentialIds::default();
        let outcome = process_rows(&[], &Account::new(1, "CAD"), Format::Rbc, &mut ids);
        assert!(outcome.transactions.is_empty());
        assert!(outcome.errors.is_empty());
    }
}
