use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::formats::Format;
use crate::header::{mismatch_errors, validate_header};
use crate::ids::{IdGenerator, UuidIds};
use crate::models::{Account, ErrorSet, ParseResult};
use crate::processor::process_rows;
use crate::tokenizer::tokenize;

/// Entry point for one institution format. Holds nothing but the format, so
/// a single instance can serve any number of imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    format: Format,
}

impl CsvParser {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Read `path` and parse it for `account`, assigning random ids.
    ///
    /// Only a failure to read the file is returned as `Err`; everything wrong
    /// with its contents is reported inside the `ParseResult`.
    pub async fn parse(&self, path: impl AsRef<Path>, account: &Account) -> Result<ParseResult> {
        self.parse_with(path, account, &mut UuidIds).await
    }

    pub async fn parse_with(
        &self,
        path: impl AsRef<Path>,
        account: &Account,
        ids: &mut (dyn IdGenerator + Send),
    ) -> Result<ParseResult> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let Ok(text) = String::from_utf8(bytes) else {
            warn!(path = %path.as_ref().display(), "file is not UTF-8");
            return Ok(ParseResult::fatal(vec!["File is not valid UTF-8 text".to_string()]));
        };
        Ok(self.parse_text(&text, account, ids))
    }

    /// Tokenize, check the header, then map the data rows.
    pub fn parse_text(&self, text: &str, account: &Account, ids: &mut dyn IdGenerator) -> ParseResult {
        let rows = match tokenize(text) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(format = self.format.key(), "tokenize failed: {e}");
                return ParseResult::fatal(vec![e.to_string()]);
            }
        };

        let Some((header, data)) = rows.split_first() else {
            return ParseResult::fatal(vec!["File is empty".to_string()]);
        };

        let expected = self.format.expected_header();
        if !validate_header(header.as_slice(), expected) {
            warn!(format = self.format.key(), found = ?header, "header mismatch");
            return ParseResult::fatal(mismatch_errors(header.as_slice(), expected, rows.len()));
        }

        let outcome = process_rows(data, account, self.format, ids);
        info!(
            format = self.format.key(),
            account = account.id,
            rows = data.len(),
            imported = outcome.transactions.len(),
            rejected = outcome.errors.len(),
            "parsed statement"
        );
        ParseResult {
            transactions: outcome.transactions,
            errors: ErrorSet {
                base: Vec::new(),
                transactions: outcome.errors,
            },
        }
    }
}
