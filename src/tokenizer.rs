use tracing::debug;

use crate::error::{ImportError, Result};
use crate::models::RawRow;

const BOM: char = '\u{feff}';

/// Split CSV text into rows of fields.
///
/// Quoted fields may hold commas, newlines and doubled quotes. Blank lines and
/// rows whose every field is blank are dropped. An unterminated quote fails the
/// whole text.
pub fn tokenize(text: &str) -> Result<Vec<RawRow>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    check_quotes(text)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            debug!(line = record.position().map(|p| p.line()), "skipping blank row");
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Fails with the line of the first quoted field that never closes.
fn check_quotes(text: &str) -> Result<()> {
    let mut line = 1usize;
    let mut field_start = true;
    let mut open_line: Option<usize> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if open_line.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => {
                    open_line = None;
                    field_start = false;
                }
                '\n' => line += 1,
                '\r' if chars.peek() != Some(&'\n') => line += 1,
                _ => {}
            }
            continue;
        }
        match c {
            '"' if field_start => open_line = Some(line),
            ',' => field_start = true,
            '\n' => {
                line += 1;
                field_start = true;
            }
            // A lone CR ends a record; CRLF is counted on its LF.
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    line += 1;
                }
                field_start = true;
            }
            _ => field_start = false,
        }
    }

    match open_line {
        Some(line) => Err(ImportError::UnterminatedQuote(line)),
        None => Ok(()),
    }
}
