use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use ledger_import::error::{ImportError, Result};
use ledger_import::fmt::money;
use ledger_import::formats::get_by_key;
use ledger_import::models::Account;
use ledger_import::parser::CsvParser;
use ledger_import::review::{summarize, ImportStatus};
use ledger_import::settings::load_settings;

pub async fn run(
    file: &Path,
    format: Option<&str>,
    account_id: i64,
    currency: Option<&str>,
    json: bool,
) -> Result<ImportStatus> {
    let settings = load_settings();
    let key = format
        .map(str::to_string)
        .or(settings.default_format)
        .ok_or(ImportError::MissingFormat)?;
    let format = get_by_key(&key).ok_or(ImportError::UnknownFormat(key))?;
    let account = Account::new(account_id, currency.unwrap_or(&settings.default_currency));

    let result = CsvParser::new(format).parse(file, &account).await?;
    let review = summarize(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(review.status);
    }

    if review.status == ImportStatus::Unusable {
        println!("{}", format!("Cannot import {} as {}", file.display(), format.name()).red().bold());
        for msg in &review.base_errors {
            println!("  {msg}");
        }
        return Ok(review.status);
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount"]);
    for row in &review.rows {
        let amount = money(row.amount, &account.currency);
        let amount = if row.amount < 0.0 {
            amount.red().to_string()
        } else {
            amount.green().to_string()
        };
        table.add_row(vec![
            Cell::new(&row.date),
            Cell::new(&row.description),
            Cell::new(amount),
        ]);
    }
    println!("{} ({})\n{table}", format.name(), file.display());
    println!(
        "{} transactions, net {}",
        review.rows.len(),
        money(review.total, &account.currency)
    );

    if review.status == ImportStatus::Partial {
        println!("{}", format!("{} rows could not be read:", review.row_errors.len()).yellow().bold());
        for err in &review.row_errors {
            println!("  row {}: {}", err.row, err.messages.join("; "));
        }
    }
    Ok(review.status)
}
