use crate::fields::{epoch_millis, parse_date_iso, parse_date_mdy, FieldErrors};
use crate::ids::IdGenerator;
use crate::models::{Account, TransactionDraft};

// ---------------------------------------------------------------------------
// Format kinds — enum dispatch instead of trait objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Rbc,
    Visa,
    Generic,
}

pub const ALL_FORMATS: &[Format] = &[Format::Rbc, Format::Visa, Format::Generic];

pub fn get_by_key(key: &str) -> Option<Format> {
    ALL_FORMATS
        .iter()
        .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
        .copied()
}

impl Format {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Rbc => "rbc",
            Self::Visa => "visa",
            Self::Generic => "generic",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rbc => "RBC Royal Bank",
            Self::Visa => "Visa Credit Card",
            Self::Generic => "Generic CSV",
        }
    }

    pub fn expected_header(&self) -> &'static [&'static str] {
        match self {
            Self::Rbc => RBC_HEADER,
            Self::Visa => VISA_HEADER,
            Self::Generic => GENERIC_HEADER,
        }
    }

    /// Map one data row. Every field violation is reported, not just the first.
    pub fn map_row(
        &self,
        fields: &[String],
        account: &Account,
        ids: &mut dyn IdGenerator,
    ) -> Result<TransactionDraft, Vec<String>> {
        let expected = self.expected_header().len();
        if fields.len() != expected {
            return Err(vec![format!(
                "Expected {expected} columns but found {}",
                fields.len()
            )]);
        }
        let mapped = match self {
            Self::Rbc => map_rbc(fields, account),
            Self::Visa => map_visa(fields),
            Self::Generic => map_generic(fields),
        }?;
        Ok(TransactionDraft {
            id: ids.next_id(),
            account_id: account.id,
            created_at: mapped.created_at,
            description: mapped.description,
            amount: mapped.amount,
        })
    }
}

struct Mapped {
    created_at: i64,
    description: String,
    amount: f64,
}

// ---------------------------------------------------------------------------
// RBC Royal Bank
// ---------------------------------------------------------------------------

const RBC_HEADER: &[&str] = &[
    "Account Type",
    "Account Number",
    "Transaction Date",
    "Cheque Number",
    "Description 1",
    "Description 2",
    "CAD$",
    "USD$",
];

/// Amount comes from the account currency's column, or the other one when
/// that is blank. Signs pass through: negative is a debit.
fn map_rbc(fields: &[String], account: &Account) -> Result<Mapped, Vec<String>> {
    let mut errors = FieldErrors::default();
    let date = errors.date("Transaction Date", &fields[2], "M/D/YYYY", parse_date_mdy);
    let desc = errors.required("Description 1", &fields[4]);

    let (cad, usd) = ((RBC_HEADER[6], &fields[6]), (RBC_HEADER[7], &fields[7]));
    let (preferred, fallback) = if account.is_currency("USD") {
        (usd, cad)
    } else {
        (cad, usd)
    };
    let amount = if !preferred.1.trim().is_empty() {
        errors.amount(preferred.0, preferred.1)
    } else if !fallback.1.trim().is_empty() {
        errors.amount(fallback.0, fallback.1)
    } else {
        errors.push("Missing amount: both \"CAD$\" and \"USD$\" are blank".to_string());
        None
    };

    let mapped = match (date, desc, amount) {
        (Some(date), Some(desc), Some(amount)) => Some(Mapped {
            created_at: epoch_millis(date),
            description: format!("{desc} - {desc}"),
            amount,
        }),
        _ => None,
    };
    errors.finish(mapped)
}

// ---------------------------------------------------------------------------
// Visa credit card
// ---------------------------------------------------------------------------

const VISA_HEADER: &[&str] = &[
    "Transaction Date",
    "Posting Date",
    "Description",
    "Type",
    "Amount",
];

/// `Type` carries the sign; `Amount` is a magnitude.
fn map_visa(fields: &[String]) -> Result<Mapped, Vec<String>> {
    let mut errors = FieldErrors::default();
    let date = errors.date("Transaction Date", &fields[0], "M/D/YYYY", parse_date_mdy);
    let desc = errors.required("Description", &fields[2]);
    let sign = match fields[3].trim().to_ascii_uppercase().as_str() {
        "D" | "DEBIT" => Some(-1.0),
        "C" | "CREDIT" => Some(1.0),
        "" => {
            errors.push("Missing value for \"Type\"".to_string());
            None
        }
        _ => {
            errors.push(format!(
                "Invalid type \"{}\" in \"Type\", expected D or C",
                fields[3].trim()
            ));
            None
        }
    };
    let magnitude = errors.amount("Amount", &fields[4]);

    let mapped = match (date, desc, sign, magnitude) {
        (Some(date), Some(desc), Some(sign), Some(magnitude)) => Some(Mapped {
            created_at: epoch_millis(date),
            description: desc.to_string(),
            amount: sign * magnitude.abs(),
        }),
        _ => None,
    };
    errors.finish(mapped)
}

// ---------------------------------------------------------------------------
// Generic CSV
// ---------------------------------------------------------------------------

const GENERIC_HEADER: &[&str] = &["Date", "Description", "Amount"];

fn map_generic(fields: &[String]) -> Result<Mapped, Vec<String>> {
    let mut errors = FieldErrors::default();
    let date = errors.date("Date", &fields[0], "YYYY-MM-DD", parse_date_iso);
    let desc = errors.required("Description", &fields[1]);
    let amount = errors.amount("Amount", &fields[2]);

    let mapped = match (date, desc, amount) {
        (Some(date), Some(desc), Some(amount)) => Some(Mapped {
            created_at: epoch_millis(date),
            description: desc.to_string(),
            amount,
        }),
        _ => None,
    };
    errors.finish(mapped)
}
