use chrono::{NaiveDate, NaiveTime};

/// Parse `M/D/YYYY`; one- or two-digit month and day.
pub fn parse_date_mdy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3
        || parts[2].len() != 4
        || !parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let m: u32 = parts[0].parse().ok()?;
    let d: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date_iso(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Epoch milliseconds at UTC midnight.
pub fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Plain decimal parsing. No currency symbols, no thousands separators.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+')) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Collects per-field messages for one row.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    pub fn push(&mut self, message: String) {
        self.0.push(message);
    }

    pub fn required<'a>(&mut self, column: &str, raw: &'a str) -> Option<&'a str> {
        if is_blank(raw) {
            self.push(format!("Missing value for \"{column}\""));
            None
        } else {
            Some(raw.trim())
        }
    }

    pub fn date(
        &mut self,
        column: &str,
        raw: &str,
        expected: &str,
        parse: fn(&str) -> Option<NaiveDate>,
    ) -> Option<NaiveDate> {
        if is_blank(raw) {
            self.push(format!("Missing value for \"{column}\""));
            return None;
        }
        let date = parse(raw);
        if date.is_none() {
            self.push(format!(
                "Invalid date \"{}\" in \"{column}\", expected {expected}",
                raw.trim()
            ));
        }
        date
    }

    pub fn amount(&mut self, column: &str, raw: &str) -> Option<f64> {
        if is_blank(raw) {
            self.push(format!("Missing value for \"{column}\""));
            return None;
        }
        let amount = parse_decimal(raw);
        if amount.is_none() {
            self.push(format!("Invalid amount \"{}\" in \"{column}\"", raw.trim()));
        }
        amount
    }

    pub fn finish<T>(self, value: Option<T>) -> Result<T, Vec<String>> {
        match value {
            Some(v) if self.0.is_empty() => Ok(v),
            _ if self.0.is_empty() => Err(vec!["Row could not be mapped".to_string()]),
            _ => Err(self.0),
        }
    }
}
