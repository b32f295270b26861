/// Symbol shown before the amount for currencies the formats deal in.
fn symbol(currency: &str) -> &'static str {
    match currency.to_ascii_uppercase().as_str() {
        "CAD" | "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => "",
    }
}

/// Format an amount for the review table: -$1,234.56 CAD
///
/// Works on whole cents so that values rounding to zero never print as "-0.00".
pub fn money(val: f64, currency: &str) -> String {
    let cents = (val * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let digits = (cents / 100).to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    let code = currency.trim().to_ascii_uppercase();
    format!("{sign}{}{grouped}.{:02} {code}", symbol(&code), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "CAD"), "$1,234.56 CAD");
        assert_eq!(money(-16.61, "cad"), "-$16.61 CAD");
        assert_eq!(money(0.0, "USD"), "$0.00 USD");
        assert_eq!(money(1000000.99, "CAD"), "$1,000,000.99 CAD");
        assert_eq!(money(5300.0, "EUR"), "€5,300.00 EUR");
        assert_eq!(money(42.1, "CHF"), "42.10 CHF");
    }

    #[test]
    fn test_money_never_prints_negative_zero() {
        assert_eq!(money(-0.004, "CAD"), "$0.00 CAD");
        assert_eq!(money(-0.005, "CAD"), "-$0.01 CAD");
    }
}
