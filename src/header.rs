/// Exact, order- and case-sensitive comparison of a header row.
pub fn validate_header<S: AsRef<str>>(actual: &[S], expected: &[&str]) -> bool {
    actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(a, e)| a.as_ref() == *e)
}

/// Base errors for a header mismatch.
///
/// The first entry names both headers. One further entry per data row keeps
/// `base.len()` equal to the file's row count, which existing consumers rely on.
pub fn mismatch_errors<S: AsRef<str>>(actual: &[S], expected: &[&str], total_rows: usize) -> Vec<String> {
    let actual: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
    let mut errors = Vec::with_capacity(total_rows.max(1));
    errors.push(format!(
        "Invalid header. Expected [{}] but found [{}]",
        expected.join(","),
        actual.join(",")
    ));
    for row in 1..total_rows {
        errors.push(format!("Row {row} not imported: invalid header"));
    }
    errors
}
