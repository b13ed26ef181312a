//! Fixed categorical code tables mirroring the label encoding applied when
//! the model was fit (alphabetical category ordering).

/// Code used for any value missing from its table. Unknown categories
/// degrade to this instead of failing; tightening the lookup would change
/// classification behavior relative to the training pipeline.
pub(crate) const FALLBACK_CODE: f64 = 0.0;

pub(crate) fn gender(raw: &str) -> f64 {
    lookup(&[("Female", 0.0), ("Male", 1.0), ("Other", 2.0)], raw)
}

pub(crate) fn marital_status(raw: &str) -> f64 {
    lookup(&[("Married", 0.0), ("Single", 1.0)], raw)
}

pub(crate) fn education(raw: &str) -> f64 {
    lookup(&[("Graduate", 0.0), ("Not Graduate", 1.0)], raw)
}

pub(crate) fn loan_type(raw: &str) -> f64 {
    lookup(&[("Secured", 0.0), ("Unsecured", 1.0)], raw)
}

pub(crate) fn co_applicant(raw: &str) -> f64 {
    lookup(&[("No", 0.0), ("Yes", 1.0)], raw)
}

/// Indicator column name for a nominal category, `<field>_<value>`, exactly
/// as the training-time dummy expansion named its columns.
pub(crate) fn indicator_column(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

fn lookup(table: &[(&str, f64)], raw: &str) -> f64 {
    table
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, code)| *code)
        .unwrap_or(FALLBACK_CODE)
}
