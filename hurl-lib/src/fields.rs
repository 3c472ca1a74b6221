//! Turns the parallel key/value arrays of a submission into headers and body fields.

const BODY_METHODS: [&str; 3] = ["POST", "PUT", "PATCH"];

pub fn method_has_body(method: &str) -> bool {
    BODY_METHODS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(method))
}

/// Header assignments in submission order. Pairs without a value are dropped,
/// as is any key past the end of `vals`.
pub fn collect_headers(keys: &[String], vals: &[String]) -> Vec<(String, String)> {
    keys.iter()
        .zip(vals)
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Body fields for `method`, in order and with duplicates kept.
/// Only POST, PUT and PATCH carry fields; a pair missing its name or value is skipped.
pub fn collect_body_fields(
    method: &str,
    keys: &[String],
    vals: &[String],
) -> Vec<(String, String)> {
    if !method_has_body(method) {
        return Vec::new();
    }

    keys.iter()
        .zip(vals)
        .filter(|(name, value)| !name.is_empty() && !value.is_empty())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
