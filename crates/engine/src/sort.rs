use std::cmp::Ordering;

use lsl_fs::FileRecord;

/// Byte-wise comparison after ASCII lowercasing, like `strcasecmp`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Order records by name, ignoring ASCII case.
///
/// The sort is unstable: names equal up to case may come out in either order.
pub fn sort_by_name(records: &mut [FileRecord]) {
    if records.len() < 2 {
        return;
    }
    records.sort_unstable_by(|a, b| compare_names(&a.name, &b.name));
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
