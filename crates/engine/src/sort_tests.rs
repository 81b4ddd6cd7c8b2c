use super::*;
use lsl_fs::EntryType;
use std::path::PathBuf;

fn record(name: &str) -> FileRecord {
    FileRecord {
        full_path: PathBuf::from(name),
        name: name.to_owned(),
        entry_type: EntryType::Regular,
        mode: 0o100_644,
        link_target: None,
        uid: 0,
        gid: 0,
        nlink: 1,
        size: 0,
        mtime_secs: 0,
    }
}

fn sorted_names(names: &[&str]) -> Vec<String> {
    let mut records: Vec<FileRecord> = names.iter().map(|n| record(n)).collect();
    sort_by_name(&mut records);
    records.into_iter().map(|r| r.name).collect()
}

#[test]
fn compare_names_cases() {
    let cases: &[(&str, &str, Ordering)] = &[
        ("a", "b", Ordering::Less),
        ("A", "b", Ordering::Less),
        ("a", "B", Ordering::Less),
        ("README", "readme", Ordering::Equal),
        ("abc", "ab", Ordering::Greater),
        ("", "a", Ordering::Less),
        // '_' (0x5f) falls below every lowercase letter.
        ("_x", "a", Ordering::Less),
        ("Zeta", "alpha", Ordering::Greater),
    ];

    for (a, b, expected) in cases {
        assert_eq!(compare_names(a, b), *expected, "compare_names({a:?}, {b:?})");
    }
}

#[test]
fn sort_by_name_ignores_case() {
    assert_eq!(
        sorted_names(&["b.txt", "link", "A.txt", "Cargo.toml", "build"]),
        vec!["A.txt", "b.txt", "build", "Cargo.toml", "link"]
    );
}

#[test]
fn sort_by_name_output_is_folded_non_decreasing() {
    let out = sorted_names(&["x", "Y", "a", "B", "_", "0", "z9", "Z1"]);

    for pair in out.windows(2) {
        assert!(
            pair[0].to_ascii_lowercase() <= pair[1].to_ascii_lowercase(),
            "{:?} should not precede {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn sort_by_name_empty_and_singleton_are_noops() {
    assert!(sorted_names(&[]).is_empty());
    assert_eq!(sorted_names(&["only"]), vec!["only"]);
}
