use super::*;
use lsl_fs::{EntryType, StaticIdentity};
use std::path::PathBuf;

fn record(name: &str, uid: u32, gid: u32, nlink: u64, size: u64) -> FileRecord {
    FileRecord {
        full_path: PathBuf::from(name),
        name: name.to_owned(),
        entry_type: EntryType::Regular,
        mode: 0o100_644,
        link_target: None,
        uid,
        gid,
        nlink,
        size,
        mtime_secs: 0,
    }
}

#[test]
fn decimal_width_cases() {
    let cases: &[(u64, usize)] = &[
        (0, 1),
        (1, 1),
        (9, 1),
        (10, 2),
        (99, 2),
        (100, 3),
        (1234, 4),
        (999_999, 6),
        (1_000_000, 7),
        (u64::MAX, 20),
    ];

    for (n, expected) in cases {
        assert_eq!(decimal_width(*n), *expected, "decimal_width({n})");
    }
}

#[test]
fn measure_empty_is_all_zero() {
    let ids = StaticIdentity::new();
    assert_eq!(ColumnWidths::measure(&[], &ids), ColumnWidths::default());
}

#[test]
fn measure_takes_maximum_of_each_column() {
    let ids = StaticIdentity::new()
        .with_user(0, "root")
        .with_user(1000, "alexandra")
        .with_group(0, "root")
        .with_group(100, "users");

    let records = vec![
        record("a", 0, 0, 1, 0),
        record("b", 1000, 100, 12, 1234),
        record("c", 0, 100, 3, 56),
    ];

    let widths = ColumnWidths::measure(&records, &ids);

    assert_eq!(
        widths,
        ColumnWidths {
            links: 2,
            size: 4,
            owner: "alexandra".len() + 1,
            group: "users".len() + 1,
        }
    );
}

#[test]
fn measure_unknown_ids_still_reserve_separator() {
    let ids = StaticIdentity::new();
    let widths = ColumnWidths::measure(&[record("x", 4242, 4242, 1, 7)], &ids);

    assert_eq!(widths.owner, 1);
    assert_eq!(widths.group, 1);
    assert_eq!(widths.links, 1);
    assert_eq!(widths.size, 1);
}
