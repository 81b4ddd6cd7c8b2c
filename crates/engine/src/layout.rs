use lsl_fs::{FileRecord, IdentityResolver};

/// Minimum widths that align the variable-length columns of one listing.
///
/// `owner` and `group` include one extra column that doubles as the
/// separator in front of the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub links: usize,
    pub size: usize,
    pub owner: usize,
    pub group: usize,
}

impl ColumnWidths {
    /// Single pass over `records`. An empty slice yields all zeros.
    pub fn measure<R: IdentityResolver + ?Sized>(records: &[FileRecord], ids: &R) -> Self {
        let mut widths = ColumnWidths::default();

        for rec in records {
            widths.links = widths.links.max(decimal_width(rec.nlink));
            widths.size = widths.size.max(decimal_width(rec.size));
            widths.owner = widths.owner.max(display_width(&ids.user_name(rec.uid)) + 1);
            widths.group = widths.group.max(display_width(&ids.group_name(rec.gid)) + 1);
        }

        widths
    }
}

/// Number of decimal digits needed to print `n`; zero takes one digit.
pub fn decimal_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Width as counted by `format!` padding.
#[inline]
fn display_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
