use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use lsl_fs::{FileRecord, IdentityResolver};

use crate::layout::ColumnWidths;

/// Timestamps within the current year show the time of day.
const RECENT_FORMAT: &str = "%b %e %H:%M";
/// Older timestamps show the year instead, with a two-space gap.
const DATED_FORMAT: &str = "%b %e  %Y";

/// Convert epoch seconds to local time; out-of-range values clamp to the epoch.
fn local_time(secs: i64) -> DateTime<Local> {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local))
}

/// Render a modification time relative to `now`.
pub fn format_mtime(mtime_secs: i64, now: &DateTime<Local>) -> String {
    let mtime = local_time(mtime_secs);

    if mtime.year() == now.year() {
        mtime.format(RECENT_FORMAT).to_string()
    } else {
        mtime.format(DATED_FORMAT).to_string()
    }
}

/// Type glyph followed by the nine permission glyphs, e.g. `drwxr-xr-x`.
pub fn mode_string(record: &FileRecord) -> String {
    let mut out = String::with_capacity(10);
    out.push(record.entry_type.glyph());
    out.push_str(&record.permissions().symbolic());
    out
}

/// Format one long-format line (without the trailing newline).
///
/// Layout: `<mode> <links><owner><group> <size> <time> <name>[ -> <target>]`,
/// where owner and group are right-aligned in columns that already include
/// their leading separator.
pub fn render_line<R: IdentityResolver + ?Sized>(
    record: &FileRecord,
    widths: &ColumnWidths,
    ids: &R,
    now: &DateTime<Local>,
) -> String {
    let mut line = format!(
        "{mode} {links:>links_w$}{owner:>owner_w$}{group:>group_w$} {size:>size_w$} {time} {name}",
        mode = mode_string(record),
        links = record.nlink,
        owner = ids.user_name(record.uid),
        group = ids.group_name(record.gid),
        size = record.size,
        time = format_mtime(record.mtime_secs, now),
        name = record.name,
        links_w = widths.links,
        owner_w = widths.owner,
        group_w = widths.group,
        size_w = widths.size,
    );

    if let Some(target) = &record.link_target {
        line.push_str(" -> ");
        line.push_str(target);
    }

    line
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
