use std::path::PathBuf;

use bitflags::bitflags;

/// Mask selecting the file-type bits of a raw mode (`S_IFMT`).
const TYPE_MASK: u32 = 0o170_000;

/// Kind of filesystem object an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Unknown,
    Fifo,
    CharDevice,
    Directory,
    BlockDevice,
    Regular,
    Symlink,
    Socket,
    /// BSD union-mount whiteout. Never produced on Linux.
    Whiteout,
}

impl EntryType {
    /// Classify from the type bits of an lstat mode.
    pub fn from_mode(mode: u32) -> Self {
        match mode & TYPE_MASK {
            0o010_000 => EntryType::Fifo,
            0o020_000 => EntryType::CharDevice,
            0o040_000 => EntryType::Directory,
            0o060_000 => EntryType::BlockDevice,
            0o100_000 => EntryType::Regular,
            0o120_000 => EntryType::Symlink,
            0o140_000 => EntryType::Socket,
            0o160_000 => EntryType::Whiteout,
            _ => EntryType::Unknown,
        }
    }

    /// Leading character of a long-format line.
    pub fn glyph(self) -> char {
        match self {
            EntryType::Unknown => '?',
            EntryType::Fifo => 'p',
            EntryType::CharDevice => 'c',
            EntryType::Directory => 'd',
            EntryType::BlockDevice => 'b',
            EntryType::Regular => '-',
            EntryType::Symlink => 'l',
            EntryType::Socket => 's',
            EntryType::Whiteout => 'w',
        }
    }
}

bitflags! {
    /// The nine owner/group/other permission bits of a mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        const OWNER_READ  = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC  = 0o100;
        const GROUP_READ  = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC  = 0o010;
        const OTHER_READ  = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC  = 0o001;
    }
}

/// Glyph order matches the bit order from most significant down.
const PERMISSION_GLYPHS: [(Permissions, char); 9] = [
    (Permissions::OWNER_READ, 'r'),
    (Permissions::OWNER_WRITE, 'w'),
    (Permissions::OWNER_EXEC, 'x'),
    (Permissions::GROUP_READ, 'r'),
    (Permissions::GROUP_WRITE, 'w'),
    (Permissions::GROUP_EXEC, 'x'),
    (Permissions::OTHER_READ, 'r'),
    (Permissions::OTHER_WRITE, 'w'),
    (Permissions::OTHER_EXEC, 'x'),
];

impl Permissions {
    /// Keep only the rwx bits; type, setuid, setgid and sticky bits are dropped.
    pub fn from_mode(mode: u32) -> Self {
        Permissions::from_bits_truncate(mode)
    }

    /// Nine-character `rwxr-xr--` style rendering.
    pub fn symbolic(self) -> String {
        PERMISSION_GLYPHS
            .iter()
            .map(|&(bit, glyph)| if self.contains(bit) { glyph } else { '-' })
            .collect()
    }
}

/// One entry of the listed directory, as reported by a no-dereference stat.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Base directory joined with `name`
    pub full_path: PathBuf,
    /// File name, never empty and never starting with '.'
    pub name: String,
    pub entry_type: EntryType,
    /// Raw mode bits including the type bits
    pub mode: u32,
    /// Raw link text; `Some` exactly when `entry_type` is `Symlink`
    pub link_target: Option<String>,
    pub uid: u32,
    pub gid: u32,
    /// Hard link count
    pub nlink: u64,
    /// Size as reported by the filesystem
    pub size: u64,
    /// Last modification, seconds since the epoch
    pub mtime_secs: i64,
}

impl FileRecord {
    #[inline]
    pub fn permissions(&self) -> Permissions {
        Permissions::from_mode(self.mode)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
