use std::{ops::Index, slice};

use lsl_runtime::RECORD_CHUNK;

use crate::record::FileRecord;

/// Ordered, growable sequence of records owned by one listing run.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<FileRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(RECORD_CHUNK),
        }
    }

    /// Append a record, growing capacity by a whole chunk when full.
    pub fn push(&mut self, record: FileRecord) {
        if self.records.len() == self.records.capacity() {
            self.records.reserve_exact(RECORD_CHUNK);
        }
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn iter(&self) -> slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[FileRecord] {
        &self.records
    }

    /// Mutable view for in-place reordering. Records cannot be added or removed through it.
    pub fn as_mut_slice(&mut self) -> &mut [FileRecord] {
        &mut self.records
    }
}

impl Index<usize> for RecordStore {
    type Output = FileRecord;

    fn index(&self, idx: usize) -> &FileRecord {
        &self.records[idx]
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a FileRecord;
    type IntoIter = slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<FileRecord> for RecordStore {
    fn extend<T: IntoIterator<Item = FileRecord>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
