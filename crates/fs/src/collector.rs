use std::{
    fs::{self, ReadDir},
    io,
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
    thread,
};

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, warn};
use lsl_runtime::BATCH_SIZE;

use crate::{
    error::ListError,
    record::{EntryType, FileRecord},
    store::RecordStore,
};

/// One directory entry waiting to be stat'ed.
struct PendingEntry {
    full_path: PathBuf,
    name: String,
}

/// Collect every visible entry of `dir` on the calling thread.
///
/// Entries whose name starts with '.' are skipped. Entries that vanish or
/// cannot be stat'ed between enumeration and inspection are skipped with a
/// warning.
pub fn collect(dir: &Path) -> Result<RecordStore, ListError> {
    let rd = open_dir(dir)?;
    let mut store = RecordStore::new();

    for pending in visible_entries(dir, rd) {
        if let Some(record) = inspect_logged(pending) {
            store.push(record);
        }
    }

    debug!("[collect] {} records from {:?}", store.len(), dir);
    Ok(store)
}

/// Collect `dir` with `threads` workers doing the per-entry stat calls.
///
/// Enumeration stays on the calling thread. The store is only assembled
/// once every worker has finished, so callers always see the full set.
/// Record order is unspecified.
pub fn collect_parallel(dir: &Path, threads: usize) -> Result<RecordStore, ListError> {
    if threads <= 1 {
        return collect(dir);
    }

    let rd = open_dir(dir)?;
    let (work_tx, work_rx) = channel::unbounded::<PendingEntry>();
    let (file_tx, file_rx) = channel::unbounded::<Vec<FileRecord>>();

    debug!("[collect_parallel] starting with {} threads", threads);

    thread::scope(|s| {
        for _thread_id in 0..threads {
            let work_rx = work_rx.clone();
            let file_tx = file_tx.clone();

            s.spawn(move || worker_loop(work_rx, file_tx));
        }

        for pending in visible_entries(dir, rd) {
            if work_tx.send(pending).is_err() {
                break;
            }
        }

        // Closing the queue lets workers drain it and exit.
        drop(work_tx);
    });

    drop(file_tx);

    let mut store = RecordStore::new();
    for batch in file_rx.iter() {
        store.extend(batch);
    }

    debug!("[collect_parallel] {} records from {:?}", store.len(), dir);
    Ok(store)
}

fn worker_loop(work_rx: Receiver<PendingEntry>, file_tx: Sender<Vec<FileRecord>>) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    for pending in work_rx.iter() {
        if let Some(record) = inspect_logged(pending) {
            batch.push(record);
        }

        if batch.len() >= BATCH_SIZE {
            let to_send = std::mem::take(&mut batch);
            if file_tx.send(to_send).is_err() {
                return;
            }
        }
    }

    if !batch.is_empty() {
        let _ = file_tx.send(batch);
    }
}

fn open_dir(dir: &Path) -> Result<ReadDir, ListError> {
    fs::read_dir(dir).map_err(|source| {
        debug!("[collect] read_dir({:?}) failed: {source}", dir);
        ListError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        }
    })
}

/// Enumerate `rd`, dropping hidden names and unreadable entries.
fn visible_entries(dir: &Path, rd: ReadDir) -> impl Iterator<Item = PendingEntry> + '_ {
    rd.filter_map(move |entry_res| {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[collect] error reading entry in {:?}: {e}", dir);
                return None;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            return None;
        }

        Some(PendingEntry {
            full_path: dir.join(entry.file_name()),
            name,
        })
    })
}

/// Dot-files, including `.` and `..`, are never listed.
#[inline]
fn is_hidden(name: &str) -> bool {
    name.is_empty() || name.starts_with('.')
}

fn inspect_logged(pending: PendingEntry) -> Option<FileRecord> {
    let path = pending.full_path.clone();
    match inspect_entry(pending) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("[collect] skipping {:?}: {e}", path);
            None
        }
    }
}

/// lstat one entry; symlinks are reported as themselves along with their raw text.
fn inspect_entry(pending: PendingEntry) -> io::Result<FileRecord> {
    let PendingEntry { full_path, name } = pending;
    let metadata = fs::symlink_metadata(&full_path)?;

    let mode = metadata.mode();
    let entry_type = EntryType::from_mode(mode);

    let link_target = if entry_type == EntryType::Symlink {
        let target = fs::read_link(&full_path)?;
        Some(target.to_string_lossy().into_owned())
    } else {
        None
    };

    Ok(FileRecord {
        full_path,
        name,
        entry_type,
        mode,
        link_target,
        uid: metadata.uid(),
        gid: metadata.gid(),
        nlink: metadata.nlink(),
        size: metadata.size(),
        mtime_secs: metadata.mtime(),
    })
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
