use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "lsl";
pub const PROGRAM_LOG_LEVEL: &str = "LSL_LOG_LEVEL";
/// Number of worker threads used to stat directory entries.
pub const PROGRAM_THREADS: &str = "LSL_THREADS";

/// Upper bound for `LSL_THREADS`; a single directory level never needs more.
pub const MAX_THREADS: usize = 64;

/// Record store capacity grows by this many records at a time.
pub const RECORD_CHUNK: usize = 100;

/// Batch size for sending records back from collector workers.
/// Larger batches reduce channel overhead but increase latency.
pub const BATCH_SIZE: usize = 64;

/// Usage line printed on a malformed invocation.
pub fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} -l [DIRECTORY]")
}

/// Message printed when the target directory cannot be opened.
pub const DIRECTORY_NOT_FOUND: &str = "Directory not found";

/// Directory listed when the user does not name one.
pub fn default_target_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Worker count for metadata collection, read from `LSL_THREADS`.
///
/// Missing or unparsable values mean sequential collection (1).
pub fn worker_threads() -> usize {
    std::env::var(PROGRAM_THREADS)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.clamp(1, MAX_THREADS))
        .unwrap_or(1)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
