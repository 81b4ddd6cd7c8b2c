mod config;
pub mod logging;

pub use config::{
    BATCH_SIZE, DIRECTORY_NOT_FOUND, MAX_THREADS, PROGRAM_LOG_LEVEL, PROGRAM_NAME,
    PROGRAM_THREADS, RECORD_CHUNK, default_target_dir, usage, worker_threads,
};

pub use logging::init;
