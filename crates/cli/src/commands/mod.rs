pub mod list;

use std::process::ExitCode;

/// Process outcome, kept separate from `ExitCode` so it can be compared in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Malformed invocation.
    Usage,
    /// The listing could not be produced or written.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Usage => ExitCode::from(1),
            Status::Failure => ExitCode::from(2),
        }
    }
}
