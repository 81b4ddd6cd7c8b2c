mod collector;
mod error;
mod identity;
mod record;
mod store;

pub use collector::{collect, collect_parallel};
pub use error::ListError;
pub use identity::{CachedIdentity, IdentityResolver, StaticIdentity, SystemIdentity};
pub use record::{EntryType, FileRecord, Permissions};
pub use store::RecordStore;
