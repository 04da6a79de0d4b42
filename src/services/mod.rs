mod record_store;
mod file_store;
mod auth;
mod search;

pub use record_store::{RecordStore, RecordId};
pub use file_store::FileStore;
pub use search::{search_jobs, SearchOutcome};
