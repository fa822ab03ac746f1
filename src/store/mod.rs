pub mod medium;
pub mod store;

pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use store::{AddOutcome, PersistenceStore, SearchResults, StoreStats};
