pub mod file_storage;
pub mod in_memory;
pub mod migration;

pub use file_storage::FileStorage;
pub use in_memory::InMemoryStorage;
