//! In-memory repositories. State lives for the life of the store.

mod catalog;
mod directory;

pub use catalog::MemoryCatalogRepository;
pub use directory::MemoryDirectoryRepository;
