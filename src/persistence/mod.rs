pub mod documents;
pub mod files;

pub use documents::{JsonFiles, Persistence};
pub use files::{ensure_dir, get_data_dir, init_local_data_dir};

#[cfg(test)]
pub(crate) use documents::memory::MemoryPersistence;
