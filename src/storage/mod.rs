//! Storage layer for the budget dashboard
//!
//! Two entries are persisted: the total budget and the expense collection.
//! The [`Persistence`] trait describes the contract; [`FileStorage`] keeps
//! them in the data directory with atomic writes and [`MemoryStorage`] keeps
//! them in process.

pub mod file_io;
pub mod files;
pub mod memory;
pub mod persistence;

pub use file_io::write_json_atomic;
pub use files::FileStorage;
pub use memory::MemoryStorage;
pub use persistence::Persistence;
