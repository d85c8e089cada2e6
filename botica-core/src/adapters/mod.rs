//! Adapter implementations (hexagonal architecture)

pub mod csv_file;
pub mod demo;
pub mod json_store;
pub mod memory;

pub use json_store::JsonFileRepository;
pub use memory::MemoryRepository;
