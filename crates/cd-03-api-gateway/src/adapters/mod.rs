//! Adapters: error conversions and cross-crate port implementations.

pub mod error_conversions;
pub mod owner_directory;

pub use owner_directory::AccountDirectory;
