//! Port traits defining external boundaries.
//!
//! The only boundary is file access; implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
