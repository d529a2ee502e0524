//! Filesystem access for patch targets and the hook document.
//!
//! `LocalFilesystem` is the production adapter; `MemoryFilesystem` backs
//! tests that assert on written bytes without touching a real tree.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
