//! Hook-registry adapters.

mod json;
mod memory;

pub use json::{HOOKS_FILE_PATH, JsonHookRegistry};
pub use memory::MemoryHookRegistry;
