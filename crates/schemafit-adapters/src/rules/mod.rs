//! Patch-plan catalogs.

mod builtin;

pub use builtin::BuiltinRuleCatalog;
