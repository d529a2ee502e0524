//! Dependency-installer adapters.

mod command;
mod noop;

pub use command::CommandInstaller;
pub use noop::NoopInstaller;
