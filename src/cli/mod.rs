//! Command-line interface module.

mod args;
pub mod head;
pub mod init;
pub mod projects;
pub mod serve;
pub mod spy;

pub use args::{Cli, Commands, HeadArgs, SpyArgs};
