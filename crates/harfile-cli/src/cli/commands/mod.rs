//! CLI command handlers, one file per subcommand.

mod bench;
mod config;
mod write;

pub use bench::run_bench;
pub use config::run_config;
pub use write::{run_write, WriteOptions};

#[cfg(test)]
pub(crate) use write::stream_entries;
