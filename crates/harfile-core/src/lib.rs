pub mod config;
pub mod logging;

pub mod bench;
pub mod model;
pub mod writer;

pub use writer::{HarError, HarGuard, HarWriter, HarWriterBuilder, HAR_VERSION};
