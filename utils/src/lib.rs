//! Shared utilities for the DPoS parameter tools.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_interval;
