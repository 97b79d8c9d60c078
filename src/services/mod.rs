//! Process-level services: clock, log locations and log setup

pub mod log_dirs;
pub mod time_source;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
