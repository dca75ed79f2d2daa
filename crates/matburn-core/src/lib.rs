// Domain modules
pub mod benchmark;
pub mod config;
pub mod error;
pub mod monitor;
pub mod stress;

pub use benchmark::{BenchmarkResult, BenchmarkRun};
pub use config::DefaultsConfig;
pub use error::{ApiError, Result};
pub use monitor::{MonitorState, ResourceSample, UsageStat};
pub use stress::{format_countdown, StressReport, StressRun};
