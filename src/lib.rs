pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{EnvSnapshot, TableOverrides, TaskConfig};
pub use core::{
    runner::{run_transform, TaskRunner},
    transform::SalesTransform,
};
pub use domain::model::{SalesMetrics, TaskStatus, TransformResult};
pub use utils::error::{Result, TransformError};
