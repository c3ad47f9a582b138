pub mod runner;
pub mod transform;

pub use crate::domain::model::{SalesMetrics, TaskStatus, TransformResult};
pub use crate::domain::ports::PipelineTask;
pub use crate::utils::error::Result;
