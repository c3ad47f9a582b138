use crate::config::TaskConfig;
use crate::utils::error::Result;
use serde::Serialize;

/// One step of a pipeline, run once per invocation against resolved config.
pub trait PipelineTask {
    type Output: Serialize;

    fn name(&self) -> &str;
    fn execute(&self, config: &TaskConfig) -> Result<Self::Output>;
}
