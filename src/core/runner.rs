use std::io::Write;

use tracing::Dispatch;

use crate::config::TaskConfig;
use crate::core::transform::SalesTransform;
use crate::core::{PipelineTask, TransformResult};
use crate::utils::error::Result;

/// Runs a task under an injected logging sink and prints its result.
pub struct TaskRunner<T: PipelineTask> {
    task: T,
    dispatch: Dispatch,
}

impl<T: PipelineTask> TaskRunner<T> {
    pub fn new(task: T, dispatch: Dispatch) -> Self {
        Self { task, dispatch }
    }

    /// Execute the task, then write its output to `out` as two-space
    /// indented JSON followed by a newline.
    pub fn run<W: Write>(&self, config: &TaskConfig, out: &mut W) -> Result<T::Output> {
        let output = tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::debug!("Running task {}", self.task.name());
            self.task.execute(config)
        })?;

        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        out.flush()?;

        Ok(output)
    }
}

/// Run the sales transform once: log to `dispatch`, print to `out`.
pub fn run_transform<W: Write>(
    config: &TaskConfig,
    dispatch: Dispatch,
    out: &mut W,
) -> Result<TransformResult> {
    TaskRunner::new(SalesTransform::new(), dispatch).run(config, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::{build_dispatch, LogSettings};

    #[test]
    fn test_run_prints_result_and_returns_it() {
        let dispatch = build_dispatch(&LogSettings::default(), std::io::sink);
        let mut out = Vec::new();

        let result = run_transform(&TaskConfig::default(), dispatch, &mut out).unwrap();

        let printed: TransformResult = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, result);
        assert!(out.ends_with(b"}\n"));
        assert!(!String::from_utf8(out).unwrap().contains("Step 1"));
    }

    #[test]
    fn test_output_layout() {
        let dispatch = build_dispatch(&LogSettings::default(), std::io::sink);
        let mut out = Vec::new();

        run_transform(&TaskConfig::default(), dispatch, &mut out).unwrap();

        let expected = r#"{
  "status": "success",
  "records_input": 1250,
  "records_output": 1248,
  "validation_passed": true,
  "duration_seconds": 12.8,
  "metrics": {
    "total_revenue": 125847.5,
    "total_tax": 8809.33,
    "unique_customers": 342,
    "bulk_orders": 28,
    "high_value_orders": 15
  },
  "execution_id": "local-run",
  "demo_mode": true
}
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let dispatch = build_dispatch(&LogSettings::default(), std::io::sink);
        let runner = TaskRunner::new(SalesTransform::new(), dispatch);
        let config = TaskConfig::default();

        let mut first = Vec::new();
        let mut second = Vec::new();
        runner.run(&config, &mut first).unwrap();
        runner.run(&config, &mut second).unwrap();

        assert_eq!(first, second);
    }
}
