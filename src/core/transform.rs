use crate::config::TaskConfig;
use crate::core::{PipelineTask, SalesMetrics, TaskStatus, TransformResult};
use crate::utils::error::Result;
use crate::utils::format::format_currency;

const INPUT_RECORDS: u64 = 1250;
// two records are dropped by validation
const OUTPUT_RECORDS: u64 = 1248;
const DURATION_SECONDS: f64 = 12.8;

pub const STEPS: [&str; 6] = [
    "Step 1: Loading data from staging table...",
    "Step 2: Calculating tax amounts...",
    "Step 3: Categorizing products...",
    "Step 4: Computing customer segments...",
    "Step 5: Validating output data...",
    "Step 6: Saving to destination table...",
];

/// Demo transform for the sales pipeline.
///
/// Nothing is read or written; the stages are only reported and the
/// returned figures are fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesTransform;

impl SalesTransform {
    pub fn new() -> Self {
        Self
    }

    fn demo_metrics() -> SalesMetrics {
        SalesMetrics {
            total_revenue: 125847.50,
            total_tax: 8809.33,
            unique_customers: 342,
            bulk_orders: 28,
            high_value_orders: 15,
        }
    }
}

impl PipelineTask for SalesTransform {
    type Output = TransformResult;

    fn name(&self) -> &str {
        "transform_sales"
    }

    fn execute(&self, config: &TaskConfig) -> Result<TransformResult> {
        tracing::info!("Starting sales transformation (demo mode)");

        tracing::info!("Configuration:");
        for (label, value) in config.fields() {
            tracing::info!("  {}: {}", label, value);
        }

        for step in STEPS {
            tracing::info!("{}", step);
        }

        let result = TransformResult {
            status: TaskStatus::Success,
            records_input: INPUT_RECORDS,
            records_output: OUTPUT_RECORDS,
            validation_passed: true,
            duration_seconds: DURATION_SECONDS,
            metrics: Self::demo_metrics(),
            execution_id: config.execution_id.clone(),
            demo_mode: true,
        };

        tracing::info!("Transformation completed successfully");
        tracing::info!(
            "Records processed: {} -> {}",
            result.records_input,
            result.records_output
        );
        tracing::info!(
            "Total revenue: {}",
            format_currency(result.metrics.total_revenue)
        );

        Ok(result)
    }
}
