use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMetrics {
    pub total_revenue: f64,
    pub total_tax: f64,
    pub unique_customers: u64,
    pub bulk_orders: u64,
    pub high_value_orders: u64,
}

/// Outcome of one transform invocation. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformResult {
    pub status: TaskStatus,
    pub records_input: u64,
    pub records_output: u64,
    pub validation_passed: bool,
    pub duration_seconds: f64,
    pub metrics: SalesMetrics,
    pub execution_id: String,
    pub demo_mode: bool,
}
