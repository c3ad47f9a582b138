#[cfg(feature = "cli")]
pub mod cli;

use std::collections::HashMap;
use std::ffi::OsString;

pub const DEFAULT_PROJECT_ID: &str = "demo-project";
pub const DEFAULT_DATASET: &str = "sales_data";
pub const DEFAULT_INPUT_TABLE: &str = "staging_raw_transactions";
pub const DEFAULT_OUTPUT_TABLE: &str = "transformed_sales";
pub const DEFAULT_EXECUTION_ID: &str = "local-run";
pub const DEFAULT_PIPELINE_NAME: &str = "daily_etl";
pub const DEFAULT_TASK_NAME: &str = "transform";

/// Older Cloud Functions runtimes export the project under this name.
pub const LEGACY_PROJECT_VAR: &str = "GCP_PROJECT";

/// Point-in-time copy of the environment variables the task reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Build from raw OS pairs. Invalid UTF-8 is replaced with U+FFFD
    /// instead of dropping the variable.
    pub fn from_os_vars<I: IntoIterator<Item = (OsString, OsString)>>(vars: I) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| {
                    (
                        k.to_string_lossy().into_owned(),
                        v.to_string_lossy().into_owned(),
                    )
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Table names supplied by the caller. These win over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOverrides {
    pub input_table: Option<String>,
    pub output_table: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    pub project_id: String,
    pub dataset: String,
    pub input_table: String,
    pub output_table: String,
    pub execution_id: String,
    pub pipeline_name: String,
    pub task_name: String,
}

impl TaskConfig {
    /// Resolve every option as caller override, then environment, then default.
    ///
    /// A variable that is present is used as-is, including the empty string.
    pub fn resolve(env: &EnvSnapshot, overrides: &TableOverrides) -> Self {
        let var = |name: &str, default: &str| env.get(name).unwrap_or(default).to_string();
        let table = |given: &Option<String>, name: &str, default: &str| {
            given.clone().unwrap_or_else(|| var(name, default))
        };

        let project_id = env
            .get("PROJECT_ID")
            .or_else(|| env.get(LEGACY_PROJECT_VAR))
            .unwrap_or(DEFAULT_PROJECT_ID)
            .to_string();

        Self {
            project_id,
            dataset: var("DATASET", DEFAULT_DATASET),
            input_table: table(&overrides.input_table, "INPUT_TABLE", DEFAULT_INPUT_TABLE),
            output_table: table(&overrides.output_table, "OUTPUT_TABLE", DEFAULT_OUTPUT_TABLE),
            execution_id: var("EXECUTION_ID", DEFAULT_EXECUTION_ID),
            pipeline_name: var("PIPELINE_NAME", DEFAULT_PIPELINE_NAME),
            task_name: var("TASK_NAME", DEFAULT_TASK_NAME),
        }
    }

    pub fn from_env(overrides: &TableOverrides) -> Self {
        Self::resolve(&EnvSnapshot::capture(), overrides)
    }

    /// Labelled values in the order they are reported.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Project ID", self.project_id.as_str()),
            ("Dataset", self.dataset.as_str()),
            ("Input Table", self.input_table.as_str()),
            ("Output Table", self.output_table.as_str()),
            ("Execution ID", self.execution_id.as_str()),
            ("Pipeline", self.pipeline_name.as_str()),
            ("Task", self.task_name.as_str()),
        ]
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self::resolve(&EnvSnapshot::default(), &TableOverrides::default())
    }
}
