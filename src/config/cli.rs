use crate::config::{EnvSnapshot, TableOverrides};
use crate::utils::logger::{LogFormat, LogSettings};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sales-transform")]
#[command(about = "Transform step of the daily sales ETL pipeline (demo mode)")]
pub struct CliArgs {
    /// Staging table to read from (overrides INPUT_TABLE)
    #[arg(long)]
    pub input_table: Option<String>,

    /// Destination table to write to (overrides OUTPUT_TABLE)
    #[arg(long)]
    pub output_table: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CliArgs {
    pub fn table_overrides(&self) -> TableOverrides {
        TableOverrides {
            input_table: self.input_table.clone(),
            output_table: self.output_table.clone(),
        }
    }

    /// Sink settings; `RUST_LOG` from `env` adds filter directives.
    pub fn log_settings(&self, env: &EnvSnapshot) -> LogSettings {
        LogSettings {
            verbose: self.verbose,
            format: self.log_format,
            ansi: false,
            directives: env.get("RUST_LOG").map(str::to_string),
        }
    }
}
