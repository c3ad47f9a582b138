use anyhow::Context;
use clap::Parser;
use sales_transform::utils::logger;
use sales_transform::{run_transform, CliArgs, EnvSnapshot, TaskConfig};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let env = EnvSnapshot::capture();

    // 日誌只初始化一次，並注入任務
    let dispatch = logger::cli_dispatch(&args.log_settings(&env));

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::debug!("CLI args: {:?}", args);
    });

    let config = TaskConfig::resolve(&env, &args.table_overrides());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_transform(&config, dispatch, &mut out).context("failed to emit transform result")?;

    Ok(())
}
