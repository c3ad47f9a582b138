use std::fmt;

use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    /// `timestamp - logger - LEVEL - message`
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub verbose: bool,
    pub format: LogFormat,
    pub ansi: bool,
    /// Extra `EnvFilter` directives, e.g. the value of `RUST_LOG`.
    pub directives: Option<String>,
}

/// Local wall-clock time as `2024-05-01 09:30:12,345`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

/// Renders events as `timestamp - target - LEVEL - message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashSeparated {
    timer: LocalTimestamp,
}

impl<S, N> FormatEvent<S, N> for DashSeparated
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        self.timer.format_time(&mut writer)?;
        write!(writer, " - {} - {} - ", meta.target(), meta.level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Target prefix of every event this crate emits.
pub const CRATE_TARGET: &str = "sales_transform";

/// Filter directives for `settings`.
///
/// Caller directives only reach other targets. This crate's own events stay
/// at `info` (`debug` when verbose) whatever the caller passes.
pub fn filter_directives(settings: &LogSettings) -> String {
    let crate_level = if settings.verbose { "debug" } else { "info" };
    let own = format!("{}={}", CRATE_TARGET, crate_level);

    let mut directives: Vec<&str> = settings
        .directives
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !d.starts_with(CRATE_TARGET))
        .collect();
    if settings.directives.is_none() && settings.verbose {
        directives.push("info");
    }

    directives.push(&own);
    directives.join(",")
}

/// Build a logging sink writing to `make_writer`.
///
/// The returned dispatch is not installed globally; callers hand it to
/// [`crate::core::runner::TaskRunner`], which scopes it around the task.
pub fn build_dispatch<W>(settings: &LogSettings, make_writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::builder().parse_lossy(filter_directives(settings));

    match settings.format {
        LogFormat::Text => Dispatch::new(
            tracing_subscriber::registry().with(filter).with(
                tracing_subscriber::fmt::layer()
                    .with_writer(make_writer)
                    .with_ansi(settings.ansi)
                    .event_format(DashSeparated::default()),
            ),
        ),
        LogFormat::Json => Dispatch::new(
            tracing_subscriber::registry().with(filter).with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(LocalTimestamp)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_ansi(false)
                    .with_writer(make_writer),
            ),
        ),
    }
}

/// Sink for a CLI process: everything goes to stderr so stdout stays
/// reserved for the result document.
pub fn cli_dispatch(settings: &LogSettings) -> Dispatch {
    build_dispatch(settings, std::io::stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_only_enable_this_crate() {
        assert_eq!(filter_directives(&LogSettings::default()), "sales_transform=info");
    }

    #[test]
    fn test_verbose_directives() {
        let settings = LogSettings {
            verbose: true,
            ..LogSettings::default()
        };
        assert_eq!(filter_directives(&settings), "info,sales_transform=debug");
    }

    #[test]
    fn test_caller_directives_cannot_silence_this_crate() {
        let settings = LogSettings {
            directives: Some(
                "warn, sales_transform=error,sales_transform::core=off,hyper=debug".to_string(),
            ),
            ..LogSettings::default()
        };
        assert_eq!(
            filter_directives(&settings),
            "warn,hyper=debug,sales_transform=info"
        );
    }
}
