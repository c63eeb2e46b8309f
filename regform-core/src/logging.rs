//! src/logging.rs
//! ============================================================================
//! # Logger: Tracing Subscriber Setup
//!
//! File-first logging so diagnostics never bleed into the terminal the form
//! is drawn on: a daily rolling appender under `logs/`, plus an optional
//! stderr layer enabled with `REGFORM_LOG_STDERR=1` for live debugging.
//! `RUST_LOG` filters both layers; the default level is `info`.

use std::{fs, path::Path};

use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    prelude::*,
};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`.
    pub fn init_tracing() {
        let log_dir: &Path = Path::new("logs");
        fs::create_dir_all(log_dir).expect("cannot create logs dir");

        // daily rolling file appender -> logs/regform-YYYY-MM-DD.log
        let file: RollingFileAppender = daily("logs", "regform");

        let file_layer = fmt::layer()
            .event_format(CompactLine)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(env_filter());

        let stderr_layer = std::env::var_os("REGFORM_LOG_STDERR").map(|_| {
            fmt::layer()
                .event_format(CompactLine)
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_filter(env_filter())
        });

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .init();
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive("info".parse().expect("static directive"))
}

/// Custom formatter: `HH:MM:SS.mmm LEVEL [target] message`
struct CompactLine;

impl<S, N> FormatEvent<S, N> for CompactLine
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta: &'static Metadata<'static> = ev.metadata();
        let now = chrono::Local::now();

        write!(
            w,
            "{} {:5} [{}] ",
            now.format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}
