// tracing subscriber setup for hosts embedding the emitter

use chrono::SecondsFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// RFC 3339 local time with millisecond precision, e.g. `2026-10-19T09:12:03.417+02:00`.
struct LocalRfc3339;

impl FormatTime for LocalRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.to_rfc3339_opts(SecondsFormat::Millis, false))
    }
}

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`; per-publish logs are
/// at `debug` under the `perf_stats_emitter` target).
/// Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalRfc3339)
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
