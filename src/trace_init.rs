//! Optional JSON trace output, compiled in with the `trace` feature.

use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

/// Keeps the background trace writer alive. Dropping it flushes pending lines
/// and stops the writer, so callers hold it for as long as they convert.
#[cfg(feature = "trace")]
pub type TraceGuard = tracing_appender::non_blocking::WorkerGuard;

#[cfg(not(feature = "trace"))]
#[derive(Debug)]
pub struct TraceGuard;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON writer for `pinyin-trace.jsonl` under `log_dir`. Returns the
/// writer guard on the first call and `None` afterwards.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let mut installed = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "pinyin-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pinyin_engine=debug")),
            )
            .init();
        installed = Some(guard);
    });
    installed
}

/// Without the `trace` feature there is nothing to install.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "trace"))]
    #[test]
    fn test_init_is_noop_without_feature() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_tracing(dir.path()).is_none());
        assert!(!dir.path().join("pinyin-trace.jsonl").exists());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_init_returns_guard_once() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing(dir.path());
        assert!(guard.is_some());
        assert!(init_tracing(dir.path()).is_none());
    }
}
