//! Subscriber setup for binaries. Library code only emits events.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a global subscriber once.
///
/// With `log_dir`, events are written as JSON lines to
/// `<log_dir>/ipa-trace.jsonl`; otherwise human-readable to stderr.
/// `RUST_LOG` overrides the default `warn` filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "ipa-trace.jsonl");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // flushed for the life of the process

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter())
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(filter())
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
