//! Test logging shared by the engine's unit and integration tests.
//!
//! `TEST_LOG` picks the filter, falling back to `RUST_LOG` and then to
//! `"warn"`. Setting `TEST_LOG_FORMAT=json` switches to one JSON object per
//! event, which is easier to grep when a property test shrinks a long
//! placement trace.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

fn filter_directive(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the test subscriber once per process. Later calls are no-ops, and
/// a subscriber installed by someone else is left in place.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = filter_directive(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let format = LogFormat::from_env(std::env::var("TEST_LOG_FORMAT").ok().as_deref());

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time();
        let _ = match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };

        tracing::debug!(%directive, ?format, "rotation test logging ready");
    });
}
