//! Tracing initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the test subscriber once per process.
///
/// Idempotent and race-safe: later calls are no-ops, and an already
/// installed global subscriber is tolerated rather than panicked on.
/// Filter directives come from `TEST_LOG`, then `RUST_LOG`, then default
/// to quiet.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directives = ["TEST_LOG", "RUST_LOG"]
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
