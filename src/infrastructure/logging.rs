//! Logging setup for beanfacts.
//!
//! Diagnostics go to stderr so they never mix with the fact tables.
//! `RUST_LOG` takes precedence over the CLI-selected level.

use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global subscriber. Only the first call has any effect.
pub fn init(debug: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "beanfacts=debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "beanfacts=debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }
}
