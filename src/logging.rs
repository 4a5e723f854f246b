use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive. `--debug` wins over `--quiet`, which keeps only
/// errors.
pub fn default_directive(debug: bool, quiet: bool) -> &'static str {
    if debug {
        "unish=debug"
    } else if quiet {
        "unish=error"
    } else {
        "unish=warn"
    }
}

/// Installs the global stderr subscriber. `RUST_LOG` overrides the default
/// filter. Later calls do nothing.
pub fn init_tracing(debug: bool, quiet: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(debug, quiet)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "unish=warn");
        assert_eq!(default_directive(true, false), "unish=debug");
    }

    #[test]
    fn test_quiet_keeps_only_errors() {
        assert_eq!(default_directive(false, true), "unish=error");
        assert_eq!(default_directive(true, true), "unish=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false, false);
        init_tracing(true, true);
        tracing::debug!("still alive");
    }
}
