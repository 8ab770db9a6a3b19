use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber with the crate's default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("prorata_core=info".parse().unwrap());

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
