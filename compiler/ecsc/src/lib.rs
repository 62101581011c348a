//! ECS driver: the embedding [`Session`] and the `ecs` command handlers.

pub mod commands;
mod session;

use std::sync::Once;

pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `ECS_LOG=ecs_eval=trace` (any
/// `EnvFilter` directive works); output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("ECS_LOG") else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::new(directives))
            .try_init();
        if let Err(error) = installed {
            eprintln!("warning: tracing not installed: {error}");
        }
    });
}
