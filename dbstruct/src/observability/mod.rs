//! Run-scoped logging
//!
//! Generation runs install their own subscriber instead of a process-wide
//! logger, so embedding applications keep control of their global one.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Environment variable selecting JSON log lines (`json`)
pub const LOG_FORMAT_ENV: &str = "DBSTRUCT_LOG_FORMAT";

/// Level directive for a run
///
/// `RUST_LOG` wins when set; otherwise `debug` for verbose runs and `warn`
/// for quiet ones.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,dbstruct=debug,dbstruct_cli=debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Install a subscriber for the current thread until the guard drops
///
/// # Example
///
/// ```rust
/// let _guard = dbstruct::observability::scoped(true);
/// tracing::debug!("visible for this run only");
/// ```
#[must_use]
pub fn scoped(verbose: bool) -> DefaultGuard {
    let filter = env_filter(verbose);
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
        tracing::subscriber::set_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr));
        tracing::subscriber::set_default(subscriber)
    }
}
