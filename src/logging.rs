//! Tracing subscriber setup for the CLI.

use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install a stderr subscriber filtered at `level`; `RUST_LOG` takes precedence.
///
/// Returns `false` if a global subscriber was already installed, which leaves that one in place.
pub fn init(level: &str, json: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = layer().with_writer(std::io::stderr).with_ansi(!json);
    let boxed = if json {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(boxed)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init("debug", false);
        assert!(!init("info", true));
    }
}
