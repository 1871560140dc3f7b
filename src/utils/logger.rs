use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single lines.
    #[default]
    Compact,
    /// One JSON object per line, for log shippers.
    Json,
}

/// `RUST_LOG` wins; otherwise only this crate, at debug when verbose.
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("order_status_client=debug,info")
        } else {
            EnvFilter::new("order_status_client=info")
        }
    })
}

/// Output goes to stderr so stdout stays the command's result.
pub fn build_subscriber(
    verbose: bool,
    format: LogFormat,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let fmt_layer = match format {
        LogFormat::Compact => fmt_layer.compact().boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(fmt_layer)
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    build_subscriber(verbose, format).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_formats_accept_events() {
        for format in [LogFormat::Compact, LogFormat::Json] {
            tracing::subscriber::with_default(build_subscriber(true, format), || {
                tracing::debug!(customer_number = "C", "dispatching");
                tracing::info!("done");
            });
        }
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
