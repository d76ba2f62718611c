use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogFormat;

pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Write to stderr so stdout stays free for command output
    pub to_stderr: bool,
}

pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let writer = log_writer(config.to_stderr);

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_writer(writer),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_writer(writer),
                )
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

fn log_writer(to_stderr: bool) -> BoxMakeWriter {
    if to_stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layer_accepts_either_writer() {
        for to_stderr in [false, true] {
            let subscriber = tracing_subscriber::registry()
                .with(EnvFilter::new("info"))
                .with(fmt::layer().json().with_writer(log_writer(to_stderr)));

            tracing::subscriber::with_default(subscriber, || {
                tracing::info!(to_stderr, "writer selected");
            });
        }
    }
}
