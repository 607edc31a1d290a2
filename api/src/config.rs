//! Process-level setup driven by configuration

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cl_shared::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;
    let registry = tracing_subscriber::registry().with(filter);
    let source = logging.source_location;

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_file(source).with_line_number(source))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(source).with_line_number(source))
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_file(source).with_line_number(source))
            .try_init()?,
    }

    Ok(())
}
