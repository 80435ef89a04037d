use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

/// Stdout carries the rendered document or query, so console logs never go there.
const CONSOLE_STREAM: StdStream = StdStream::Stderr;

fn add_console_sinks(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let console = Arc::new(StdStreamSink::builder()
        .std_stream(CONSOLE_STREAM)
        .level_filter(LevelFilter::All)
        .build()?);

    builder.sink(console);

    Ok(())
}

/// Installs the default logger described by `[log]`. Without it, a console
/// logger at `Info` is installed in place of spdlog's, which writes to stdout.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let mut builder = Logger::builder();

    let Some(ref log) = config.log else {
        add_console_sinks(&mut builder)?;
        let logger = Arc::new(builder.build()?);
        logger.set_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
        spdlog::set_default_logger(logger);
        return Ok(());
    };

    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(60)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }

    if log.log_to_console || log.location.is_none() {
        add_console_sinks(&mut builder)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.into()));

    spdlog::set_default_logger(logger);

    Ok(())
}
