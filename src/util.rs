use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use fern::log_file;
use log::{self, info};
use std::path::PathBuf;

/// Map the config's numeric loglevel onto a filter. Anything above 5 is
/// as pedantic as it gets.
pub fn level_filter(loglevel: usize) -> log::LevelFilter {
    match loglevel {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Diagnostics go to stderr (stdout carries the generated header), plus an
/// optional log file.
pub fn configure_logging(loglevel: log::LevelFilter, logfile: Option<PathBuf>) -> Result<()> {
    // Configure logger at runtime
    let colors = ColoredLevelConfig::new().debug(Color::Magenta);
    let fernlog = fern::Dispatch::new().level(loglevel).chain(
        fern::Dispatch::new()
            // Perform allocation-free log formatting
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                    colors.color(record.level()),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stderr()),
    );

    let fernlog = if let Some(logpath) = &logfile {
        fernlog.chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        humantime::format_rfc3339(std::time::SystemTime::now()),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(
                    log_file(logpath)
                        .with_context(|| format!("Could not use log file path {:?}", logpath))?,
                ),
        )
    } else {
        fernlog
    };

    fernlog.apply().context("Logger was already configured")?;
    if let Some(logpath) = logfile {
        info!("Logging to '{:?}'", logpath);
    }
    Ok(())
}
