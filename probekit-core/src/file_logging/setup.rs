use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;
use anyhow::{Context, Result};

/// Line layout used for log files.
pub const LOG_FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Builds a log4rs configuration writing everything at `log_level` or above to `log_file`.
///
/// Creates the parent directory and the file itself.
pub fn file_logging_config(log_file: &Path, log_level: LevelFilter) -> Result<Config> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory {}", parent.display())
            })?;
        }
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_FILE_PATTERN)))
        .build(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?;

    Ok(config)
}

/// Installs file logging as the global logger.
///
/// Fails if a logger has already been installed in this process.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    let config = file_logging_config(log_file, log_level)?;
    log4rs::init_config(config)?;
    Ok(())
}
