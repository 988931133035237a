// Copyright (C) 2020-2026 Andy Kurnia.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, opt_format};

// RUST_LOG wins over default_level. Logs go to stderr, or to rotating files
// under log_dir when one is given. Keep the handle alive until exit.
pub fn setup_logging(
    default_level: &str,
    log_dir: Option<&std::path::Path>,
) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_level)?.format(opt_format);
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start(),
        None => logger.start(),
    }
}
