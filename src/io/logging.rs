//! Logger setup for the command-line tool

use crate::io::error::{Result, WallError};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Log specification used when `RUST_LOG` is unset
pub const DEFAULT_LOG_SPEC: &str = "info, reqwest=warn, hyper=warn";

/// Size at which the log file is rotated
const LOG_ROTATE_BYTES: u64 = 64 * 1024;

/// Start logging to stderr, or to a rotating file in `log_dir` with warnings
/// duplicated to stderr
///
/// `quiet` lowers the default level to warnings. The returned handle must be
/// kept alive for the lifetime of the program.
///
/// # Errors
///
/// Returns `Logging` if the specification is invalid or the logger cannot start,
/// and `FileSystem` if the log directory cannot be created
pub fn init_logging(log_dir: Option<&Path>, quiet: bool) -> Result<LoggerHandle> {
    let spec = if quiet { "warn" } else { DEFAULT_LOG_SPEC };
    let logger = Logger::try_with_env_or_str(spec)?;

    let handle = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| WallError::FileSystem {
                path: dir.to_path_buf(),
                operation: "create log directory",
                source: e,
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename("jigsaw-wall")
                        .suffix("log")
                        .suppress_timestamp(),
                )
                .rotate(
                    Criterion::Size(LOG_ROTATE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(3),
                )
                .duplicate_to_stderr(Duplicate::Warn)
                .start()?
        }
        None => logger.log_to_stderr().start()?,
    };
    Ok(handle)
}
