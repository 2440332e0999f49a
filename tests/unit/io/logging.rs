//! Tests for logger initialisation

#[cfg(test)]
mod tests {
    use jigsaw_wall::WallError;
    use jigsaw_wall::io::logging::{DEFAULT_LOG_SPEC, init_logging};
    use std::fs;
    use tempfile::TempDir;

    // Tests the default spec keeps HTTP internals quiet
    // Verified by logging reqwest at info
    #[test]
    fn test_default_spec() {
        assert!(DEFAULT_LOG_SPEC.starts_with("info"));
        assert!(DEFAULT_LOG_SPEC.contains("reqwest=warn"));
    }

    // Tests a log directory that is a file is reported as a file system error
    // Verified by starting the logger before creating the directory
    #[test]
    fn test_log_dir_is_file() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("{e}"));
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "").unwrap_or_else(|e| unreachable!("{e}"));

        assert!(matches!(
            init_logging(Some(&file.join("logs")), true),
            Err(WallError::FileSystem { .. })
        ));
    }

    // Tests file logging starts once and a second logger is refused
    // Verified by ignoring the log directory
    #[test]
    fn test_file_logging_starts_once() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("{e}"));
        let log_dir = dir.path().join("logs");

        let handle = init_logging(Some(&log_dir), true);
        assert!(handle.is_ok());
        assert!(log_dir.is_dir());

        log::warn!("logging test line");
        if let Ok(handle) = &handle {
            handle.flush();
        }
        let entries = fs::read_dir(&log_dir).map(Iterator::count).unwrap_or(0);
        assert!(entries > 0);

        assert!(matches!(
            init_logging(None, true),
            Err(WallError::Logging { .. })
        ));
    }
}
