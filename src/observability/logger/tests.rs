use super::*;
use tempfile::tempdir;

#[test]
fn test_logger_creation() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");

    let logger = Logger::new(Some(&log_path), Some("DEBUG"));
    assert!(logger.is_ok());

    let logger = logger.unwrap();
    assert_eq!(logger.log_file(), &log_path);
    assert_eq!(logger.log_level(), LogLevel::Debug);
}

#[test]
fn test_log_file_creation() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("logs").join("test.md");

    let _logger = Logger::new(Some(&log_path), None).unwrap();
    assert!(log_path.exists());

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("# Command Run Log"));
    assert!(content.contains("Log started:"));
}

#[test]
fn test_log_operations() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");
    let logger = Logger::new(Some(&log_path), Some("debug")).unwrap();

    assert!(logger.log_run_start("pizza", "1.0.0").is_ok());
    assert!(logger
        .log_command_start("order", &["large".to_string(), "pepperoni".to_string()])
        .is_ok());
    assert!(logger.log_command_result("order", None, 12).is_ok());
    assert!(logger
        .log_command_result("cart", Some("no such cart"), 3)
        .is_ok());

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Run Started"));
    assert!(content.contains("**Args:** `large pepperoni`"));
    assert!(content.contains("**Status:** ok"));
    assert!(content.contains("**Error:** no such cart"));
}

#[test]
fn test_level_filtering() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");
    let logger = Logger::new(Some(&log_path), Some("WARN")).unwrap();

    logger.log_command_start("order", &[]).unwrap();
    logger.log_command_result("order", None, 1).unwrap();
    logger.log_custom("Heads up", "disk almost full", Some("WARN")).unwrap();
    logger.log_command_result("cart", Some("boom"), 1).unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(!content.contains("Command Started"));
    assert!(!content.contains("**Status:** ok"));
    assert!(content.contains("Heads up"));
    assert!(content.contains("**Error:** boom"));
}

#[test]
fn test_level_parse() {
    assert_eq!(LogLevel::parse("warning"), LogLevel::Warn);
    assert_eq!(LogLevel::parse("error"), LogLevel::Error);
    assert_eq!(LogLevel::parse("nonsense"), LogLevel::Info);
    assert!(LogLevel::Error > LogLevel::Debug);
}
