use log::{LevelFilter, Log};
use palm_base::logging::{
    FileLogger, StdoutLogger, default_level, init_file_logger, init_stdout_logger, parse_level,
};
use std::fs;

fn temp_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("palm-log-{}-{}", std::process::id(), tag))
}

fn metadata(level: log::Level) -> log::Metadata<'static> {
    log::MetadataBuilder::new().level(level).target("test").build()
}

#[test]
fn test_stdout_logger_respects_max_level() {
    let logger = StdoutLogger::new(LevelFilter::Warn);
    assert!(logger.enabled(&metadata(log::Level::Error)));
    assert!(logger.enabled(&metadata(log::Level::Warn)));
    assert!(!logger.enabled(&metadata(log::Level::Info)));
}

#[test]
fn test_file_logger_creates_directory() {
    let dir = temp_dir("mkdir");
    let _ = fs::remove_dir_all(&dir);

    let _logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    assert!(dir.is_dir());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_writes_formatted_line() {
    let dir = temp_dir("write");
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir)
        .expect("Failed to create FileLogger")
        .with_max_level(LevelFilter::Info);
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .file(Some("dispatch.rs"))
        .line(Some(42))
        .args(format_args!("moving left"))
        .build();
    logger.log(&record);
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(entries.len(), 1);
    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[INFO]"));
    assert!(content.contains("dispatch.rs:42"));
    assert!(content.contains("moving left"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_drops_records_above_max_level() {
    let dir = temp_dir("filter");
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir)
        .unwrap()
        .with_max_level(LevelFilter::Error);
    let record = log::RecordBuilder::new()
        .level(log::Level::Debug)
        .args(format_args!("noisy"))
        .build();
    logger.log(&record);
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
    assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::Debug));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    assert!(init_file_logger("/proc/nonexistent/palm").is_err());
}

#[test]
fn test_init_stdout_logger_installs_once() {
    init_stdout_logger();
    init_stdout_logger();
    assert_eq!(log::max_level(), default_level());
    log::info!("stdout logger installed");
}
