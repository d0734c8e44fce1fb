use super::*;

#[test]
fn test_global_level_filtering() {
    let log = LogCore::new(LogLevel::Warning, LogLevel::Emergency);

    test_log!(log, LogLevel::Emergency, "emergency");
    test_log!(log, LogLevel::Error, "error");
    test_log!(log, LogLevel::Warning, "warning");
    test_log!(log, LogLevel::Info, "info");
    test_log!(log, LogLevel::Debug, "debug");

    assert_eq!(log.len(), 3);
    assert_eq!(log.read().unwrap().message(), "emergency");
    assert_eq!(log.read().unwrap().message(), "error");
    assert_eq!(log.read().unwrap().message(), "warning");
    assert_eq!(log.len(), 0);
}

#[test]
fn test_level_change_at_runtime() {
    let log = LogCore::new(LogLevel::Info, LogLevel::Emergency);

    test_log!(log, LogLevel::Debug, "filtered");
    assert_eq!(log.len(), 0);

    log.set_global_level(LogLevel::Debug);
    assert_eq!(log.global_level(), LogLevel::Debug);

    test_log!(log, LogLevel::Debug, "kept");
    assert_eq!(log.read().unwrap().message(), "kept");
}

#[test]
fn test_level_from_u8_saturates() {
    assert_eq!(LogLevel::from_u8(3), LogLevel::Error);
    assert_eq!(LogLevel::from_u8(200), LogLevel::Debug);
}
