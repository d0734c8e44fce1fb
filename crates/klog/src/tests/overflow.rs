use super::*;

use crate::GLOBAL_LOG_BUFFER_SIZE;

#[test]
fn test_buffer_overflow_counts_dropped() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Emergency);

    let total = GLOBAL_LOG_BUFFER_SIZE + 10;
    for i in 0..total {
        test_log!(log, LogLevel::Info, "log {}", i);
    }

    assert_eq!(log.len(), GLOBAL_LOG_BUFFER_SIZE);
    assert_eq!(log.dropped_count(), 10);
}

#[test]
fn test_overflow_drops_oldest() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Emergency);

    for i in 0..GLOBAL_LOG_BUFFER_SIZE + 3 {
        test_log!(log, LogLevel::Info, "entry {}", i);
    }

    let first = log.read().unwrap();
    assert_eq!(first.message(), "entry 3");
}
