//! Integration tests for klog public API (macros + global registration + log facade).

use std::sync::{Mutex, MutexGuard, Once, OnceLock};

use klog::{LogLevel, LogOutput, pr_debug, pr_err, pr_info, pr_warn};

static INIT: Once = Once::new();

static OUTPUT_BUF: OnceLock<Mutex<String>> = OnceLock::new();

// The global log is shared by every test in this binary.
static SERIAL: Mutex<()> = Mutex::new(());

struct TestOutput;

impl LogOutput for TestOutput {
    fn write_str(&self, s: &str) {
        let buf = OUTPUT_BUF.get_or_init(|| Mutex::new(String::new()));
        buf.lock().unwrap().push_str(s);
    }
}

static TEST_OUTPUT: TestOutput = TestOutput;

fn setup() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    INIT.call_once(|| {
        klog::register_log_output(&TEST_OUTPUT);
        klog::init_log_facade();
    });
    while klog::read_log().is_some() {}
    take_output();
    guard
}

fn take_output() -> String {
    let buf = OUTPUT_BUF.get_or_init(|| Mutex::new(String::new()));
    let mut g = buf.lock().unwrap();
    let out = g.clone();
    g.clear();
    out
}

#[test]
fn test_pr_info_buffered_but_not_printed_by_default() {
    let _g = setup();

    pr_info!("Read : {}", 20);

    assert_eq!(klog::log_len(), 1);
    let entry = klog::read_log().unwrap();
    assert_eq!(entry.level(), LogLevel::Info);
    assert_eq!(entry.message(), "Read : 20");

    // Default console threshold is Warning.
    assert_eq!(take_output(), "");
}

#[test]
fn test_pr_err_prints_to_console() {
    let _g = setup();

    pr_err!("Can't add char device");

    let out = take_output();
    assert!(out.contains("[ERR]"));
    assert!(out.contains("Can't add char device"));

    let entry = klog::read_log().unwrap();
    assert_eq!(entry.level(), LogLevel::Error);
}

#[test]
fn test_pr_warn_prints_to_console() {
    let _g = setup();

    pr_warn!("warn {}", "x");

    assert!(take_output().contains("warn x"));
}

#[test]
fn test_pr_debug_filtered_by_default_level() {
    let _g = setup();

    pr_debug!("should not be logged");

    assert_eq!(klog::log_len(), 0);
    assert_eq!(take_output(), "");
}

#[test]
fn test_log_facade_routes_into_buffer() {
    let _g = setup();

    log::warn!(target: "device", "unknown region");

    let entry = klog::read_log().unwrap();
    assert_eq!(entry.level(), LogLevel::Warning);
    assert_eq!(entry.message(), "device: unknown region");
    assert!(take_output().contains("device: unknown region"));
}
