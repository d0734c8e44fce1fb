//! Module entry points acting on the global host.

use std::sync::{Mutex, MutexGuard};

use chardevice::{ChardevError, is_loaded, on_load, on_unload, with_loaded};
use device::{HOST, OpenFlags, makedev};
use test_support::mock::host::HostSnapshot;
use test_support::mock::log::{drain_messages, install_capture};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    install_capture();
    on_unload();
    drain_messages();
    guard
}

#[test]
fn test_load_publishes_two_nodes() {
    let _guard = serial();

    on_load().unwrap();
    assert!(is_loaded());
    let major = with_loaded(|m| m.device().major()).unwrap();
    assert_eq!(HOST.node_names(), ["chardevice0", "chardevice1"]);
    assert_eq!(HOST.lookup_node("chardevice1"), Some(makedev(major, 1)));
    assert!(HOST.class_exists("chardevice_class"));

    let messages = drain_messages();
    let installed = format!("Module installed {}:[0-1]", major);
    assert!(messages.iter().any(|m| *m == installed), "{:?}", messages);

    on_unload();
}

#[test]
fn test_second_load_is_refused() {
    let _guard = serial();

    on_load().unwrap();
    let before = HostSnapshot::capture(&HOST);
    assert_eq!(on_load(), Err(ChardevError::AlreadyLoaded));
    assert_eq!(ChardevError::AlreadyLoaded.to_errno(), -16);
    assert_eq!(HostSnapshot::capture(&HOST), before);

    on_unload();
}

#[test]
fn test_unload_restores_host() {
    let _guard = serial();

    on_load().unwrap();
    drain_messages();
    on_unload();

    assert!(!is_loaded());
    assert!(HostSnapshot::capture(&HOST).is_pristine());
    assert!(drain_messages().iter().any(|m| m == "Module removed"));

    // 未加载时卸载什么也不做
    on_unload();
    assert!(drain_messages().is_empty());
}

#[test]
fn test_reload_gets_same_major() {
    let _guard = serial();

    on_load().unwrap();
    let first = with_loaded(|m| m.device().major()).unwrap();
    on_unload();

    on_load().unwrap();
    let second = with_loaded(|m| m.device().major()).unwrap();
    assert_eq!(first, second);

    let file = HOST.open("chardevice0", OpenFlags::O_RDONLY).unwrap();
    assert_eq!(file.pos(), 0);
    drop(file);
    on_unload();
}
