//! Registration is all-or-nothing: a failure at any stage leaves the host untouched.

use chardevice::{ChardevConfig, ChardevError, ChardevModule};
use device::{DeviceError, DeviceHost, FaultPoint, OpenFlags, makedev};
use test_support::mock::host::HostSnapshot;
use test_support::mock::log::install_capture;

fn load(host: &DeviceHost) -> Result<ChardevModule<'_>, ChardevError> {
    ChardevModule::load(host, &ChardevConfig::DEFAULT)
}

fn fail_at(point: FaultPoint, error: DeviceError) -> (ChardevError, HostSnapshot) {
    let host = DeviceHost::new();
    host.inject_fault(point, error);
    let err = match load(&host) {
        Ok(_) => panic!("load should fail at {:?}", point),
        Err(e) => e,
    };
    assert_eq!(host.pending_faults(), 0);
    (err, HostSnapshot::capture(&host))
}

#[test]
fn test_region_failure() {
    let (err, after) = fail_at(FaultPoint::RegionAlloc, DeviceError::Busy);
    assert_eq!(err, ChardevError::RangeUnavailable(DeviceError::Busy));
    assert_eq!(err.stage(), "region");
    assert!(after.is_pristine());
}

#[test]
fn test_bind_failure() {
    let (err, after) = fail_at(FaultPoint::CdevAdd, DeviceError::NoMemory);
    assert_eq!(err, ChardevError::BindFailed(DeviceError::NoMemory));
    assert!(after.is_pristine());
}

#[test]
fn test_class_failure() {
    let (err, after) = fail_at(FaultPoint::ClassCreate, DeviceError::NoMemory);
    assert_eq!(err, ChardevError::ClassCreateFailed(DeviceError::NoMemory));
    assert_eq!(err.to_errno(), -12);
    assert!(after.is_pristine());
}

#[test]
fn test_first_node_failure() {
    let (err, after) = fail_at(FaultPoint::DeviceCreate { nth: 0 }, DeviceError::NoMemory);
    assert_eq!(
        err,
        ChardevError::NodeCreateFailed {
            index: 0,
            source: DeviceError::NoMemory
        }
    );
    assert!(after.is_pristine());
}

#[test]
fn test_second_node_failure_retracts_first() {
    let capture = install_capture();
    let (err, after) = fail_at(FaultPoint::DeviceCreate { nth: 1 }, DeviceError::NoMemory);
    assert_eq!(
        err,
        ChardevError::NodeCreateFailed {
            index: 1,
            source: DeviceError::NoMemory
        }
    );
    assert!(after.is_pristine());
    assert!(capture.contents().contains("Failed to create device chardevice1"));
}

#[test]
fn test_existing_class_is_left_alone() {
    let host = DeviceHost::new();
    let other = host.class_create("chardevice_class").unwrap();
    let before = HostSnapshot::capture(&host);

    let err = load(&host).err();
    assert_eq!(
        err,
        Some(ChardevError::ClassCreateFailed(DeviceError::AlreadyExists))
    );
    assert_eq!(HostSnapshot::capture(&host), before);
    assert!(other.is_alive());
}

#[test]
fn test_node_name_clash_keeps_foreign_node() {
    let host = DeviceHost::new();
    let other = host.class_create("other").unwrap();
    host.device_create(&other, makedev(10, 1), "chardevice1")
        .unwrap();
    let before = HostSnapshot::capture(&host);

    let err = load(&host).err();
    assert_eq!(
        err,
        Some(ChardevError::NodeCreateFailed {
            index: 1,
            source: DeviceError::AlreadyExists
        })
    );
    assert_eq!(HostSnapshot::capture(&host), before);
    assert_eq!(host.lookup_node("chardevice1"), Some(makedev(10, 1)));
}

#[test]
fn test_retry_after_failure() {
    let host = DeviceHost::new();
    host.inject_fault(FaultPoint::ClassCreate, DeviceError::NoMemory);
    assert!(load(&host).is_err());

    let module = load(&host).unwrap();
    assert_eq!(module.device().node_names(), ["chardevice0", "chardevice1"]);
    assert!(host.open("chardevice0", OpenFlags::O_RDONLY).is_ok());
}

#[test]
fn test_fixed_major() {
    let host = DeviceHost::new();
    let config = ChardevConfig {
        major: 60,
        ..ChardevConfig::DEFAULT
    };
    let module = ChardevModule::load(&host, &config).unwrap();
    assert_eq!(module.device().major(), 60);
    assert_eq!(host.lookup_node("chardevice1"), Some(makedev(60, 1)));

    module.unload();
    assert!(HostSnapshot::capture(&host).is_pristine());
}

#[test]
fn test_fixed_major_taken() {
    let capture = install_capture();
    let host = DeviceHost::new();
    host.register_chrdev_region(makedev(60, 1), 4, "someone")
        .unwrap();
    let before = HostSnapshot::capture(&host);

    let config = ChardevConfig {
        major: 60,
        ..ChardevConfig::DEFAULT
    };
    let err = ChardevModule::load(&host, &config).err();
    assert_eq!(err, Some(ChardevError::RangeUnavailable(DeviceError::Busy)));
    assert_eq!(HostSnapshot::capture(&host), before);
    assert!(capture.contents().contains("Can't get major 60"));
}

#[test]
fn test_fixed_major_register_fault() {
    let host = DeviceHost::new();
    host.inject_fault(FaultPoint::RegionRegister, DeviceError::InvalidArgument);
    let config = ChardevConfig {
        major: 60,
        ..ChardevConfig::DEFAULT
    };
    let err = ChardevModule::load(&host, &config).err();
    assert_eq!(
        err,
        Some(ChardevError::RangeUnavailable(DeviceError::InvalidArgument))
    );
    assert!(HostSnapshot::capture(&host).is_pristine());
}
