//! Integration tests for device number encoding.

use device::dev::{CHRDEV_MAJOR_MAX, MINORBITS, MINORMASK, dynamic_major};
use device::{major, makedev, minor};

#[test]
fn test_makedev_major_minor() {
    let dev = makedev(240, 1);
    assert_eq!(major(dev), 240);
    assert_eq!(minor(dev), 1);
}

#[test]
fn test_makedev_zero() {
    let dev = makedev(0, 0);
    assert_eq!(dev, 0);
    assert_eq!(major(dev), 0);
    assert_eq!(minor(dev), 0);
}

#[test]
fn test_minor_uses_twenty_bits() {
    let dev = makedev(1, MINORMASK);
    assert_eq!(minor(dev), MINORMASK);
    assert_eq!(major(dev), 1);
    assert_eq!(makedev(1, 0), 1 << MINORBITS);
}

#[test]
fn test_largest_char_major() {
    let dev = makedev(CHRDEV_MAJOR_MAX - 1, 0);
    assert_eq!(major(dev), 511);
}

#[test]
fn test_dynamic_major_ranges() {
    assert_eq!(dynamic_major::DYN_START, 254);
    assert_eq!(dynamic_major::DYN_END, 234);
    assert_eq!(dynamic_major::DYN_EXT_START, 511);
    assert_eq!(dynamic_major::DYN_EXT_END, 384);
}

#[test]
fn test_devno_unique() {
    let dev1 = makedev(1, 0);
    let dev2 = makedev(1, 1);
    let dev3 = makedev(2, 0);

    assert_ne!(dev1, dev2);
    assert_ne!(dev1, dev3);
    assert_ne!(dev2, dev3);
}
