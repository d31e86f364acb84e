mod common;

use ddc_core::capabilities::parse_capabilities_bytes;
use ddc_core::{parse_capabilities, Ddc, FeatureSet, FeatureSetFlags, FeatureSubset, Validity, VersionSpec};
use common::{FakeDisplay, Fault};

const U2415: &str = "(prot(monitor)type(LCD)model(U2415)cmds(01 02 03 07 0C E3 F3)vcp(02 04 05 08 10 12 14(01 04 05 06 08 09 0B 0C) 16 18 1A 52 60(0F 10 11 12) AA(01 02 04) AC AE B2 B6 C6 C8 C9 D6(01 04 05) DC(00 02 03 05) DF E0 E1 E2(00 01 02 04 0E 12 14 19 1D) F0(0C 0F 10 11 31) F1 F2 FD)mccs_ver(2.1))";

#[test]
fn monitor_string() {
    common::init();
    let caps = parse_capabilities(U2415);
    assert_eq!(caps.validity, Validity::Valid, "{:?}", caps.messages);
    assert_eq!(caps.model.as_ref().map(|s| &s[..]), Some("U2415"));
    assert_eq!(caps.parsed_version, VersionSpec::V21);
    assert_eq!(caps.commands.len(), 7);
    assert!(caps.has_command(0xf3));
    assert_eq!(caps.features.len(), 30);

    let input = caps.feature(0x60).unwrap();
    assert_eq!(input.name(caps.parsed_version), "Input Source");
    let names = input.value_names(caps.parsed_version);
    assert_eq!(names[0], (0x0f, Some("DisplayPort-1")));

    assert_eq!(caps.feature(0xe2).unwrap().declared_values.len(), 9);
    assert!(caps.feature_codes().iter().all(|&code| caps.has_feature(code)));
}

#[test]
fn read_from_display() {
    let display = FakeDisplay::new().with_capabilities(U2415);
    display.inject(vec![Fault::ReadBusy, Fault::Clean, Fault::Corrupt]);
    let mut ddc = Ddc::new(display.transport(), common::thread_context());
    let caps = ddc.capabilities().unwrap();
    assert_eq!(caps.raw_value, U2415);
    assert_eq!(caps.validity, Validity::Valid);
}

#[test]
fn supported_features_for_version() {
    common::init();
    let caps = parse_capabilities("(vcp(10 12 60(01 03 0F) 73 DF) mccs_ver(3.0))");
    let set = FeatureSet::new(FeatureSubset::Table, caps.parsed_version, FeatureSetFlags::empty());
    assert!(set.codes().contains(&0x60));
    assert!(set.codes().contains(&0x73));
    assert!(!set.codes().contains(&0x10));

    let rw = FeatureSet::new(FeatureSubset::Color, VersionSpec::V22, FeatureSetFlags::RW_ONLY | FeatureSetFlags::NO_TABLE);
    assert!(rw.resolved().all(|feature| feature.is_readable() && feature.is_writable() && !feature.is_table()));
    assert!(rw.codes().contains(&0x10));
}

#[test]
fn garbled_strings() {
    common::init();
    let caps = parse_capabilities_bytes(b"(prot(monitor)type(lcd)vcp(10 12 14(05 06 zz)) mccs_ver(2.2)\0\0");
    assert_eq!(caps.validity, Validity::Invalid);
    assert_eq!(caps.feature_codes(), vec![0x10, 0x12, 0x14]);
    assert!(!caps.feature(0x14).unwrap().values_valid);
    assert!(!caps.messages.is_empty());

    let truncated = parse_capabilities("(prot(monitor)vcp(10 12");
    assert_eq!(truncated.validity, Validity::Invalid);
    assert!(truncated.features.is_empty());
}
