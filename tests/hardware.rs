#![cfg(feature = "i2c-linux")]

use std::env;
use std::sync::Arc;
use ddc_core::{Context, Ddc, LockMode, RetryClass, ThreadContext, Validity};

fn bus() -> u32 {
    env::var("DDC_TEST_BUS").ok()
        .and_then(|bus| bus.parse().ok())
        .unwrap_or(4)
}

#[test]
#[ignore]
/// Reads capabilities and the input source from a real monitor; this would fail on CI.
fn test_capabilities_and_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    let context = Arc::new(Context::default());
    let mut ddc = Ddc::open_bus(bus(), ThreadContext::new(context.clone()), LockMode::Wait).unwrap();

    let caps = ddc.capabilities().unwrap();
    assert_ne!(caps.validity, Validity::Invalid, "{:?}", caps.messages);
    println!("{}", caps);

    if caps.has_feature(0x60) {
        let input = ddc.get_value(0x60, caps.parsed_version).unwrap();
        println!("input: {:?}", input);
    }

    println!("{}", context.stats());
    assert!(context.stats().snapshot(RetryClass::MultiPartRead).successes() > 0);
}
