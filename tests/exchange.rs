mod common;

use std::sync::{Arc, Barrier};
use std::thread;
use ddc_core::{Context, Config, Ddc, DisplayId, EdidIdentity, Error, ErrorCode, LockMode, RetryClass, ThreadContext, VcpValue, VersionSpec};
use common::{Activity, FakeDisplay, Fault};

fn shared_context() -> Arc<Context> {
    common::init();
    Arc::new(Context::new(Config::no_sleep()).unwrap())
}

#[test]
fn retry_bound_and_single_exhaustion() {
    let display = FakeDisplay::new().with_value(0x10, 50, 100);
    display.inject(vec![Fault::ReadBusy; 10]);
    let mut thread = common::thread_context();
    thread.set_max_tries(RetryClass::WriteRead, 4).unwrap();
    let mut ddc = Ddc::new(display.transport(), thread);

    match ddc.get_vcp_feature(0x10) {
        Err(Error::RetriesExhausted { class: RetryClass::WriteRead, tries: 4, .. }) => (),
        other => panic!("{:?}", other),
    }
    assert_eq!(display.writes.load(std::sync::atomic::Ordering::SeqCst), 4);

    let stats = ddc.thread_context().stats().snapshot(RetryClass::WriteRead);
    assert_eq!(stats.failures_exhausted, 1);
    assert_eq!(stats.failures_fatal, 0);
    assert_eq!(stats.successes(), 0);
}

#[test]
fn success_counted_under_its_try() {
    let display = FakeDisplay::new().with_value(0x12, 75, 100);
    display.inject(vec![Fault::ReadBusy, Fault::Zeros]);
    let mut thread = common::thread_context();
    thread.set_max_tries(RetryClass::WriteRead, 5).unwrap();
    let mut ddc = Ddc::new(display.transport(), thread);

    let reply = ddc.get_vcp_feature(0x12).unwrap();
    assert_eq!((reply.value(), reply.maximum()), (75, 100));

    let stats = ddc.thread_context().stats().snapshot(RetryClass::WriteRead);
    for (tries, &count) in stats.successes_by_try_count.iter().enumerate() {
        assert_eq!(count, if tries == 3 { 1 } else { 0 }, "try {}", tries);
    }
    assert_eq!(stats.failures_exhausted + stats.failures_fatal, 0);
}

#[test]
fn zero_reads_and_null_replies() {
    let display = FakeDisplay::new().with_value(0x10, 1, 100);
    display.inject(vec![Fault::Zeros, Fault::Zeros]);
    let mut ddc = Ddc::new(display.transport(), common::thread_context());
    match ddc.get_vcp_feature(0x10) {
        Err(Error::AllTriesZero { tries: 2, .. }) => (),
        other => panic!("{:?}", other),
    }

    display.inject(vec![Fault::Null]);
    let err = ddc.get_vcp_feature(0x10).unwrap_err();
    assert_eq!(err.code(), Some(&ErrorCode::NullResponse));
    assert_eq!(ddc.get_vcp_feature(0x10).unwrap().value(), 1);
}

#[test]
fn corruption_twice_is_fatal() {
    let display = FakeDisplay::new().with_value(0x10, 1, 100);
    display.inject(vec![Fault::Corrupt, Fault::Corrupt]);
    let mut thread = common::thread_context();
    thread.set_max_tries(RetryClass::WriteRead, 8).unwrap();
    let mut ddc = Ddc::new(display.transport(), thread);
    match ddc.get_vcp_feature(0x10) {
        Err(Error::Ddc(ErrorCode::ChecksumMismatch { .. })) => (),
        other => panic!("{:?}", other),
    }
    assert_eq!(ddc.thread_context().stats().snapshot(RetryClass::WriteRead).failures_fatal, 1);
}

#[test]
fn session_commands() {
    let display = FakeDisplay::new()
        .with_value(0x10, 20, 100)
        .with_value(0x60, 0x0f, 0x12)
        .with_table(0x73, &[0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x08, 0x08, 0x08]);
    let mut ddc = Ddc::new(display.transport(), common::thread_context());

    ddc.set_vcp_feature(0x10, 42).unwrap();
    assert_eq!(display.value(0x10), Some(42));
    ddc.save_current_settings().unwrap();
    assert_eq!(display.saved(), 1);

    let timing = ddc.get_timing_report().unwrap();
    assert_eq!(timing.horizontal_frequency, 0x7a12);
    assert_eq!(timing.vertical_frequency, 0x1770);

    assert!(ddc.get_vcp_feature(0x99).unwrap_err().is_unsupported());

    match ddc.get_value(0x60, VersionSpec::V22).unwrap() {
        VcpValue::NonTable { sl: 0x0f, .. } => (),
        other => panic!("{:?}", other),
    }
    match ddc.get_value(0x73, VersionSpec::V21).unwrap() {
        VcpValue::Table(ref data) => assert_eq!(data.len(), 9),
        other => panic!("{:?}", other),
    }

    let table: Vec<u8> = (0..70).collect();
    ddc.table_write(0x74, &table).unwrap();
    assert_eq!(display.table(0x74), Some(table.clone()));
    assert_eq!(ddc.table_read(0x74).unwrap(), table);
}

#[test]
fn formatted_values() {
    let display = FakeDisplay::new()
        .with_value(0x10, 42, 100)
        .with_value(0x52, 0x10, 0xff)
        .with_value(0x60, 0x0f, 0x12)
        .with_value(0xb8, 300, 0xffff)
        .with_value(0xc9, 0x0105, 0)
        .with_value(0xdf, 0x0201, 0)
        .with_value(0xe5, 0x07, 0x20)
        .with_table(0x73, &[0x01, 0x00, 0x08]);
    let mut ddc = Ddc::new(display.transport(), common::thread_context());
    let mut format = |code| ddc.get_formatted_value(code, VersionSpec::V21).unwrap();

    assert_eq!(format(0x10), "current value =    42, max value =   100");
    assert_eq!(format(0x52), "Value: 0x10");
    assert_eq!(format(0x60), "DisplayPort-1 (sl=0x0f)");
    assert_eq!(format(0xb8), "  300 (0x012c)");
    assert_eq!(format(0xc9), "1.5");
    assert_eq!(format(0xdf), "2.1");
    assert_eq!(format(0xe5), "mh=0x00, ml=0x20, sh=0x00, sl=0x07");
    assert_eq!(format(0x73), "01 00 08");
}

#[test]
fn same_display_never_overlaps() {
    let context = shared_context();
    let display = FakeDisplay::new().with_value(0x10, 30, 100);

    let workers: Vec<_> = (0..4).map(|_| {
        let context = context.clone();
        let display = display.clone();
        thread::spawn(move || {
            for _ in 0..5 {
                let mut ddc = Ddc::open_locked(display.transport(), ThreadContext::new(context.clone()), &DisplayId::bus(3), LockMode::Wait).unwrap();
                for _ in 0..3 {
                    ddc.get_vcp_feature(0x10).unwrap();
                }
            }
        })
    }).collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(display.overlaps(), 0);
    assert_eq!(context.stats().snapshot(RetryClass::WriteRead).successes_by_try_count[1], 60);
}

#[test]
fn distinct_displays_are_independent() {
    let context = shared_context();
    let edid = EdidIdentity {
        manufacturer: "GSM".into(),
        model: "LG ULTRAFINE".into(),
        serial: "904NTAB1X".into(),
    };

    let activity = Activity::new();
    let both_in_flight = Arc::new(Barrier::new(2));
    let a = FakeDisplay::new()
        .with_value(0x10, 1, 100)
        .with_activity(activity.clone())
        .with_rendezvous(both_in_flight.clone());
    let b = FakeDisplay::new()
        .with_value(0x10, 2, 100)
        .with_activity(activity.clone())
        .with_rendezvous(both_in_flight);
    let mut first = Ddc::open_locked(a.transport(), ThreadContext::new(context.clone()), &DisplayId::with_edid(3, edid.clone()), LockMode::FailFast).unwrap();

    let other = {
        let context = context.clone();
        let edid = edid.clone();
        thread::spawn(move || {
            match Ddc::open_locked(a.transport(), ThreadContext::new(context.clone()), &DisplayId::with_edid(7, edid), LockMode::FailFast) {
                Err(Error::Busy) => (),
                other => panic!("{:?}", other.map(|_| ())),
            }

            let mut second = Ddc::open_locked(b.transport(), ThreadContext::new(context), &DisplayId::bus(4), LockMode::FailFast).unwrap();
            second.get_vcp_feature(0x10).unwrap().value()
        })
    };

    assert_eq!(first.get_vcp_feature(0x10).unwrap().value(), 1);
    assert_eq!(other.join().unwrap(), 2);
    assert_eq!(activity.peak(), 2);
    assert_eq!(first.display(), Some(&DisplayId::with_edid(3, edid)));
}

#[test]
fn relocking_on_the_same_thread() {
    let context = shared_context();
    let display = FakeDisplay::new();
    let _session = Ddc::open_locked(display.transport(), ThreadContext::new(context.clone()), &DisplayId::bus(1), LockMode::Wait).unwrap();
    match Ddc::open_locked(display.transport(), ThreadContext::new(context), &DisplayId::bus(1), LockMode::Wait) {
        Err(Error::AlreadyLocked) => (),
        other => panic!("{:?}", other.map(|_| ())),
    }
}
