#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the orchestrator
//!
//! Arbitrary kinds, messages and handler layouts: exactly one handler runs
//! when one is eligible, the finalizer always runs once, and nothing escapes.

use exc_core::{raise, HarnessConfig, InterestSet, Try};
use exc_prelude::prelude::{Exception, ExceptionKind};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;

fuzz_target!(|data: &[u8]| {
    let Some((&layout, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let kind = ExceptionKind::new(format!("K{}", layout % 4));

    let runs = Cell::new(0_u32);
    let finalized = Cell::new(0_u32);
    let mut attempt = Try::new(|| raise(Exception::with_message(kind.clone(), &text)))
        .with_config(HarnessConfig::for_production());
    for slot in 0..4_u8 {
        if layout & (1 << (slot + 2)) != 0 {
            attempt = attempt.catch(InterestSet::of([format!("K{slot}")]), |_| runs.set(runs.get() + 1));
        }
    }
    let has_default = layout & 0x40 != 0;
    if has_default {
        attempt = attempt.catch_all(|_| runs.set(runs.get() + 1));
    }
    attempt.finally(|| finalized.set(finalized.get() + 1)).run();

    assert!(runs.get() <= 1);
    if has_default {
        assert_eq!(runs.get(), 1);
    }
    assert_eq!(finalized.get(), 1);
});
