//! Fault Interception
//!
//! Bridges Rust unwinding to typed exceptions. [`raise`] starts an unwind
//! whose payload is the [`Exception`] itself; [`intercept`] runs a block
//! under `catch_unwind` and turns whatever unwound out of it into an
//! [`Exception`] with [`decode_payload`].
//!
//! A process-wide panic hook is installed on first use and chains to the hook
//! that was installed before it. Every intercepted block pushes a frame onto a
//! thread-local stack; while a frame is active the hook records the call stack
//! at the fault site and, if the frame asks for it, keeps the default panic
//! report quiet. Panics on threads without an active frame reach the previous
//! hook untouched.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use backtrace::Backtrace;
use exc_prelude::prelude::{codec, Exception, ExceptionKind};
use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use tracing::{debug, error};

/// Message given to payloads that cannot be stringified.
pub const OPAQUE_PAYLOAD_MESSAGE: &str = "Box<dyn Any>";

/// Per-block interception settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptSettings {
    /// Record a diagnostic trace for captured faults.
    pub capture_trace: bool,
    /// Suppress the default panic report for captured faults.
    pub quiet: bool,
}

impl Default for InterceptSettings {
    fn default() -> Self {
        Self { capture_trace: true, quiet: true }
    }
}

thread_local! {
    static FRAMES: RefCell<Vec<InterceptSettings>> = const { RefCell::new(Vec::new()) };
    static FAULT_TRACE: RefCell<Option<FaultTrace>> = const { RefCell::new(None) };
}

/// Call stack recorded by the hook, tagged with the fault it was recorded for.
struct FaultTrace {
    fault: Exception,
    trace: String,
}

/// Innermost active frame on this thread, if any.
fn current_frame() -> Option<InterceptSettings> {
    FRAMES
        .try_with(|frames| frames.try_borrow().ok().and_then(|frames| frames.last().copied()))
        .ok()
        .flatten()
}

fn store_fault_trace(trace: Option<FaultTrace>) {
    let _ = FAULT_TRACE.try_with(|slot| {
        if let Ok(mut slot) = slot.try_borrow_mut() {
            *slot = trace;
        }
    });
}

/// Take the recorded trace if it was recorded for `exception`.
///
/// `resume_unwind` bypasses the hook, so the slot may still hold the trace of
/// an earlier panic that was caught inside the block. The slot is cleared
/// either way.
fn take_fault_trace(exception: &Exception) -> Option<String> {
    FAULT_TRACE
        .try_with(|slot| slot.try_borrow_mut().ok().and_then(|mut slot| slot.take()))
        .ok()
        .flatten()
        .filter(|recorded| {
            recorded.fault.kind() == exception.kind()
                && recorded.fault.message() == exception.message()
        })
        .map(|recorded| recorded.trace)
}

fn capture_trace() -> String {
    format!("{:?}", Backtrace::new())
}

/// Install the interception panic hook. Idempotent.
pub fn install_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| match current_frame() {
            Some(settings) => {
                if settings.capture_trace {
                    store_fault_trace(Some(FaultTrace {
                        fault: decode_payload_ref(info.payload()),
                        trace: capture_trace(),
                    }));
                }
                if !settings.quiet {
                    previous(info);
                }
            }
            None => {
                if let Some(exception) = info.payload().downcast_ref::<Exception>() {
                    error!(exception = %exception, "uncaught exception");
                }
                previous(info);
            }
        }));
    });
}

/// Pops its frame when the protected block finishes or unwinds.
struct FrameGuard;

impl FrameGuard {
    fn enter(settings: InterceptSettings) -> Self {
        FRAMES.with(|frames| frames.borrow_mut().push(settings));
        store_fault_trace(None);
        FrameGuard
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let _ = FRAMES.try_with(|frames| {
            if let Ok(mut frames) = frames.try_borrow_mut() {
                frames.pop();
            }
        });
    }
}

/// Run `block`, capturing any fault that unwinds out of it.
///
/// Only faults unwound on the calling thread are seen; faults raised on
/// threads the block spawns are not.
///
/// The block is run under [`AssertUnwindSafe`]: state the block mutated
/// before faulting is left as it was at the fault.
///
/// # Errors
/// Returns the decoded [`Exception`] if the block faulted.
pub fn intercept<T, F>(settings: InterceptSettings, block: F) -> Result<T, Exception>
where
    F: FnOnce() -> T,
{
    install_hook();
    let result = {
        let _frame = FrameGuard::enter(settings);
        panic::catch_unwind(AssertUnwindSafe(block))
    };

    result.map_err(|payload| {
        let exception = decode_payload(payload);
        debug!(exception = %exception, "fault intercepted");
        let fault_trace = take_fault_trace(&exception);
        if settings.capture_trace {
            let trace = fault_trace.unwrap_or_else(capture_trace);
            exception.attach_trace(trace)
        } else {
            exception
        }
    })
}

macro_rules! stringify_scalars {
    ($payload:expr, $($ty:ty),+) => {
        $(
            if let Some(value) = $payload.downcast_ref::<$ty>() {
                return Some(value.to_string());
            }
        )+
    };
}

fn stringify_scalar(payload: &(dyn Any + Send)) -> Option<String> {
    stringify_scalars!(
        payload, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
        char
    );
    None
}

/// Decode a native unwinding payload into an [`Exception`]. Never fails.
///
/// - An [`Exception`] payload (from [`raise`]) is returned as is.
/// - `String` and `&'static str` payloads go through [`codec::decode_str`].
/// - Scalar payloads are stringified into a `RuntimeError`.
/// - Anything else becomes a `RuntimeError` with an opaque message.
#[must_use]
pub fn decode_payload(payload: Box<dyn Any + Send>) -> Exception {
    match payload.downcast::<Exception>() {
        Ok(exception) => *exception,
        Err(payload) => decode_payload_ref(&*payload),
    }
}

/// Borrowing form of [`decode_payload`]; an [`Exception`] payload is cloned.
fn decode_payload_ref(payload: &(dyn Any + Send)) -> Exception {
    if let Some(exception) = payload.downcast_ref::<Exception>() {
        return exception.clone();
    }
    if let Some(text) = payload.downcast_ref::<String>() {
        return codec::decode_str(text);
    }
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        return codec::decode_str(text);
    }
    match stringify_scalar(payload) {
        Some(text) => Exception::with_message(ExceptionKind::RUNTIME, text),
        None => Exception::with_message(ExceptionKind::RUNTIME, OPAQUE_PAYLOAD_MESSAGE),
    }
}

/// Raise `exception`, unwinding to the nearest enclosing interceptor.
///
/// Outside any interceptor the unwind reaches the thread boundary like any
/// other panic.
pub fn raise(exception: Exception) -> ! {
    install_hook();
    debug!(exception = %exception, "raising exception");
    panic::panic_any(exception)
}

/// Raise `exception` using its encoded text as the payload.
///
/// Interoperates with code that only forwards string panics.
pub fn raise_encoded(exception: &Exception) -> ! {
    install_hook();
    panic::panic_any(exception.encode())
}

/// Method form of [`raise`].
pub trait Raise {
    /// Raise `self`. Never returns.
    fn raise(self) -> !;
}

impl Raise for Exception {
    fn raise(self) -> ! {
        raise(self)
    }
}
