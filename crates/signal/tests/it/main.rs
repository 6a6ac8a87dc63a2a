//! Integration tests for [`sigbind_signal`].


use std::cell::RefCell;

thread_local! {
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records that a subscriber was called on the current test's thread.
fn record(call: String) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

/// Returns the calls recorded so far, clearing the record.
fn take_calls() -> Vec<String> {
    CALLS.with(|calls| core::mem::take(&mut *calls.borrow_mut()))
}
