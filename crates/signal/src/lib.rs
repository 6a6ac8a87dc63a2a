//! A multi-subscriber event registry.
//!
//! A [`Signal<'a, A>`] holds an ordered list of [`Delegate`]s sharing one argument tuple `A`.
//! Subscribers are connected with one of the `connect` methods, which return a [`Handle`] that
//! later [`disconnect`]s exactly that subscriber. [`Signal::emit()`] calls every connected
//! subscriber, in the order they were connected.
//!
//! ```
//! use sigbind_signal::Signal;
//!
//! struct Doubler;
//!
//! impl Doubler {
//!     fn on_value(&self, value: i32) {
//!         assert_eq!(value % 10, 0);
//!     }
//! }
//!
//! fn on_value(value: i32) {
//!     assert!(value > 0);
//! }
//!
//! let doubler = Doubler;
//! let signal = Signal::<(i32,)>::new();
//! let first = signal.connect_fn(on_value);
//! let second = signal.connect_method(&doubler, Doubler::on_value);
//!
//! assert_eq!(signal.emit((10,)).invoked, 2);
//! assert!(signal.disconnect(second));
//! assert_eq!(signal.emit((20,)).invoked, 1);
//! assert!(signal.disconnect(first));
//! assert!(!signal.disconnect(first));
//! assert!(signal.is_empty());
//! ```
//!
//! # Reentrancy
//!
//! A subscriber may connect or disconnect subscribers of the [`Signal`] it was called from. Each
//! call to [`emit()`] works on a snapshot of the subscribers connected when it started: changes
//! made during the call take effect on the next [`emit()`].
//!
//! [`disconnect`]: Signal::disconnect()
//! [`emit()`]: Signal::emit()

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod connect;
mod handle;

pub use handle::Handle;

#[doc(no_inline)]
pub use sigbind_delegate::{CallError, Delegate, TargetKind};

use alloc::{rc::Rc, vec::Vec};
use core::cell::{Cell, RefCell};

struct Slot<'a, A> {
    handle: Handle,
    delegate: Delegate<'a, A>,
}

impl<A> Clone for Slot<'_, A> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            delegate: self.delegate.clone(),
        }
    }
}

/// Summarizes a call to [`Signal::emit()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Emission {
    /// The number of subscribers that were called.
    pub invoked: usize,
    /// The number of subscribers that were skipped because the object they are bound to could
    /// not be accessed.
    pub failed: usize,
}

/// An ordered collection of subscribers taking the argument tuple `A`.
///
/// See the [crate-level documentation](crate) for more information.
pub struct Signal<'a, A> {
    /// Shared with any in-progress [`Signal::emit()`] calls, and copied on write.
    slots: RefCell<Rc<Vec<Slot<'a, A>>>>,
    next_handle: Cell<Handle>,
}

#[cold]
#[inline(never)]
fn handles_exhausted() -> ! {
    panic!("signal ran out of unique handles")
}

impl<'a, A> Signal<'a, A> {
    /// Creates a [`Signal`] with no subscribers.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Rc::new(Vec::new())),
            next_handle: Cell::new(Handle::first(handle::Owner::unique())),
        }
    }

    fn next_handle(&self) -> Handle {
        let handle = self.next_handle.get();
        match handle.successor() {
            Some(next) => self.next_handle.set(next),
            None => handles_exhausted(),
        }
        handle
    }

    /// Applies changes to the subscriber list, copying it first if an [`emit()`] is in progress.
    ///
    /// [`emit()`]: Signal::emit()
    fn modify<R>(&self, f: impl FnOnce(&mut Vec<Slot<'a, A>>) -> R) -> R {
        let mut slots = self.slots.borrow_mut();
        f(Rc::make_mut(&mut *slots))
    }

    /// Appends the `delegate` to the end of the subscriber list, returning a new [`Handle`] used
    /// to [`disconnect()`] it.
    ///
    /// # Panics
    ///
    /// Panics if this [`Signal`] already returned [`u64::MAX`] handles.
    ///
    /// [`disconnect()`]: Signal::disconnect()
    pub fn connect(&self, delegate: Delegate<'a, A>) -> Handle {
        let handle = self.next_handle();
        log::trace!("connecting {handle} ({:?})", delegate.kind());
        self.modify(|slots| slots.push(Slot { handle, delegate }));
        handle
    }

    /// Removes the subscriber with the given [`Handle`], keeping the order of the remaining
    /// subscribers.
    ///
    /// Returns `false` if no such subscriber is connected, for example because it was already
    /// disconnected, or because the [`Handle`] was returned by a different [`Signal`].
    pub fn disconnect(&self, handle: Handle) -> bool {
        if !self.contains(handle) {
            log::trace!("{handle} is not connected");
            return false;
        }

        let removed = self.modify(|slots| {
            let index = slots.iter().position(|slot| slot.handle == handle)?;
            Some(slots.remove(index))
        });

        // The subscriber is dropped after the borrow of the list ends.
        let found = removed.is_some();
        if found {
            log::trace!("disconnected {handle}");
        }
        found
    }

    /// Removes all subscribers.
    pub fn clear(&self) {
        let previous = self.slots.replace(Rc::new(Vec::new()));
        log::trace!("cleared {} subscribers", previous.len());
    }

    /// Removes all subscribers bound to objects that have been dropped, returning how many were
    /// removed.
    pub fn retain_live(&self) -> usize {
        if !self
            .slots
            .borrow()
            .iter()
            .any(|slot| slot.delegate.is_expired())
        {
            return 0;
        }

        let removed = self.modify(|slots| {
            let before = slots.len();
            slots.retain(|slot| !slot.delegate.is_expired());
            before - slots.len()
        });

        log::trace!("removed {removed} expired subscribers");
        removed
    }

    /// Returns the number of connected subscribers.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Returns `true` if no subscribers are connected.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Returns `true` if the subscriber with the given [`Handle`] is connected.
    pub fn contains(&self, handle: Handle) -> bool {
        self.slots.borrow().iter().any(|slot| slot.handle == handle)
    }

    /// Gets the handles of all connected subscribers, in the order they are called.
    pub fn handles(&self) -> Vec<Handle> {
        self.slots.borrow().iter().map(|slot| slot.handle).collect()
    }

    /// Calls every connected subscriber with a clone of the `arguments`, in the order they were
    /// connected.
    ///
    /// Subscribers connected or disconnected while this call is in progress are not affected
    /// until the next call. A subscriber whose bound object could not be accessed is skipped,
    /// and counted in [`Emission::failed`].
    ///
    /// # Panics
    ///
    /// A panic in a subscriber propagates to the caller, and the remaining subscribers are not
    /// called.
    pub fn emit(&self, arguments: A) -> Emission
    where
        A: Clone,
    {
        let snapshot = Rc::clone(&*self.slots.borrow());
        let mut emission = Emission::default();

        for slot in snapshot.iter() {
            match slot.delegate.try_call(arguments.clone()) {
                Ok(()) => emission.invoked += 1,
                Err(error) => {
                    log::debug!("skipped {}: {error}", slot.handle);
                    emission.failed += 1;
                }
            }
        }

        emission
    }
}

impl<A> Default for Signal<'_, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> core::fmt::Debug for Signal<'_, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .borrow()
                    .iter()
                    .map(|slot| (slot.handle, &slot.delegate)),
            )
            .finish()
    }
}
