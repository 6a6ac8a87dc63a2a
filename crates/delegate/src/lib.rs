//! Allocation-free storage for free functions and bound methods behind a single call signature.
//!
//! A [`Delegate<'a, A>`] wraps either a plain function pointer, or an object together with one of
//! its methods, taking the argument tuple `A`. Every [`Delegate`] is the same size regardless of
//! what it wraps, so delegates can be stored side by side in one collection without boxing.
//!
//! ```
//! use core::cell::Cell;
//! use sigbind_delegate::Delegate;
//!
//! fn add(a: i32, b: i32, out: &Cell<i32>) {
//!     out.set(a + b);
//! }
//!
//! struct Scaled(i32);
//!
//! impl Scaled {
//!     fn add(&self, a: i32, b: i32, out: &Cell<i32>) {
//!         out.set(a + b * self.0);
//!     }
//! }
//!
//! let result = Cell::new(0);
//! let scaled = Scaled(2);
//!
//! let plain = Delegate::<(i32, i32, &Cell<i32>)>::from_fn(add);
//! plain.call((10, 20, &result));
//! assert_eq!(result.get(), 30);
//!
//! let bound = Delegate::<(i32, i32, &Cell<i32>)>::bind(&scaled, Scaled::add);
//! bound.call((10, 20, &result));
//! assert_eq!(result.get(), 50);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Invokes the given macro once for each supported number of arguments.
///
/// The macro receives the list of `argument: Parameter` pairs followed by the number of
/// arguments.
#[doc(hidden)]
#[macro_export]
macro_rules! with_parameters {
    ($macro:ident) => {
        $macro!((); 0);
        $macro!((a0: A0); 1);
        $macro!((a0: A0, a1: A1); 2);
        $macro!((a0: A0, a1: A1, a2: A2); 3);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3); 4);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4); 5);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5); 6);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6); 7);
        $macro!((a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7); 8);
    };
}

mod construct;
mod error;
pub mod raw;
mod target;

pub use error::CallError;

/// Describes what kind of callable a [`Delegate`] wraps.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TargetKind {
    /// A plain function pointer.
    Function,
    /// A method taking `&self`, bound to a borrowed object.
    Method,
    /// A method taking `&mut self`, bound to an object in a [`RefCell`].
    ///
    /// [`RefCell`]: core::cell::RefCell
    MethodMut,
    /// A method bound to an object kept alive by an [`Rc`].
    ///
    /// [`Rc`]: https://doc.rust-lang.org/alloc/rc/struct.Rc.html
    Shared,
    /// A method bound to an object through a [`Weak`] reference.
    ///
    /// [`Weak`]: https://doc.rust-lang.org/alloc/rc/struct.Weak.html
    Weak,
    /// A closure stored inline.
    Closure,
}

/// The type-erased payload of a [`Delegate`], independent of its argument types.
///
/// Only the payload is dropped, so [`Delegate`] itself has no [`Drop`] impl and borrows in its
/// argument tuple need not outlive it.
struct Payload<'a> {
    data: raw::Data,
    vtable: &'static raw::VTable,
    /// Allows the payload to borrow objects that live for at least `'a`.
    _lifetime: core::marker::PhantomData<&'a ()>,
}

impl Payload<'_> {
    fn is_expired(&self) -> bool {
        // SAFETY: `vtable` was created for the payload stored in `data`.
        unsafe { (self.vtable.expired)(&self.data) }
    }
}

impl Clone for Payload<'_> {
    fn clone(&self) -> Self {
        Self {
            // SAFETY: `vtable` was created for the payload stored in `data`.
            data: unsafe { (self.vtable.clone)(&self.data) },
            vtable: self.vtable,
            _lifetime: core::marker::PhantomData,
        }
    }
}

impl Drop for Payload<'_> {
    fn drop(&mut self) {
        // SAFETY: `vtable` was created for the payload stored in `data`, which isn't used after
        // this point.
        unsafe { (self.vtable.drop)(&mut self.data) }
    }
}

impl core::fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // SAFETY: `vtable` was created for the payload stored in `data`.
        unsafe { (self.vtable.debug)(&self.data, f) }
    }
}

/// A callable taking the argument tuple `A`, which is either a function pointer or a method
/// bound to an object.
///
/// The argument list is written as a tuple: `Delegate<()>` takes no arguments,
/// `Delegate<(i32,)>` takes one, `Delegate<(i32, &str)>` takes two, and so on, up to eight.
///
/// # Storage
///
/// The wrapped callable is stored inline in a [`raw::Data`] of fixed capacity, alongside the
/// function used to call it. Constructing a [`Delegate`] never allocates, and calling one costs a
/// single indirect function call.
///
/// Payloads that do not fit are rejected at compile time:
///
/// ```compile_fail
/// # use sigbind_delegate::Delegate;
/// let (a, b, c) = (1usize, 2usize, 3usize);
/// let too_large = Delegate::<()>::from_closure(move || assert_eq!(a + b, c));
/// too_large.call(());
/// ```
///
/// # Lifetimes
///
/// Objects bound with `bind()` or `bind_mut()` are borrowed for `'a`, so the borrow checker
/// ensures they outlive the [`Delegate`]. To keep an object alive instead, use `bind_rc()`; to
/// refer to an object that may be dropped first, use `bind_weak()`.
///
/// Borrows passed as arguments only need to live for the duration of a call.
pub struct Delegate<'a, A> {
    payload: Payload<'a>,
    invoke: raw::Invoke<A>,
}

impl<'a, A> Delegate<'a, A> {
    fn store<T: target::Target>(target: T, invoke: raw::Invoke<A>) -> Self {
        Self {
            payload: Payload {
                data: raw::Data::new(target),
                vtable: T::VTABLE,
                _lifetime: core::marker::PhantomData,
            },
            invoke,
        }
    }

    /// Calls the wrapped function or method with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the object a method is bound to could not be accessed, in which case
    /// the method is not called. Delegates wrapping function pointers, closures, and methods
    /// bound with `bind()` or `bind_rc()` never fail.
    #[must_use = "a failed call means the bound method was not invoked"]
    pub fn try_call(&self, arguments: A) -> Result<(), CallError> {
        // SAFETY: `invoke` was created together with the payload stored in `data`.
        unsafe { (self.invoke)(&self.payload.data, arguments) }
    }

    /// Calls the wrapped function or method with the given arguments.
    ///
    /// If the bound object could not be accessed (see [`CallError`]), the method is silently not
    /// called. Use [`Delegate::try_call()`] to find out whether the call happened.
    pub fn call(&self, arguments: A) {
        let _ = self.try_call(arguments);
    }

    /// Gets the kind of callable this [`Delegate`] wraps.
    pub fn kind(&self) -> TargetKind {
        self.payload.vtable.kind
    }

    /// Returns `true` if this [`Delegate`] refers to an object through a [`Weak`] reference, and
    /// that object has been dropped.
    ///
    /// [`Weak`]: TargetKind::Weak
    pub fn is_expired(&self) -> bool {
        self.payload.is_expired()
    }
}

impl<A> Clone for Delegate<'_, A> {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone(),
            invoke: self.invoke,
        }
    }
}

impl<A> core::fmt::Debug for Delegate<'_, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Delegate")
            .field("kind", &self.kind())
            .field("target", &self.payload)
            .finish()
    }
}
