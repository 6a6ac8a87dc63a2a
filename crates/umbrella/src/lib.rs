//! Type-erased bindings to free functions and methods, and signals that call many of them at once.
//!
//! ```
//! use sigbind::{signal::Signal, Delegate};
//! use std::cell::Cell;
//!
//! struct Counter {
//!     step: i32,
//! }
//!
//! impl Counter {
//!     fn advance(&self, total: &Cell<i32>) {
//!         total.set(total.get() + self.step);
//!     }
//! }
//!
//! let counter = Counter { step: 5 };
//! let total = Cell::new(0);
//!
//! let delegate = Delegate::<(&Cell<i32>,)>::bind(&counter, Counter::advance);
//! delegate.call((&total,));
//! assert_eq!(total.get(), 5);
//!
//! let signal = Signal::new();
//! signal.connect(delegate.clone());
//! signal.connect(delegate);
//! signal.emit((&total,));
//! assert_eq!(total.get(), 15);
//! ```
//!
//! # Related Crates
//!
//! The implementation for [`sigbind`](crate) is split into multiple component crates, which are:
//! - [`sigbind_delegate`], which provides the [`Delegate`] type. Its items are re-exported in the
//!   crate root.
//! - [`sigbind_signal`], which provides the [`Signal`] registry. It is enabled by the
//!   [`signal`](crate#signal) feature flag, and is re-exported as the [`signal`] module.
//!
//! # Feature Flags
//!
//! By default, the [`std`](crate#std) and [`signal`](crate#signal) flags are enabled.
//!
//! ## [`std`]
//!
//! Enables a dependency on the [Rust standard library](std). Currently only used to implement
//! [`std::error::Error`] for [`CallError`].
//!
//! - Enables: [`alloc`](crate#alloc).
//! - Enabled by: [`default`](crate#feature-flags)
//!
//! ## [`alloc`]
//!
//! Enables a dependency on the [Rust core allocation library](alloc), allowing methods to be
//! bound to objects behind an [`Rc`] or [`Weak`] reference.
//!
//! - Enabled by: [`std`](crate#std), [`signal`](crate#signal), [`default`](crate#feature-flags)
//!
//! ## [`signal`]
//!
//! Enables the [`signal`] module. Adds a dependency on the [`sigbind_signal`] crate.
//!
//! - Enables: [`alloc`](crate#alloc).
//! - Enabled by: [`default`](crate#feature-flags)
//!
//! [`Signal`]: sigbind_signal::Signal
//! [`Rc`]: alloc::rc::Rc
//! [`Weak`]: alloc::rc::Weak

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)] // Unsafe code present in dependencies
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub use sigbind_delegate::{raw, CallError, Delegate, TargetKind};

#[cfg(feature = "signal")]
pub use sigbind_signal as signal;
