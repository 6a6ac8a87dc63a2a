//! Types describing how the payload of a [`Delegate`] is stored and invoked.
//!
//! [`Delegate`]: crate::Delegate

mod data;
mod vtable;

pub use data::Data;
pub(crate) use vtable::VTable;

/// The dispatcher of a [`Delegate`], chosen once when it is constructed.
///
/// It reinterprets the [`Data`] as the exact payload type it was created for, and forwards the
/// argument tuple `A` to the underlying function or method.
///
/// [`Delegate`]: crate::Delegate
pub type Invoke<A> = unsafe fn(&Data, A) -> Result<(), crate::CallError>;
