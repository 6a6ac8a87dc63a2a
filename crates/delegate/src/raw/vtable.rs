use crate::{raw::Data, TargetKind};

/// A table of functions that operate on the payload of a [`Delegate`], independent of its
/// argument types.
///
/// Each payload type has exactly one [`VTable`], created alongside the [`Invoke`] dispatcher when
/// a [`Delegate`] is constructed.
///
/// [`Delegate`]: crate::Delegate
/// [`Invoke`]: crate::raw::Invoke
pub(crate) struct VTable {
    pub(crate) kind: TargetKind,
    /// Called when the [`Delegate`] is [`clone`]d. Must return [`Data`] that can be used with the
    /// same [`VTable`].
    ///
    /// [`Delegate`]: crate::Delegate
    /// [`clone`]: Clone::clone()
    pub(crate) clone: unsafe fn(&Data) -> Data,
    /// Called when the [`Delegate`] is [`drop`]ped. This function is responsible for dropping the
    /// contents of the [`Data`].
    ///
    /// [`Delegate`]: crate::Delegate
    /// [`drop`]: core::ops::Drop
    pub(crate) drop: unsafe fn(&mut Data),
    /// Returns `true` if the object the payload refers to no longer exists.
    pub(crate) expired: unsafe fn(&Data) -> bool,
    pub(crate) debug: unsafe fn(&Data, &mut core::fmt::Formatter<'_>) -> core::fmt::Result,
}
