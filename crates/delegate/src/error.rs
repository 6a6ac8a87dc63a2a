/// Error type used when a [`Delegate`] could not reach the object its method is bound to.
///
/// The callable itself never produces a [`CallError`]; only the binding can fail, before the
/// callable is invoked.
///
/// [`Delegate`]: crate::Delegate
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CallError {
    /// The object referred to by a weakly bound method was dropped.
    Expired,
    /// The [`RefCell`] containing the object of a mutably bound method was already borrowed, for
    /// example because the method re-entered the same delegate.
    ///
    /// [`RefCell`]: core::cell::RefCell
    AlreadyBorrowed,
}

impl core::fmt::Display for CallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Expired => "bound object no longer exists",
            Self::AlreadyBorrowed => "bound object is already borrowed",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CallError {}
