use core::{
    num::NonZeroU64,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Identifies the [`Signal`] that a [`Handle`] was returned by.
///
/// [`Signal`]: crate::Signal
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Owner(usize);

static NEXT_OWNER: AtomicUsize = AtomicUsize::new(0);

impl Owner {
    pub(crate) fn unique() -> Self {
        Self(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifies a single subscriber connected to a [`Signal`].
///
/// Handles are never reused by the [`Signal`] that returned them, even after the subscriber is
/// disconnected. A [`Handle`] given to a different [`Signal`] does not refer to any of its
/// subscribers.
///
/// [`Signal`]: crate::Signal
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle {
    owner: Owner,
    index: NonZeroU64,
}

impl Handle {
    pub(crate) fn first(owner: Owner) -> Self {
        Self {
            owner,
            index: NonZeroU64::MIN,
        }
    }

    pub(crate) fn successor(self) -> Option<Self> {
        Some(Self {
            owner: self.owner,
            index: self.index.checked_add(1)?,
        })
    }
}

impl core::fmt::Debug for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.index)
    }
}
