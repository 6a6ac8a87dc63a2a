//! Payloads that a [`Delegate`] stores inline.
//!
//! [`Delegate`]: crate::Delegate

use crate::{
    raw::{Data, VTable},
    TargetKind,
};
use core::{any::type_name, cell::RefCell, fmt};

pub(crate) trait Target: Clone + Sized {
    const KIND: TargetKind;

    const VTABLE: &'static VTable = &VTable {
        kind: Self::KIND,
        clone: clone_payload::<Self>,
        drop: drop_payload::<Self>,
        expired: expired_payload::<Self>,
        debug: debug_payload::<Self>,
    };

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn is_expired(&self) -> bool {
        false
    }
}

unsafe fn clone_payload<T: Target>(data: &Data) -> Data {
    // SAFETY: `data` contains a `T`.
    let target = unsafe { data.as_ref::<T>() };
    Data::new(target.clone())
}

unsafe fn drop_payload<T: Target>(data: &mut Data) {
    // SAFETY: `data` contains a `T`, and the delegate is not used after this point.
    unsafe { data.drop_in_place::<T>() }
}

unsafe fn expired_payload<T: Target>(data: &Data) -> bool {
    // SAFETY: `data` contains a `T`.
    unsafe { data.as_ref::<T>() }.is_expired()
}

unsafe fn debug_payload<T: Target>(data: &Data, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // SAFETY: `data` contains a `T`.
    unsafe { data.as_ref::<T>() }.describe(f)
}

/// A plain function pointer.
#[derive(Clone, Copy)]
pub(crate) struct FnPointer<F>(pub(crate) F);

impl<F: Copy> Target for FnPointer<F> {
    const KIND: TargetKind = TargetKind::Function;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<F>())
    }
}

/// A method bound to a shared reference.
pub(crate) struct Bound<'a, T, M> {
    pub(crate) object: &'a T,
    pub(crate) method: M,
}

impl<T, M: Copy> Clone for Bound<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M: Copy> Copy for Bound<'_, T, M> {}

impl<T, M: Copy> Target for Bound<'_, T, M> {
    const KIND: TargetKind = TargetKind::Method;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", type_name::<T>())
    }
}

/// A method taking `&mut self`, bound to an object in a [`RefCell`].
pub(crate) struct BoundMut<'a, T, M> {
    pub(crate) object: &'a RefCell<T>,
    pub(crate) method: M,
}

impl<T, M: Copy> Clone for BoundMut<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M: Copy> Copy for BoundMut<'_, T, M> {}

impl<T, M: Copy> Target for BoundMut<'_, T, M> {
    const KIND: TargetKind = TargetKind::MethodMut;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&RefCell<{}>", type_name::<T>())
    }
}

/// A method bound to an object the delegate shares ownership of.
#[cfg(feature = "alloc")]
pub(crate) struct Shared<T, M> {
    pub(crate) object: alloc::rc::Rc<T>,
    pub(crate) method: M,
}

#[cfg(feature = "alloc")]
impl<T, M: Copy> Clone for Shared<T, M> {
    fn clone(&self) -> Self {
        Self {
            object: alloc::rc::Rc::clone(&self.object),
            method: self.method,
        }
    }
}

#[cfg(feature = "alloc")]
impl<T, M: Copy> Target for Shared<T, M> {
    const KIND: TargetKind = TargetKind::Shared;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rc<{}>", type_name::<T>())
    }
}

/// A method bound to an object that may be dropped before the delegate is.
#[cfg(feature = "alloc")]
pub(crate) struct Observed<T, M> {
    pub(crate) object: alloc::rc::Weak<T>,
    pub(crate) method: M,
}

#[cfg(feature = "alloc")]
impl<T, M: Copy> Clone for Observed<T, M> {
    fn clone(&self) -> Self {
        Self {
            object: alloc::rc::Weak::clone(&self.object),
            method: self.method,
        }
    }
}

#[cfg(feature = "alloc")]
impl<T, M: Copy> Target for Observed<T, M> {
    const KIND: TargetKind = TargetKind::Weak;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weak<{}>", type_name::<T>())?;
        if self.is_expired() {
            f.write_str(" (expired)")?;
        }
        Ok(())
    }

    fn is_expired(&self) -> bool {
        self.object.strong_count() == 0
    }
}

/// A closure small enough to be stored inline.
#[derive(Clone)]
pub(crate) struct Closure<C>(pub(crate) C);

impl<C: Clone> Target for Closure<C> {
    const KIND: TargetKind = TargetKind::Closure;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<C>())
    }
}
