use crate::{
    raw::Invoke,
    target::{Bound, BoundMut, Closure, FnPointer},
    CallError, Delegate,
};
use core::cell::RefCell;

#[cfg(feature = "alloc")]
use {
    crate::target::{Observed, Shared},
    alloc::rc::{Rc, Weak},
};

macro_rules! define_constructors {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        /// Constructors for delegates taking
        #[doc = stringify!($number)]
        /// arguments.
        #[allow(clippy::too_many_arguments)]
        impl<'a, $($parameter),*> Delegate<'a, ($($parameter,)*)> {
            /// Creates a [`Delegate`] that calls the given function pointer.
            ///
            /// The function pointer is stored directly, and calling the [`Delegate`] simply calls
            /// the function with the provided arguments.
            pub fn from_fn(function: fn($($parameter),*)) -> Self {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains a `FnPointer` of this exact type.
                    let target = unsafe { data.as_ref::<FnPointer<fn($($parameter),*)>>() };
                    (target.0)($($argument),*);
                    Ok(())
                };

                Self::store(FnPointer(function), invoke)
            }

            /// Creates a [`Delegate`] that calls the given `method` on a borrowed `object`.
            ///
            /// The `object` is borrowed for as long as the [`Delegate`] (and any of its clones)
            /// exist. To bind a method that takes `&mut self`, see `bind_mut()`.
            pub fn bind<T>(object: &'a T, method: fn(&T, $($parameter),*)) -> Self
            where
                T: 'a,
            {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains a `Bound` of this exact type.
                    let target = unsafe {
                        data.as_ref::<Bound<'a, T, fn(&T, $($parameter),*)>>()
                    };

                    (target.method)(target.object, $($argument),*);
                    Ok(())
                };

                Self::store(Bound { object, method }, invoke)
            }

            /// Creates a [`Delegate`] that calls a `method` taking `&mut self` on an `object`
            /// stored in a [`RefCell`].
            ///
            /// The [`RefCell`] is mutably borrowed for the duration of each call. If it is
            /// already borrowed, the call fails with [`CallError::AlreadyBorrowed`] and the
            /// `method` is not invoked.
            pub fn bind_mut<T>(object: &'a RefCell<T>, method: fn(&mut T, $($parameter),*)) -> Self
            where
                T: 'a,
            {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains a `BoundMut` of this exact type.
                    let target = unsafe {
                        data.as_ref::<BoundMut<'a, T, fn(&mut T, $($parameter),*)>>()
                    };

                    let mut object = target
                        .object
                        .try_borrow_mut()
                        .map_err(|_| CallError::AlreadyBorrowed)?;

                    (target.method)(&mut *object, $($argument),*);
                    Ok(())
                };

                Self::store(BoundMut { object, method }, invoke)
            }

            /// Creates a [`Delegate`] that keeps the `object` alive, and calls the given `method`
            /// on it.
            #[cfg(feature = "alloc")]
            pub fn bind_rc<T>(object: Rc<T>, method: fn(&T, $($parameter),*)) -> Self
            where
                T: 'a,
            {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains a `Shared` of this exact type.
                    let target = unsafe {
                        data.as_ref::<Shared<T, fn(&T, $($parameter),*)>>()
                    };

                    (target.method)(&*target.object, $($argument),*);
                    Ok(())
                };

                Self::store(Shared { object, method }, invoke)
            }

            /// Creates a [`Delegate`] that calls the given `method` on the `object`, as long as
            /// the `object` has not been dropped.
            ///
            /// Calls made after the last [`Rc`] to the `object` is dropped fail with
            /// [`CallError::Expired`].
            #[cfg(feature = "alloc")]
            pub fn bind_weak<T>(object: Weak<T>, method: fn(&T, $($parameter),*)) -> Self
            where
                T: 'a,
            {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains an `Observed` of this exact type.
                    let target = unsafe {
                        data.as_ref::<Observed<T, fn(&T, $($parameter),*)>>()
                    };

                    let object = target.object.upgrade().ok_or(CallError::Expired)?;
                    (target.method)(&*object, $($argument),*);
                    Ok(())
                };

                Self::store(Observed { object, method }, invoke)
            }

            /// Creates a [`Delegate`] that calls the given closure.
            ///
            /// The closure is stored inline, so it may capture at most as much as a bound method
            /// does: two pointer-sized values. Larger closures fail to compile.
            pub fn from_closure<C>(closure: C) -> Self
            where
                C: Fn($($parameter),*) + Clone + 'a,
            {
                let invoke: Invoke<($($parameter,)*)> = |data, ($($argument,)*)| {
                    // SAFETY: `data` contains a `Closure` of this exact type.
                    let target = unsafe { data.as_ref::<Closure<C>>() };
                    (target.0)($($argument),*);
                    Ok(())
                };

                Self::store(Closure(closure), invoke)
            }
        }
    };
}

crate::with_parameters!(define_constructors);
