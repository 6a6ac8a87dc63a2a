use crate::{Handle, Signal};
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use sigbind_delegate::Delegate;

macro_rules! define_connect {
    (($($argument:ident: $parameter:ident),*); $number:literal) => {
        /// Connects subscribers taking
        #[doc = stringify!($number)]
        /// arguments.
        #[allow(clippy::too_many_arguments)]
        impl<'a, $($parameter),*> Signal<'a, ($($parameter,)*)> {
            /// Connects a free function.
            pub fn connect_fn(&self, function: fn($($parameter),*)) -> Handle {
                self.connect(Delegate::<($($parameter,)*)>::from_fn(function))
            }

            /// Connects a `method` to be called on the borrowed `object`.
            ///
            /// The `object` stays borrowed for as long as the [`Signal`] exists.
            pub fn connect_method<T>(&self, object: &'a T, method: fn(&T, $($parameter),*)) -> Handle
            where
                T: 'a,
            {
                self.connect(Delegate::<($($parameter,)*)>::bind(object, method))
            }

            /// Connects a `method` taking `&mut self`, called on an `object` in a [`RefCell`].
            ///
            /// When [`emit()`] finds the [`RefCell`] already borrowed, this subscriber is skipped
            /// and counted in [`Emission::failed`].
            ///
            /// [`emit()`]: Signal::emit()
            /// [`Emission::failed`]: crate::Emission::failed
            pub fn connect_method_mut<T>(
                &self,
                object: &'a RefCell<T>,
                method: fn(&mut T, $($parameter),*),
            ) -> Handle
            where
                T: 'a,
            {
                self.connect(Delegate::<($($parameter,)*)>::bind_mut(object, method))
            }

            /// Connects a `method` on an `object` that the [`Signal`] keeps alive until the
            /// subscriber is disconnected.
            pub fn connect_rc<T>(&self, object: Rc<T>, method: fn(&T, $($parameter),*)) -> Handle
            where
                T: 'a,
            {
                self.connect(Delegate::<($($parameter,)*)>::bind_rc(object, method))
            }

            /// Connects a `method` on an `object` that may be dropped while still connected.
            ///
            /// Once the `object` is dropped, [`emit()`] skips this subscriber. Expired subscribers
            /// can be removed with [`retain_live()`].
            ///
            /// [`emit()`]: Signal::emit()
            /// [`retain_live()`]: Signal::retain_live()
            pub fn connect_weak<T>(&self, object: Weak<T>, method: fn(&T, $($parameter),*)) -> Handle
            where
                T: 'a,
            {
                self.connect(Delegate::<($($parameter,)*)>::bind_weak(object, method))
            }

            /// Connects a small closure.
            pub fn connect_closure<C>(&self, closure: C) -> Handle
            where
                C: Fn($($parameter),*) + Clone + 'a,
            {
                self.connect(Delegate::<($($parameter,)*)>::from_closure(closure))
            }
        }
    };
}

sigbind_delegate::with_parameters!(define_connect);
