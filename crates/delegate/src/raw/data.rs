/// The largest payload a [`Delegate`] stores: an object pointer paired with a method pointer.
///
/// [`Delegate`]: crate::Delegate
type WorstCase = (*const (), fn(*const ()));

const INLINE_LEN: usize = core::mem::size_of::<WorstCase>();

/// Inline storage for the payload of a [`Delegate`].
///
/// Every [`Delegate`] uses the same [`CAPACITY`], regardless of its argument types, so delegates
/// wrapping different kinds of callables all have the same size.
///
/// [`Delegate`]: crate::Delegate
/// [`CAPACITY`]: Data::CAPACITY
#[derive(Clone, Copy)]
pub union Data {
    /// Gives [`Data`] the alignment of the worst-case payload.
    #[allow(dead_code)]
    words: core::mem::MaybeUninit<WorstCase>,
    /// The payload bytes.
    ///
    /// Note that when a struct with padding is stored inline, reading those bytes corresponding to
    /// padding is **undefined behavior**.
    #[allow(dead_code)]
    bytes: core::mem::MaybeUninit<[u8; INLINE_LEN]>,
}

/// Fails to compile when a `T` does not fit into [`Data`].
struct Fits<T>(core::marker::PhantomData<T>);

impl<T> Fits<T> {
    const ASSERTION: () = assert!(
        Data::can_store_inline::<T>(),
        "payload is too large or too strictly aligned to be stored inline in a delegate"
    );
}

impl Data {
    /// The number of bytes available for a payload.
    pub const CAPACITY: usize = INLINE_LEN;

    /// [`Data`] with all bytes uninitialized.
    pub const UNINIT: Self = Self {
        bytes: core::mem::MaybeUninit::uninit(),
    };

    /// Returns `true` if an instance of `T` can be stored inline.
    pub const fn can_store_inline<T>() -> bool {
        core::mem::size_of::<T>() <= Self::CAPACITY
            && core::mem::align_of::<T>() <= core::mem::align_of::<Self>()
    }

    /// Moves the given `value` into inline storage.
    ///
    /// The `value` is not dropped unless [`Data::drop_in_place()`] is called.
    ///
    /// Using a `T` for which [`can_store_inline::<T>()`] returns `false` is a compile-time error.
    ///
    /// [`can_store_inline::<T>()`]: Data::can_store_inline()
    pub fn new<T>(value: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Fits::<T>::ASSERTION;

        let mut data = Self::UNINIT;

        // SAFETY: the assertion above ensures `T` fits.
        unsafe {
            core::ptr::write(data.as_mut_ptr::<T>(), value);
        }

        data
    }

    /// Attempts to move the given `value` into inline storage.
    ///
    /// # Errors
    ///
    /// Returns the `value` if [`size_of::<T>()`] is larger than [`CAPACITY`], or if
    /// [`align_of::<T>()`] is greater than `align_of::<Data>()`.
    ///
    /// [`size_of::<T>()`]: core::mem::size_of()
    /// [`align_of::<T>()`]: core::mem::align_of()
    /// [`CAPACITY`]: Data::CAPACITY
    pub fn try_new<T>(value: T) -> Result<Self, T> {
        if Self::can_store_inline::<T>() {
            let mut data = Self::UNINIT;

            // SAFETY: check for size and alignment occurs above.
            unsafe {
                core::ptr::write(data.as_mut_ptr::<T>(), value);
            }

            Ok(data)
        } else {
            Err(value)
        }
    }

    fn as_ptr<T>(&self) -> *const T {
        self as *const Self as *const T
    }

    fn as_mut_ptr<T>(&mut self) -> *mut T {
        self as *mut Self as *mut T
    }

    /// Interprets the inline data as containing a [valid] instance of `T`, and returns a reference
    /// to it.
    ///
    /// # Safety
    ///
    /// The data must actually contain a [valid], initialized instance of `T`, written by
    /// [`Data::new()`] or [`Data::try_new()`] and not yet dropped.
    ///
    /// [valid]: core::ptr#safety
    pub unsafe fn as_ref<T>(&self) -> &T {
        #[allow(clippy::let_unit_value)]
        let () = Fits::<T>::ASSERTION;

        // SAFETY: caller ensures the data contains a valid `T`.
        // SAFETY: the inline data lives as long as `self` does.
        unsafe { &*self.as_ptr::<T>() }
    }

    /// Runs the destructor of the `T` stored inline.
    ///
    /// # Safety
    ///
    /// Callers must ensure that the data actually contains a [valid], initialized instance of `T`,
    /// and that it is not used again afterwards.
    ///
    /// [valid]: core::ptr#safety
    pub unsafe fn drop_in_place<T>(&mut self) {
        #[allow(clippy::let_unit_value)]
        let () = Fits::<T>::ASSERTION;

        // SAFETY: caller ensures data contains a valid `T`.
        unsafe { core::ptr::drop_in_place(self.as_mut_ptr::<T>()) }
    }
}

impl core::fmt::Debug for Data {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Can't read bytes, might be `uninit`.
        f.debug_struct("Data").finish_non_exhaustive()
    }
}
