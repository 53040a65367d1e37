use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, uninitialized heap allocation with room for `cap` values of `T`.
///
/// A Buffer never reads, writes or drops the values it has room for. Keeping track of which slots
/// are initialized is the job of the owner (see [`Vector`](super::Vector)). Dropping a Buffer only
/// returns its memory to the global allocator.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with no capacity and a dangling pointer. Nothing is allocated.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with room for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let mut buf = Buffer::new();
        buf.realloc(cap);
        buf
    }

    /// Resizes the allocation so that it has room for exactly `new_cap` values.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        self.try_realloc(new_cap).throw()
    }

    /// Resizes the allocation so that it has room for exactly `new_cap` values. Values stored in
    /// slots `< min(cap, new_cap)` are preserved, anything above that is forgotten.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new layout would exceed [`isize::MAX`] bytes. The
    /// Buffer is left untouched in that case. Allocation failure itself goes through
    /// [`alloc::handle_alloc_error`].
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        let new_layout = Self::layout_for(new_cap)?;

        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never need memory, only the capacity changes.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => {
                // SAFETY: new_cap is > 0 and T isn't zero-sized, so the layout has non-zero size.
                let raw = unsafe { alloc::alloc(new_layout) };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
            (_, 0) => {
                self.dealloc();
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::layout_for(self.cap)?;
                // SAFETY: ptr was allocated by the global allocator with old_layout, and the new
                // size is non-zero and no greater than isize::MAX once rounded to the alignment
                // (checked by layout_for).
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the current allocation, if there is one. The pointer is left dangling.
    fn dealloc(&mut self) {
        if size_of::<T>() == 0 || self.cap == 0 {
            return;
        }

        // SAFETY: cap was accepted by layout_for when this allocation was made, so the array
        // layout is valid and identical to the one the global allocator handed out. It has
        // non-zero size because both zero capacity and zero-sized types return early above.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                size_of::<T>() * self.cap,
                align_of::<T>(),
            );
            alloc::dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }

    fn layout_for(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.dealloc();
    }
}

// SAFETY: A Buffer uniquely owns its allocation, just like a Box.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer has no interior mutability.
unsafe impl<T: Sync> Sync for Buffer<T> {}
