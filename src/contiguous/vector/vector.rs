use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;
use std::str::{self, Utf8Error};

use crate::contiguous::buffer::Buffer;
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

pub(crate) const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, growing its heap allocation as values are pushed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let vec: Vector<i32> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is always exactly the value last
    /// requested by [`with_cap`](Vector::with_cap), [`reserve`](Vector::reserve),
    /// [`shrink_to_fit`](Vector::shrink_to_fit) or chosen by growth.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics with an [`IndexOutOfBounds`] message if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push(11);
    /// vec.push(12);
    /// assert_eq!(*vec.at(1), 12);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// # use vector_basics::error::IndexOutOfBounds;
    /// let vec = Vector::from([11, 12]);
    /// assert_eq!(vec.try_at(0), Ok(&11));
    /// assert_eq!(vec.try_at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized and inside the allocation.
        Ok(unsafe { self.buf.ptr.add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics with an [`IndexOutOfBounds`] message if `index >= len`.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized and inside the allocation. We hold a
        // unique borrow of self for the lifetime of the returned reference.
        Ok(unsafe { self.buf.ptr.add(index).as_mut() })
    }

    /// Pushes the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes the provided value onto the end of the Vector, returning an error instead of
    /// panicking if the Vector can't grow. The value is dropped if an error is returned.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if growing would need more than [`isize::MAX`] bytes.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Pushes the provided value onto the end of the Vector, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`, for example with [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap). Using this method on a full Vector is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: vec was created with room for all three values.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees len < cap, so the write is inside the allocation.
        unsafe { self.buf.ptr.add(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector wasn't empty.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec = Vector::from([11, 12]);
    /// assert_eq!(vec.pop(), Some(12));
    /// assert_eq!(vec.len(), 1);
    /// assert_eq!(vec.pop(), Some(11));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old len - 1 is initialized. Decrementing len first means the
        // Vector no longer considers it initialized, so the read moves the value out.
        Some(unsafe { self.buf.ptr.add(self.len).read() })
    }

    /// Inserts the provided value at `index`, shifting every following element one place to the
    /// right. Inserting at `len` is the same as pushing.
    ///
    /// # Panics
    /// Panics if `index > len` or if the Vector can't grow.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(4, 200);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an error instead of panicking.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len` or [`CapacityOverflow`] if the Vector can't
    /// grow, both wrapped in an [`IndexOrCapOverflow`].
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: There is room for one more element. The shifted range [index, len) is
        // initialized and [index + 1, len + 1) is inside the allocation; ptr::copy allows overlap.
        unsafe {
            let slot = self.buf.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting every following element one place to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();

        // SAFETY: index < len so the slot is initialized. After reading it out, the tail
        // [index + 1, len) is moved down by one, which stays inside the initialized range.
        unsafe {
            let slot = self.buf.ptr.add(index);
            let value = slot.read();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops every element, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first so that a panicking drop can't cause a double drop.
        self.len = 0;
        // SAFETY: The first len slots were initialized and are no longer tracked by the Vector.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), len));
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    #[track_caller]
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Like [`reserve`](Vector::reserve), but returns an error instead of panicking.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `len + extra` overflows or needs more than [`isize::MAX`]
    /// bytes.
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// # use vector_basics::error::CapacityOverflow;
    /// let mut vec = Vector::from([1_u32]);
    /// assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    /// assert!(vec.try_reserve(4).is_ok());
    /// assert!(vec.cap() >= 5);
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.buf.try_realloc(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        // Shrinking to len never exceeds the current layout, so this can't overflow.
        self.buf.realloc(self.len);
    }

    /// Grows the buffer so that at least one more element fits. The capacity doubles, starting
    /// from [`MIN_CAP`]. When doubling would overflow, it falls back to room for exactly one more.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        self.try_reserve_amortized(1)
    }

    /// Makes room for `extra` more elements ahead of a bulk append. Nothing happens if they
    /// already fit, otherwise the capacity grows to at least double, so that many small appends
    /// still only reallocate a logarithmic number of times.
    pub(crate) fn try_reserve_amortized(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required <= self.cap() {
            return Ok(());
        }

        let doubled = self.cap().saturating_mul(GROWTH_FACTOR);

        match self.buf.try_realloc(cmp::max(doubled, cmp::max(required, MIN_CAP))) {
            Ok(()) => Ok(()),
            Err(CapacityOverflow) => self.buf.try_realloc(required),
        }
    }

    /// Checks that the provided index refers to an initialized element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector holding `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_basics::contiguous::Vector;
    /// let vec = Vector::repeat(0, 5);
    /// assert_eq!(&*vec, &[0, 0, 0, 0, 0]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn repeat(item: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);

        for _ in 0..count {
            // SAFETY: vec was created with exactly count capacity.
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.try_reserve_amortized(iter.size_hint().0).throw();

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec was created with exactly N capacity.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // self.buf is dropped afterwards, which deallocates without touching any values.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, the pointer is non-null and aligned, and
        // the allocation is no larger than isize::MAX bytes. The borrow of self keeps the Vector
        // from being mutated while the slice lives.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the unique borrow of self keeps the slice unaliased.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which is at least self.len.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl io::Write for Vector<u8> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.try_reserve_amortized(buf.len()).map_err(io::Error::other)?;

        for byte in buf {
            // SAFETY: Room for every byte in buf was reserved above.
            unsafe { self.push_unchecked(*byte); }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TryFrom<Vector<u8>> for String {
    type Error = Utf8Error;

    fn try_from(value: Vector<u8>) -> Result<Self, Self::Error> {
        str::from_utf8(&value).map(str::to_owned)
    }
}
