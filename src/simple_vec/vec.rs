use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::slice;

use super::array_buf::ArrayBuf;
use crate::types::ErrorKind;
use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

/// A request to build a vector with this much reserved storage and length zero.
///
/// Carries a single capacity value and nothing else, so the reserving
/// constructor can never be mistaken for the length-taking one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reserve(usize);

impl Reserve {
    pub const fn new(capacity: usize) -> Self {
        return Self(capacity);
    }

    pub const fn get(self) -> usize {
        return self.0;
    }
}

/// A growable contiguous array with a logical length tracked separately from
/// the capacity of the [`ArrayBuf`] underneath.
///
/// Elements at `[0, len)` are the content; slots at `[len, capacity)` exist
/// (default-constructed or stale from earlier shrinks) but are logically
/// absent. Capacity only ever grows, by doubling, and growth is always built
/// in a fresh buffer that is swapped in whole. A growth that fails leaves the
/// vector exactly as it was.
pub struct SimpleVec<T> {
    buf: ArrayBuf<T>,
    len: usize,
}

impl<T> SimpleVec<T> {
    /// An empty vector with no storage. Never allocates.
    pub const fn new() -> Self {
        return Self {
            buf: ArrayBuf::new(),
            len: 0,
        };
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.buf.len();
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.buf.as_slice()[..self.len];
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        return &mut self.buf.as_mut_slice()[..len];
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.buf.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&self) -> *mut T {
        return self.buf.as_mut_ptr();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        return self.as_mut_slice().iter_mut();
    }

    /// Checked access. Reports `OutOfRange` for `index >= len` instead of
    /// panicking; `vec[index]` is the unchecked hot path.
    pub fn at(&self, index: usize) -> SimpleVecResult<&T> {
        if index >= self.len {
            return Err(SimpleVecErr::new(ErrorKind::OutOfRange));
        }
        return Ok(&self.buf[index]);
    }

    pub fn at_mut(&mut self, index: usize) -> SimpleVecResult<&mut T> {
        if index >= self.len {
            return Err(SimpleVecErr::new(ErrorKind::OutOfRange));
        }
        return Ok(&mut self.buf[index]);
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { &*self.as_ptr().add(index) }
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Drops the content logically in O(1). Capacity and storage stay put for
    /// reuse; stale values are released when the buffer itself goes.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges buffer, length, and capacity with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    fn grown_capacity(&self) -> SimpleVecResult<usize> {
        if self.capacity() == 0 {
            return Ok(1);
        }
        let Some(doubled) = self.capacity().checked_mul(2) else {
            return Err(SimpleVecErr::new(ErrorKind::CapacityOverflow));
        };
        return Ok(doubled);
    }
}

impl<T: Default> SimpleVec<T> {
    /// A vector of `length` default values, with capacity equal to length.
    pub fn with_len(length: usize) -> SimpleVecResult<Self> {
        let buf = ArrayBuf::with_len(length)?;
        return Ok(Self {
            buf: buf,
            len: length,
        });
    }

    /// An empty vector with room for `capacity` elements already allocated.
    pub fn with_capacity(capacity: usize) -> SimpleVecResult<Self> {
        let buf = ArrayBuf::with_len(capacity)?;
        return Ok(Self { buf: buf, len: 0 });
    }

    /// The [`Reserve`]-request form of [`SimpleVec::with_capacity`].
    pub fn with_reserve(request: Reserve) -> SimpleVecResult<Self> {
        return Self::with_capacity(request.get());
    }

    /// A vector of `length` clones of `value`.
    pub fn filled(length: usize, value: &T) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        let mut out = Self::with_len(length)?;
        for slot in out.as_mut_slice() {
            slot.clone_from(value);
        }
        return Ok(out);
    }

    /// A vector holding clones of `values`, in order. This is the literal-list
    /// constructor; length and capacity both equal `values.len()`.
    pub fn from_slice(values: &[T]) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        let mut out = Self::with_len(values.len())?;
        out.as_mut_slice().clone_from_slice(values);
        return Ok(out);
    }

    /// A fully independent deep copy with the exact length and capacity of
    /// `self`. Allocation is fallible here like everywhere else, which is why
    /// this is not a `Clone` impl.
    pub fn try_clone(&self) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.capacity())?;
        copy.buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        copy.len = self.len;
        return Ok(copy);
    }

    /// Grows capacity to exactly `new_capacity`; anything not above the
    /// current capacity is a no-op.
    ///
    /// Growth builds a fresh buffer, moves the live prefix into it in order,
    /// and swaps it in whole. The length does not change, and on failure
    /// neither does anything else.
    pub fn reserve(&mut self, new_capacity: usize) -> SimpleVecResult<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut fresh = ArrayBuf::with_len(new_capacity)?;
        let dst = fresh.as_mut_slice();
        let src = self.buf.as_mut_slice();
        for i in 0..self.len {
            // Swap moves the value out and parks a default in the old slot.
            mem::swap(&mut dst[i], &mut src[i]);
        }
        self.buf.swap(&mut fresh);
        return Ok(());
    }

    /// Appends `value`. O(1) while there is room; when full, capacity doubles
    /// (from zero it becomes 1) before the value is placed, so `n` pushes cost
    /// amortized O(1) each with O(log n) reallocations.
    pub fn push(&mut self, value: T) -> SimpleVecResult<()> {
        if self.len == self.capacity() {
            let target = self.grown_capacity()?;
            self.reserve(target)?;
        }
        let len = self.len;
        self.buf[len] = value;
        self.len += 1;
        return Ok(());
    }

    /// Removes the last element and hands it back, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let len = self.len;
        return Some(mem::take(&mut self.buf[len]));
    }

    /// Inserts `value` before position `index`, shifting everything from
    /// `index` on one slot right. `index == len` appends; anything past that
    /// is `OutOfRange`. Returns a reference to the inserted element.
    ///
    /// With spare room the shift happens in place, starting from the tail so
    /// no element is clobbered. When full, the elements on each side of the
    /// split are moved straight into a doubled buffer around the new value,
    /// and the buffer is swapped in.
    pub fn insert(&mut self, index: usize, value: T) -> SimpleVecResult<&mut T> {
        if index > self.len {
            return Err(SimpleVecErr::new(ErrorKind::OutOfRange));
        }
        if self.capacity() == 0 {
            let mut fresh = ArrayBuf::with_len(1)?;
            fresh[0] = value;
            self.buf.swap(&mut fresh);
            self.len = 1;
        } else if self.len == self.capacity() {
            let target = self.grown_capacity()?;
            let mut fresh = ArrayBuf::with_len(target)?;
            {
                let dst = fresh.as_mut_slice();
                let src = self.buf.as_mut_slice();
                for i in 0..index {
                    mem::swap(&mut dst[i], &mut src[i]);
                }
                dst[index] = value;
                for i in index..self.len {
                    mem::swap(&mut dst[i + 1], &mut src[i]);
                }
            }
            self.buf.swap(&mut fresh);
            self.len += 1;
        } else {
            let len = self.len;
            let open = &mut self.buf.as_mut_slice()[index..=len];
            // Tail-first shift; the stale slot at the end absorbs the overlap.
            open.rotate_right(1);
            open[0] = value;
            self.len += 1;
        }
        return Ok(&mut self.buf[index]);
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot left, front first, so order is preserved. Only `[0, len)`
    /// is removable; `index == len` is `OutOfRange`, even on an empty vector.
    pub fn remove(&mut self, index: usize) -> SimpleVecResult<T> {
        if index >= self.len {
            return Err(SimpleVecErr::new(ErrorKind::OutOfRange));
        }
        let len = self.len;
        let live = &mut self.buf.as_mut_slice()[index..len];
        let value = mem::take(&mut live[0]);
        // The vacated default rides the rotation into the stale tail slot.
        live.rotate_left(1);
        self.len -= 1;
        return Ok(value);
    }

    /// Changes the logical length. Shrinking just cuts `len`; growing fills
    /// the newly exposed slots with defaults, after raising capacity to
    /// `max(new_len, 2 * capacity)` if the current buffer is too small.
    pub fn resize(&mut self, new_len: usize) -> SimpleVecResult<()> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len > self.capacity() {
            let Some(doubled) = self.capacity().checked_mul(2) else {
                return Err(SimpleVecErr::new(ErrorKind::CapacityOverflow));
            };
            self.reserve(new_len.max(doubled))?;
        }
        let len = self.len;
        for slot in &mut self.buf.as_mut_slice()[len..new_len] {
            // Slots past the old length may hold stale values from earlier shrinks.
            *slot = T::default();
        }
        self.len = new_len;
        return Ok(());
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T> Index<usize> for SimpleVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T> IndexMut<usize> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

/// Lexicographic over the content sequences. A strict prefix compares less
/// than the longer sequence; the first differing element decides otherwise.
/// Every inequality derives from this one comparison.
impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return self.as_slice().partial_cmp(other.as_slice());
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.as_slice().cmp(other.as_slice());
    }
}
