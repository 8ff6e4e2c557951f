use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::ptr::NonNull;
use core::slice;

use crate::types::ErrorKind;
use crate::types::Global;
use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

const fn layout_array(layout: Layout, length: usize) -> SimpleVecResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(SimpleVecErr::new(ErrorKind::CapacityOverflow));
    };
    // Safety: rust is pretty adamant about sizes not being over isize::MAX
    if len > (isize::MAX as usize) {
        return Err(SimpleVecErr::new(ErrorKind::LayoutFailure));
    }
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(SimpleVecErr::new(ErrorKind::LayoutFailure));
    };
    return Ok(lay);
}

/// A fixed-length heap buffer of live, default-constructed elements.
///
/// `ArrayBuf` owns its block exclusively. There is no clone operation of any
/// kind; the only way ownership moves between two buffers is [`ArrayBuf::swap`].
/// Duplicating contents is the job of whoever sits on top, since only that
/// layer knows which slots are meaningful.
///
/// Every slot in `[0, len)` holds a live `T` from construction until drop, so
/// the whole buffer can be viewed as a plain slice. Indexing past `len`
/// through the raw pointer is the caller's problem.
pub struct ArrayBuf<T> {
    ptr:    NonNull<T>,
    length: usize,
    _ph:    PhantomData<T>,
}

impl<T> ArrayBuf<T> {
    const LAYOUT: Layout = Layout::new::<T>();

    /// A buffer that owns nothing. Never allocates.
    pub const fn new() -> Self {
        return Self {
            ptr:    NonNull::dangling(),
            length: 0,
            _ph:    PhantomData,
        };
    }

    /// Allocates a buffer of `length` slots and fills each with `T::default()`.
    ///
    /// A `length` of zero, or a zero-sized `T`, never touches the allocator.
    /// Allocation and layout failures are reported, not panicked on.
    pub fn with_len(length: usize) -> SimpleVecResult<Self>
    where
        T: Default,
    {
        if length == 0 {
            return Ok(Self::new());
        }
        let layout = layout_array(Self::LAYOUT, length)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let Ok(ptr) = Global.allocate(layout) else {
                return Err(SimpleVecErr::new(ErrorKind::AllocFailure));
            };
            ptr.cast::<T>()
        };

        // A panic in T::default() leaks the block but stays sound.
        for i in 0..length {
            unsafe { ptr.as_ptr().add(i).write(T::default()) };
        }

        return Ok(Self {
            ptr:    ptr,
            length: length,
            _ph:    PhantomData,
        });
    }

    /// The number of slots this buffer owns.
    #[inline]
    pub const fn len(&self) -> usize {
        return self.length;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.length == 0;
    }

    /// Raw handle to the first slot. Dangling (but aligned) when the buffer
    /// owns nothing.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.ptr.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&self) -> *mut T {
        return self.ptr.as_ptr();
    }

    /// Views every owned slot. All of them are live values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.length) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.length) }
    }

    /// Exchanges the owned blocks of two buffers in constant time.
    ///
    /// After the call each buffer releases what the other one owned, exactly
    /// once, at its own drop.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.length, &mut other.length);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Index<usize> for ArrayBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T> IndexMut<usize> for ArrayBuf<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T> Drop for ArrayBuf<T> {
    fn drop(&mut self) {
        if self.length == 0 {
            return;
        }
        let whole = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.length);
        unsafe { ptr::drop_in_place(whole) };

        // This layout was already validated when the buffer was built.
        let Ok(layout) = layout_array(Self::LAYOUT, self.length) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        unsafe { Global.deallocate(self.ptr.cast(), layout) };
    }
}

unsafe impl<T: Send> Send for ArrayBuf<T> {}
unsafe impl<T: Sync> Sync for ArrayBuf<T> {}
