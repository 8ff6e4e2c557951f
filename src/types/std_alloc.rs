use alloc::alloc;
use core::alloc::Layout;
use core::error::Error;
use core::fmt;
use core::ptr::NonNull;

/// This indicates the allocator itself failed to provide memory.
///
/// It never crosses the public API directly; the container reports it as
/// `ErrorKind::AllocFailure`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A memory allocation error occurred.")
    }
}

/// This is basically a wrapper around the global allocator APIs that reports
/// failure instead of panicking.
///
/// See:
/// <https://doc.rust-lang.org/alloc/alloc/index.html>
#[derive(Debug, Copy, Clone)]
pub(crate) struct Global;

impl Global {
    pub(crate) fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // alloc::alloc() requires that the layout size be non-zero.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// The memory must have been allocated by `allocate` with the same layout.
    pub(crate) unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
