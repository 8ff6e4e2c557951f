//! # Simple Vec
//!
//! The `simple_vec` crate provides a `#[no_std]` growable contiguous array much like
//! `std::Vec`, split into the two layers such a container is really made of.
//!
//! [`ArrayBuf`] is the raw owned buffer. It exclusively owns a heap block of live,
//! default-constructed elements and does nothing else: indexed access, a raw pointer
//! for bulk work, and a constant-time [`ArrayBuf::swap`] that is the only way
//! ownership moves between buffers. It cannot be cloned. Only the vector above it
//! knows which elements matter and how to duplicate them.
//!
//! [`SimpleVec`] is the dynamic array built on top. It tracks a logical length
//! separate from the buffer capacity and implements amortized doubling growth,
//! order-preserving positional insert/remove, explicit reserve/resize, deep
//! copying, and lexicographic comparison.
//!
//! `SimpleVec` uses fallible allocations, meaning that instead of panicking on
//! allocation failure every growing operation returns a
//! [`types::SimpleVecResult`]. This allows one to handle the error in a more
//! graceful or robust manner. A failed growth never touches the container, since
//! the new buffer is built and filled before it is swapped in, so after an error
//! the vector is exactly what it was before the call.
//!
//! Bounds checking is opt-in. Indexing through `vec[i]` and the slice views is the
//! hot path; [`SimpleVec::at`] is the checked variant that reports
//! [`types::ErrorKind::OutOfRange`] instead of panicking.

#![no_std]

extern crate alloc;

mod simple_vec;
pub mod types;

pub use simple_vec::ArrayBuf;
pub use simple_vec::Reserve;
pub use simple_vec::SimpleVec;
