use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `SimpleVec` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A checked access (`at`, `insert`, `remove`) named a position outside
    /// the valid range. The container was not modified.
    OutOfRange = 1,
    /// Doubling the capacity, or sizing the requested buffer, overflowed `usize`.
    CapacityOverflow,
    /// Failed to create the memory layout for the buffer.
    LayoutFailure,
    /// The allocator could not provide the requested memory.
    AllocFailure,
}

/// A type alias for `Result<T, SimpleVecErr>`
pub type SimpleVecResult<T> = Result<T, SimpleVecErr>;

/// This is used to indicate an error during a `SimpleVec` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimpleVecErr(ErrorKind);

impl SimpleVecErr {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }
    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
}

impl Error for SimpleVecErr {}

impl fmt::Display for SimpleVecErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorKind::OutOfRange => f.write_str("Position is out of range."),
            ErrorKind::CapacityOverflow => f.write_str("Capacity overflowed."),
            ErrorKind::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorKind::AllocFailure => f.write_str("An allocation failure occurred."),
        }
    }
}
