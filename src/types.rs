mod errors;
mod std_alloc;

pub use errors::ErrorKind;
pub use errors::SimpleVecErr;
pub use errors::SimpleVecResult;
pub(crate) use std_alloc::Global;
