mod array_buf;
mod vec;

pub use array_buf::ArrayBuf;
pub use vec::Reserve;
pub use vec::SimpleVec;
