//! Byte-order aware value readers and writers.
//!
//! The readers borrow a byte slice, the writers grow an in-memory [`Blob`](crate::Blob). Both are
//! generic over a `byteorder::ByteOrder`, so binary formats that declare their byte order at
//! runtime can switch to the right implementation once per record.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
