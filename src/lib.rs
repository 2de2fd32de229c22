//! Packed bit vectors with cheap aliasing sub-views.

pub mod bit_slice;

pub use self::bit_slice::{BitSlice, BitSliceIntoIter, BitSliceIter, Error, Result};
