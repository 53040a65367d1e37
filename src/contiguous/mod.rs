//! Contiguous collection types. At the moment that's just [`Vector`], a sequence that grows at
//! runtime as values are pushed onto it.
#![warn(missing_docs)]

pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use vector::Vector;
