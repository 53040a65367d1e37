//! A walk through the basics of a growable, contiguous sequence: pushing values onto the end,
//! asking how many there are, and reading them back by index.
//!
//! # Purpose
//! The [`Vector`](contiguous::Vector) in this crate is written from scratch on top of a raw heap
//! buffer instead of wrapping [`Vec`]. That way every step of the demonstration (growth, bounds
//! checks, drops) is code you can read in this repo rather than behavior hidden in `std`.
//!
//! # Error Handling
//! Most methods come in two flavours. The `try_` version returns a [`Result`] with a strongly
//! typed error (see [`error`]), and the plain version panics with the message of that same error.
//! Having to handle a capacity overflow on every push would make the type miserable to use, so
//! the panicking versions are the ones you'll usually reach for.
//!
//! When this crate returns errors, it does so with enums for static dispatch, wrapping structs that
//! implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! The only dependency is `derive_more`, for the repetitive `Display` / `Error` / `From` impls on
//! the error types.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod contiguous;

pub mod error {
    //! Error types returned by the fallible `try_` methods in this crate.
    pub use crate::util::error::*;
}

pub(crate) mod util;
