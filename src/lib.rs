//! crate for the xxHash32 checksum algorithm
//!
//! This crate provides the 32-bit variant of xxHash, a fast
//! non-cryptographic checksum.  It can be computed two ways: in one
//! shot over a complete buffer, or incrementally with a [`Digest`]
//! that accepts data in any number of writes.  Both produce the same
//! result for the same bytes and seed.
//!
//! xxHash is not collision-resistant against adversarial input.  Do
//! not use it where a cryptographic hash is needed.
//!
//! # Examples
//!
//! ```
//! use xxh32_tapestry::{checksum32, Digest};
//!
//! let data = b"Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
//!
//! let mut digest = Digest::new(0);
//! digest.append(&data[..10]);
//! digest.append(&data[10..]);
//!
//! assert_eq!(digest.finalize(), checksum32(data));
//! assert_eq!(digest.finalize(), 0x1130e7d4);
//! ```
#![warn(missing_docs)]
#![warn(unsafe_code)]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod digest;
pub mod xxh32;

pub use digest::{Digest, Xxh32BuildHasher};
pub use xxh32::{checksum32, checksum32_seed, BLOCK_SIZE, SIZE};

/// Checksum trait all checksum algorithms should implement
/// This provides several compute operations
///
/// The term checksum in this context is a computation of a value
/// summarizing a set of data, used to detect accidental changes to
/// it.
pub trait Checksum<T> {
    /// Compute a checksum over a u8 byte slice
    ///
    /// Every call to compute resets the state of the checksum to an
    /// initial state.  So calling it twice with the same parameters
    /// should yield the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use xxh32_tapestry::{Checksum, Digest};
    ///
    /// let expected: u32 = 0x1130e7d4;
    /// let string = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
    /// let data = string.as_bytes();
    /// let mut digest = Digest::default();
    /// let result = digest.compute(data);
    /// assert_eq!(result, expected);
    /// let result = digest.compute(data);
    /// assert_eq!(result, expected);
    /// ```
    fn compute(&mut self, data: &[u8]) -> T;

    /// Perform a rolling update on the checksum.
    ///
    /// Update the checksum with a new byte, computing and returning
    /// the checksum of all the data seen so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use xxh32_tapestry::{checksum32, Checksum, Digest};
    ///
    /// let data = "ab".as_bytes();
    /// let mut digest = Digest::default();
    /// let result = digest.update(data[0]);
    /// assert_eq!(result, checksum32(&data[..1]));
    /// let result = digest.update(data[1]);
    /// assert_eq!(result, checksum32(data));
    /// ```
    fn update(&mut self, data: u8) -> T;

    /// Reset the checksum to the original state.
    /// This resets the checksum to the state it was in when it was
    /// created.
    /// If it was created with non-default parameters, those should be
    /// preserved.
    fn reset(&mut self);
}
