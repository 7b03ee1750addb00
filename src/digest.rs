//! Streaming xxHash32 digest
//!
//! A [`Digest`] accepts data in any number of [`Digest::append`]
//! calls and produces the same checksum as hashing all of the data
//! at once with [`crate::checksum32_seed`].
//!
//! # Examples
//!
//! ```
//! use xxh32_tapestry::Digest;
//!
//! let blob1 = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
//! let blob2 = "sed diam nonummy nibh euismod tincidunt ut laoreet dolore magna aliquam erat volutpat.";
//!
//! let mut digest = Digest::new(0);
//! digest.append(blob1.as_bytes());
//! digest.append(blob2.as_bytes());
//!
//! assert_eq!(digest.finalize(), 0x0d44373a);
//! ```
//!
//! A single digest must not be shared between writers without
//! external locking.  Use one digest per thread, or wrap it in a
//! mutex.
use core::default::Default;
use core::fmt::{Debug, Error, Formatter};
use core::hash::{BuildHasher, Hasher};

use crate::{
    xxh32::{finish, init_lanes, process_block, BLOCK_SIZE},
    Checksum,
};

/// The data structure used for streaming xxHash32 checksums
/// Stores the seed and the running state
#[derive(Clone)]
pub struct Digest {
    /// Seed the digest was created with.
    /// This is saved so we can reset the digest.
    seed: u32,
    /// The four running accumulators
    lanes: [u32; 4],
    /// Bytes not yet forming a full block.  Only
    /// `buffer[..buffer_len]` is meaningful.
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Total bytes appended since creation or the last reset
    total_len: u64,
    /// Whether at least one full block went through the lanes
    large: bool,
}

impl Digest {
    /// Create a new digest with the given seed
    ///
    /// # Examples
    ///
    /// ```
    /// use xxh32_tapestry::Digest;
    ///
    /// let string = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
    /// let mut digest = Digest::new(1471);
    /// digest.append(string.as_bytes());
    ///
    /// assert_eq!(digest.finalize(), 0xba59a258);
    /// ```
    pub fn new(seed: u32) -> Digest {
        Digest {
            seed,
            lanes: init_lanes(seed),
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
            large: false,
        }
    }

    /// The seed this digest was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of bytes appended since creation or the last reset
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Append data to the digest
    ///
    /// Any split of the same bytes across calls gives the same final
    /// checksum.  Appending an empty slice does nothing.
    pub fn append(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut data = data;

        // Top up a partial block first
        if self.buffer_len > 0 {
            let needed = BLOCK_SIZE - self.buffer_len;
            if data.len() < needed {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }

            let (head, rest) = data.split_at(needed);
            self.buffer[self.buffer_len..].copy_from_slice(head);
            process_block(&mut self.lanes, &self.buffer);
            self.buffer_len = 0;
            self.large = true;
            data = rest;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            process_block(&mut self.lanes, block);
            self.large = true;
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Compute the checksum of everything appended so far
    ///
    /// This does not change the digest, so it can be called again,
    /// or more data appended afterwards.
    pub fn finalize(&self) -> u32 {
        let lanes = if self.large { Some(&self.lanes) } else { None };

        finish(
            self.seed,
            lanes,
            &self.buffer[..self.buffer_len],
            self.total_len,
        )
    }

    /// The checksum as big-endian bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use xxh32_tapestry::Digest;
    ///
    /// let digest = Digest::new(0);
    /// assert_eq!(digest.sum(), [0x02, 0xCC, 0x5D, 0x05]);
    /// ```
    pub fn sum(&self) -> [u8; crate::SIZE] {
        self.finalize().to_be_bytes()
    }

    /// Reset the digest to its initial state, keeping the seed
    pub fn reset(&mut self) {
        self.lanes = init_lanes(self.seed);
        self.buffer_len = 0;
        self.total_len = 0;
        self.large = false;
    }
}

impl Default for Digest {
    fn default() -> Digest {
        Digest::new(0)
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "seed: 0x{:08X}, lanes: [", self.seed)?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:08X}", lane)?;
        }
        write!(f, "], total_len: {}, buffer: [", self.total_len)?;
        for (i, byte) in self.buffer[..self.buffer_len].iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:02X}", byte)?;
        }
        write!(f, "]")
    }
}

impl Checksum<u32> for Digest {
    /// Reset, then compute the checksum of `data`
    fn compute(&mut self, data: &[u8]) -> u32 {
        Digest::reset(self);
        self.append(data);

        self.finalize()
    }

    fn update(&mut self, data: u8) -> u32 {
        self.append(&[data]);

        self.finalize()
    }

    fn reset(&mut self) {
        Digest::reset(self);
    }
}

impl Hasher for Digest {
    fn finish(&self) -> u64 {
        self.finalize() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.append(bytes);
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Digest {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Builds seeded [`Digest`] hashers, for use with hash maps
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use xxh32_tapestry::{checksum32_seed, Xxh32BuildHasher};
///
/// let builder = Xxh32BuildHasher::new(1471);
/// let hash = builder.hash_one(0x12345678_u32);
/// assert_eq!(hash, checksum32_seed(&0x12345678_u32.to_ne_bytes(), 1471) as u64);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh32BuildHasher {
    /// Seed given to every digest built
    pub seed: u32,
}

impl Xxh32BuildHasher {
    /// Create a builder for the given seed
    pub fn new(seed: u32) -> Xxh32BuildHasher {
        Xxh32BuildHasher { seed }
    }
}

impl BuildHasher for Xxh32BuildHasher {
    type Hasher = Digest;

    fn build_hasher(&self) -> Digest {
        Digest::new(self.seed)
    }
}
