//! xxHash32 primitives and one-shot checksums
//!
//! # Examples
//!
//! ```
//! use xxh32_tapestry::xxh32::{checksum32, checksum32_seed};
//!
//! let string = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
//! let data = string.as_bytes();
//!
//! assert_eq!(checksum32(data), 0x1130e7d4);
//! assert_eq!(checksum32_seed(data, 1471), 0xba59a258);
//! ```
//!
//! All arithmetic here is on u32 and wraps modulo 2^32.  Overflow is
//! part of the algorithm, so every add and multiply goes through the
//! wrapping operations.

/// First prime constant
pub const PRIME1: u32 = 0x9E3779B1;
/// Second prime constant
pub const PRIME2: u32 = 0x85EBCA77;
/// Third prime constant
pub const PRIME3: u32 = 0xC2B2AE3D;
/// Fourth prime constant
pub const PRIME4: u32 = 0x27D4EB2F;
/// Fifth prime constant
pub const PRIME5: u32 = 0x165667B1;

/// Size of a checksum in bytes
pub const SIZE: usize = 4;

/// Number of bytes consumed by one pass over the four lanes
pub const BLOCK_SIZE: usize = 16;

/// Read a little-endian u32 from the first four bytes of a slice
#[inline]
pub(crate) fn read_u32_le(data: &[u8]) -> u32 {
    u32::from_le_bytes([data[0], data[1], data[2], data[3]])
}

/// Mix one little-endian word into a lane
#[inline]
pub(crate) const fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(PRIME2))
        .rotate_left(13)
        .wrapping_mul(PRIME1)
}

/// Initial lane values for a seed
#[inline]
pub(crate) const fn init_lanes(seed: u32) -> [u32; 4] {
    [
        seed.wrapping_add(PRIME1).wrapping_add(PRIME2),
        seed.wrapping_add(PRIME2),
        seed,
        seed.wrapping_sub(PRIME1),
    ]
}

/// Advance all four lanes over one 16-byte block.
///
/// `block` must hold at least [`BLOCK_SIZE`] bytes.
#[inline]
pub(crate) fn process_block(lanes: &mut [u32; 4], block: &[u8]) {
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = round(*lane, read_u32_le(&block[i * 4..]));
    }
}

/// Fold the four lanes into one accumulator
#[inline]
pub(crate) const fn merge_lanes(lanes: &[u32; 4]) -> u32 {
    lanes[0]
        .rotate_left(1)
        .wrapping_add(lanes[1].rotate_left(7))
        .wrapping_add(lanes[2].rotate_left(12))
        .wrapping_add(lanes[3].rotate_left(18))
}

/// Mix the final 0-15 bytes into the accumulator: whole words
/// first, then single bytes.
pub(crate) fn process_tail(mut acc: u32, tail: &[u8]) -> u32 {
    let mut words = tail.chunks_exact(4);

    for word in &mut words {
        acc = acc.wrapping_add(read_u32_le(word).wrapping_mul(PRIME3));
        acc = acc.rotate_left(17).wrapping_mul(PRIME4);
    }

    for &byte in words.remainder() {
        acc = acc.wrapping_add((byte as u32).wrapping_mul(PRIME5));
        acc = acc.rotate_left(11).wrapping_mul(PRIME1);
    }

    acc
}

/// Final mixing so every input bit affects every output bit
#[inline]
pub(crate) const fn avalanche(mut acc: u32) -> u32 {
    acc ^= acc >> 15;
    acc = acc.wrapping_mul(PRIME2);
    acc ^= acc >> 13;
    acc = acc.wrapping_mul(PRIME3);
    acc ^= acc >> 16;
    acc
}

/// Finish a hash given the lane state, the tail bytes and the total
/// length.
///
/// `lanes` is `None` when no full block was ever processed.  Shared
/// by the one-shot function and [`crate::Digest::finalize`].
pub(crate) fn finish(seed: u32, lanes: Option<&[u32; 4]>, tail: &[u8], total_len: u64) -> u32 {
    let acc = match lanes {
        Some(lanes) => merge_lanes(lanes),
        None => seed.wrapping_add(PRIME5),
    };

    // Only the low 32 bits of the length take part
    let acc = acc.wrapping_add(total_len as u32);

    avalanche(process_tail(acc, tail))
}

/// Compute the xxHash32 checksum of a buffer with seed 0
///
/// # Examples
///
/// ```
/// use xxh32_tapestry::checksum32;
///
/// assert_eq!(checksum32(b""), 0x02CC5D05);
/// ```
#[inline]
pub fn checksum32(data: &[u8]) -> u32 {
    checksum32_seed(data, 0)
}

/// Compute the xxHash32 checksum of a buffer with the given seed
///
/// # Arguments
///
/// * `data` - The bytes to hash, any length including zero
/// * `seed` - Seed perturbing the initial state
///
/// # Returns
///
/// The 32-bit checksum
pub fn checksum32_seed(data: &[u8], seed: u32) -> u32 {
    let mut blocks = data.chunks_exact(BLOCK_SIZE);

    let lanes = if data.len() >= BLOCK_SIZE {
        let mut lanes = init_lanes(seed);
        for block in &mut blocks {
            process_block(&mut lanes, block);
        }
        Some(lanes)
    } else {
        None
    };

    finish(seed, lanes.as_ref(), blocks.remainder(), data.len() as u64)
}
