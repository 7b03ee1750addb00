// Cross-checks against the xxhash-rust crate as a reference XXH32
// implementation, plus property tests for the streaming digest.

use proptest::prelude::*;
use xxh32_tapestry::{checksum32, checksum32_seed, Digest};

const BLOB1: &[u8] = b"Lorem ipsum dolor sit amet, consectetuer adipiscing elit, ";
const BLOB2: &[u8] =
    b"sed diam nonummy nibh euismod tincidunt ut laoreet dolore magna aliquam erat volutpat.";

// ---------------------------------------------------------------------------
// Known vectors
// ---------------------------------------------------------------------------

#[test]
fn known_vectors_match_reference() {
    assert_eq!(checksum32(BLOB1), xxhash_rust::xxh32::xxh32(BLOB1, 0));
    assert_eq!(
        checksum32_seed(BLOB1, 1471),
        xxhash_rust::xxh32::xxh32(BLOB1, 1471)
    );
    assert_eq!(checksum32(&[]), xxhash_rust::xxh32::xxh32(&[], 0));
}

/// Every length from 0 through a few blocks, so each tail shape is hit
#[test]
fn all_short_lengths_match_reference() {
    let data: Vec<u8> = (0u8..=255u8).cycle().take(80).collect();

    for len in 0..=data.len() {
        for seed in [0, 1, 1471, u32::MAX] {
            assert_eq!(
                checksum32_seed(&data[..len], seed),
                xxhash_rust::xxh32::xxh32(&data[..len], seed),
                "len {} seed {}",
                len,
                seed
            );
        }
    }
}

#[test]
fn streaming_matches_reference_streaming() {
    let mut digest = Digest::new(1471);
    let mut reference = xxhash_rust::xxh32::Xxh32::new(1471);

    for chunk in [BLOB1, BLOB2, &BLOB1[..3], &BLOB2[..17]] {
        digest.append(chunk);
        reference.update(chunk);
        assert_eq!(digest.finalize(), reference.digest());
    }
}

/// Large input stresses the block loop and the length counter
#[test]
fn large_input_matches_reference() {
    let data: Vec<u8> = (0..1 << 20).map(|i: u32| (i.wrapping_mul(31) >> 3) as u8).collect();

    let mut digest = Digest::new(0);
    for chunk in data.chunks(4093) {
        digest.append(chunk);
    }

    let expected = xxhash_rust::xxh32::xxh32(&data, 0);
    assert_eq!(checksum32(&data), expected);
    assert_eq!(digest.finalize(), expected);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn oneshot_matches_reference(data: Vec<u8>, seed: u32) {
        prop_assert_eq!(
            checksum32_seed(&data, seed),
            xxhash_rust::xxh32::xxh32(&data, seed)
        );
    }

    #[test]
    fn single_append_matches_oneshot(data: Vec<u8>, seed: u32) {
        let mut digest = Digest::new(seed);
        digest.append(&data);
        prop_assert_eq!(digest.finalize(), checksum32_seed(&data, seed));
    }

    #[test]
    fn chunking_does_not_matter(
        data in prop::collection::vec(any::<u8>(), 0..256),
        sizes in prop::collection::vec(0usize..40, 1..20),
        seed: u32,
    ) {
        let mut digest = Digest::new(seed);
        let mut rest = &data[..];
        for size in &sizes {
            let (head, tail) = rest.split_at((*size).min(rest.len()));
            digest.append(head);
            rest = tail;
        }
        digest.append(rest);

        prop_assert_eq!(digest.total_len(), data.len() as u64);
        prop_assert_eq!(digest.finalize(), checksum32_seed(&data, seed));
    }

    #[test]
    fn reset_matches_fresh_digest(before: Vec<u8>, data: Vec<u8>, seed: u32) {
        let mut digest = Digest::new(seed);
        digest.append(&before);
        digest.reset();
        digest.append(&data);

        let mut fresh = Digest::new(seed);
        fresh.append(&data);

        prop_assert_eq!(digest.finalize(), fresh.finalize());
    }

    #[test]
    fn finalize_twice_is_stable(data: Vec<u8>, seed: u32) {
        let mut digest = Digest::new(seed);
        digest.append(&data);
        prop_assert_eq!(digest.finalize(), digest.finalize());
    }
}

/// Seed collisions should be rare over a sample of seeds
#[test]
fn seeds_rarely_collide() {
    let mut hashes: Vec<u32> = (0..1000).map(|seed| checksum32_seed(BLOB1, seed)).collect();
    hashes.sort_unstable();
    hashes.dedup();

    assert!(hashes.len() >= 999, "{} distinct hashes", hashes.len());
}
