use crc_compose::{
    compose, compose_with_monomial, get_monomial, try_compose, CrcComposer, CrcError,
    CrcPolynomial, CASTAGNOLI_POLYNOMIAL, GZIP_POLYNOMIAL,
};
use pretty_assertions::assert_eq;

fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

fn crc32c(data: &[u8]) -> u32 {
    crc32c::crc32c(data)
}

// Deterministic pseudo-random bytes so failures are reproducible
fn sample_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

fn references() -> [(u32, fn(&[u8]) -> u32); 2] {
    [(GZIP_POLYNOMIAL, crc32), (CASTAGNOLI_POLYNOMIAL, crc32c)]
}

#[test]
fn test_hello_world_crc32() {
    let crc_a = crc32(b"hello");
    let crc_b = crc32(b" world");

    assert_eq!(
        compose(crc_a, crc_b, 6, GZIP_POLYNOMIAL),
        crc32(b"hello world")
    );
}

#[test]
fn test_hello_world_crc32c() {
    let crc_a = crc32c(b"hello");
    let crc_b = crc32c(b" world");

    assert_eq!(
        compose(crc_a, crc_b, 6, CASTAGNOLI_POLYNOMIAL),
        crc32c(b"hello world")
    );
}

#[test]
fn test_zero_length_right_block_yields_right_crc() {
    for (modulus, crc) in references() {
        let crc_a = crc(b"hello");
        for crc_b in [0, 0x1234_5678, crc(b" world")] {
            assert_eq!(compose(crc_a, crc_b, 0, modulus), crc_b);
        }
    }
}

#[test]
fn test_empty_left_block() {
    for (modulus, crc) in references() {
        assert_eq!(
            compose(crc(b""), crc(b" world"), 6, modulus),
            crc(b" world")
        );
    }
}

#[test]
fn test_split_at_every_offset() {
    let data = sample_bytes(300, 7);

    for (modulus, crc) in references() {
        let expected = crc(&data);
        // a zero-length right block composes to the right CRC, so stop short of the end
        for split in 0..data.len() {
            let (left, right) = data.split_at(split);
            assert_eq!(
                compose(crc(left), crc(right), right.len() as u64, modulus),
                expected,
                "split at {split}"
            );
        }
    }
}

#[test]
fn test_associativity() {
    let a = sample_bytes(17, 1);
    let b = sample_bytes(4096, 2);
    let c = sample_bytes(65, 3);
    let whole = [a.as_slice(), b.as_slice(), c.as_slice()].concat();

    for (modulus, crc) in references() {
        let left_first = compose(
            compose(crc(&a), crc(&b), b.len() as u64, modulus),
            crc(&c),
            c.len() as u64,
            modulus,
        );
        let right_first = compose(
            crc(&a),
            compose(crc(&b), crc(&c), c.len() as u64, modulus),
            (b.len() + c.len()) as u64,
            modulus,
        );

        assert_eq!(left_first, crc(&whole));
        assert_eq!(right_first, crc(&whole));
    }
}

#[test]
fn test_precomputed_monomial_across_equal_blocks() {
    let block_size = 512;
    let data = sample_bytes(block_size * 9, 42);

    for (modulus, crc) in references() {
        let monomial = get_monomial(block_size as u64, modulus);
        let composed = data
            .chunks(block_size)
            .map(crc)
            .fold(0, |acc, block_crc| {
                compose_with_monomial(acc, block_crc, monomial, modulus)
            });

        assert_eq!(composed, crc(&data));
    }
}

#[test]
fn test_composer_matches_whole_buffer() {
    let data = sample_bytes(1000, 9);

    let mut composer = CrcComposer::new(CrcPolynomial::Castagnoli, 128);
    for chunk in data.chunks(128) {
        composer.update(crc32c(chunk), chunk.len() as u64).unwrap();
    }

    assert_eq!(composer.digest(), crc32c(&data).to_be_bytes().to_vec());
}

#[test]
fn test_striped_composer_matches_each_stripe() {
    let data = sample_bytes(1024, 11);
    let stripe = 256;

    let mut composer = CrcComposer::striped(CrcPolynomial::Gzip, 64, stripe);
    for chunk in data.chunks(64) {
        composer.update(crc32(chunk), chunk.len() as u64).unwrap();
    }

    let expected: Vec<u8> = data
        .chunks(stripe as usize)
        .flat_map(|s| crc32(s).to_be_bytes())
        .collect();
    assert_eq!(composer.digest(), expected);
}

#[test]
fn test_negative_length() {
    assert_eq!(
        try_compose(crc32(b"hello"), crc32(b" world"), -6, GZIP_POLYNOMIAL),
        Err(CrcError::NegativeLength(-6))
    );
}
