use alloc::vec::Vec;

use libm::log2;
use num::bigint::BigInt;
use num::Zero;

use crate::mt19937::Mt19937;
use crate::seed;
use crate::Error;

// 2**53, the widest span the float path can represent exactly
const MAX_FLOAT_WIDTH: u64 = 1 << 53;

/// PRNG matching the CPython 2 `random.Random` sequences
///
/// A newly created Random is unseeded and useless until one of the
/// seeding methods runs; there is no auto-seeding, since the only point
/// of this generator is to replay the reference sequences for seed
/// material the caller controls
#[derive(Clone)]
pub struct Random {
    rng: Mt19937,
}

impl Random {
    /// Create an unseeded generator
    pub fn new() -> Self {
        Self {
            rng: Mt19937::unseeded(),
        }
    }

    /// Seed from a 32-bit value, matching `random.seed(n)` for n < 2**32
    pub fn seed_u32(&mut self, seed: u32) {
        self.rng.init_by_slice(&[seed]);
    }

    /// Seed from a 64-bit value
    ///
    /// Values that fit in 32 bits seed identically to `seed_u32`; wider
    /// values split into two words, low word first
    pub fn seed_u64(&mut self, seed: u64) {
        if seed <= 0xffff_ffff {
            self.seed_u32(seed as u32);
        } else {
            self.rng.init_by_slice(&[seed as u32, (seed >> 32) as u32]);
        }
    }

    /// Seed from a little-endian slice of 32-bit words
    ///
    /// The reference interpreter has no such entry point, but this is
    /// what it does behind the scenes for every numeric seed: split the
    /// number into 32-bit chunks, low chunk first, then array-seed.
    /// Every other seeding method reduces to this one.
    ///
    /// An empty slice is a no-op that leaves any prior state untouched
    pub fn seed_slice(&mut self, key: &[u32]) {
        self.rng.init_by_slice(key);
    }

    /// Seed from a big-endian byte string
    ///
    /// An empty slice is a no-op that leaves any prior state untouched
    pub fn seed_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        self.rng.init_by_slice(&seed::words_from_bytes(bytes));
    }

    /// Seed from an arbitrary-precision integer; the sign is discarded
    ///
    /// A zero value has an empty minimal byte representation and is
    /// therefore a no-op, unlike seeding with the single word 0
    pub fn seed_bigint(&mut self, seed: &BigInt) {
        if seed.is_zero() {
            return;
        }

        // magnitude bytes, sign dropped
        let (_, bytes) = seed.to_bytes_be();
        self.seed_bytes(&bytes);
    }

    /// Seed from a string of hex digits, e.g. seeding the reference
    /// interpreter with 0x1234cafe is equivalent to `seed_hex("1234cafe")`
    ///
    /// errors: returns Error on empty and malformed strings
    pub fn seed_hex(&mut self, hex: &str) -> Result<(), Error> {
        let big = seed::parse_hex(hex)?;
        self.seed_bigint(&big);
        Ok(())
    }

    /// Next random floating point number in [0.0, 1.0), with the full
    /// 53 bits of double resolution
    ///
    /// a carries 27 random bits shifted left 26, b fills in the lower
    /// 26 bits of the 53-bit numerator; 9007199254740992 == 2**53
    pub fn random(&mut self) -> f64 {
        let a = (self.rng.genrand_u32() >> 5) as f64;
        let b = (self.rng.genrand_u32() >> 6) as f64;
        (a * 67108864.0 + b) * (1.0 / 9007199254740992.0)
    }

    /// Draw k random bits into little-endian 32-bit words
    ///
    /// If k is not divisible by 32, the bits of the last word above
    /// position (k mod 32) - 1 are zero
    ///
    /// errors: returns Error on a zero bit count
    pub fn rand_bits(&mut self, k: u32) -> Result<Vec<u32>, Error> {
        if k == 0 {
            return Err(Error::ZeroBits);
        }

        Ok(self.draw_bits(k))
    }

    // Draw ceil(k/32) raw words, top-aligning the last one; k must be
    // at least 1
    fn draw_bits(&mut self, mut k: u32) -> Vec<u32> {
        let quads = ((k - 1) / 32 + 1) as usize;
        let mut words = Vec::with_capacity(quads);

        for _i in 0..quads {
            let mut v = self.rng.genrand_u32();
            if k < 32 {
                v >>= 32 - k;
            }
            words.push(v);
            k = k.wrapping_sub(32);
        }

        words
    }

    /// Uniform value strictly below n via rejection sampling
    ///
    /// The bit budget reproduces what CPython 2 computes; CPython 3
    /// counts the actual bits of n and diverges. The budget can over-
    /// or undershoot ceil(log2(n)) by edge rounding, which is part of
    /// the compatibility contract.
    pub(crate) fn rand_below(&mut self, n: u64) -> u64 {
        let bits = (1.00001 + log2(n as f64 - 1.0)) as u32;

        let two = bits > 32;
        // never need more than 64 bits of value, but the budget above
        // may ask for more
        let three = bits > 64;

        let mut v = n;
        while v >= n {
            let words = self.draw_bits(bits);

            // a set bit beyond the 64th is the v >= n case
            if three && words[2] > 0 {
                v = n;
                continue;
            }

            v = words[0] as u64;
            if two {
                v |= (words[1] as u64) << 32;
            }
        }

        v
    }

    /// Random integer in [start, stop), including the low value but
    /// excluding the high value
    ///
    /// Spans below 2**53 go through the float path with its reference
    /// rounding behavior; wider spans use the rejection sampler
    ///
    /// errors: returns Error on an empty or inverted range
    pub fn rand_range(&mut self, start: i64, stop: i64) -> Result<i64, Error> {
        if start >= stop {
            return Err(Error::EmptyRange);
        }

        let width = stop.wrapping_sub(start) as u64;
        if width >= MAX_FLOAT_WIDTH {
            return Ok(start.wrapping_add(self.rand_below(width) as i64));
        }

        Ok(start + (self.random() * width as f64) as i64)
    }

    /// Random integer in [a, b], including both end points
    ///
    /// errors: returns Error on an empty or inverted range
    pub fn rand_int(&mut self, a: i64, b: i64) -> Result<i64, Error> {
        self.rand_range(a, b.wrapping_add(1))
    }

    /// Random index below length, for choosing out of a sequence:
    ///
    /// let l = [42, 666, 13];
    /// let c = l[r.choice(l.len())];
    pub fn choice(&mut self, length: usize) -> usize {
        (self.random() * length as f64) as usize
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
