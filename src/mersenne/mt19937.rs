use core::fmt;

use super::Error;

/// Implementation of Mersenne Twister MT19937 based on the reference `init_genrand` seeding
/// and Wikipedia pseudo-code:
///
/// http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/MT2002/CODES/mt19937ar.c
/// https://en.wikipedia.org/wiki/Mersenne_Twister
///
/// Not suitable for cryptographic use: 624 consecutive outputs are enough to
/// rebuild the whole state (see `recovery`).
pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

#[allow(dead_code)]
pub const R: u32 = 31;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1812433253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// Seed used by the reference implementation when none is given
pub const DEFAULT_SEED: u32 = 5489;

/// MT19937 PRNG (32-bit)
///
/// Every instance owns its state. Mutation needs `&mut self`, so sharing one
/// generator between threads requires external locking; prefer one generator
/// per thread.
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create an initialized MT19937 PRNG
    ///
    /// The first extraction twists the freshly seeded state.
    pub fn new(seed: u32) -> Self {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            Self::k_distribute(&mut state, i);
        }

        Self { state, index: N }
    }

    /// Create a PRNG from a seed wider than 32 bits, keeping only the low 32 bits
    pub fn from_wide_seed(seed: u64) -> Self {
        Self::new((seed & 0xffff_ffff) as u32)
    }

    /// Rebuild a PRNG from a previously exported state and index
    pub fn from_parts(state: [u32; N], index: usize) -> Result<Self, Error> {
        if index > N {
            return Err(Error::InvalidIndex);
        }

        Ok(Self { state, index })
    }

    /// Perform k-distribution step to generate initial state from seed value
    pub(crate) fn k_distribute(state: &mut [u32; N], i: usize) {
        // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
        let prev = state[i - 1];
        state[i] = F
            .wrapping_mul(prev ^ (prev >> (W - 2)))
            .wrapping_add(i as u32);
    }

    /// Extract a tempered value based on MT[index]
    /// calling twist() every n numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let y = temper(self.state[self.index]);
        self.index += 1;

        y
    }

    /// Alias for `extract_number`
    pub fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    /// Regenerate the whole state, left to right and in place
    ///
    /// For i >= N - M the word at (i + M) % N has already been rewritten
    /// during this pass, and the output sequence depends on reading it.
    pub(crate) fn twist(&mut self) {
        for i in 0..N {
            self.state[i] = Self::twist_word(&self.state, i);
        }

        self.index = 0;
    }

    /// Compute the twisted value of state[i] from the current contents of `state`
    pub(crate) fn twist_word(state: &[u32; N], i: usize) -> u32 {
        let y = (state[i] & UPPER_MASK).wrapping_add(state[(i + 1) % N] & LOWER_MASK);
        let mut z = state[(i + M) % N] ^ (y >> 1);

        if y % 2 != 0 {
            z ^= A;
        }

        z
    }

    /// Raw state words
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    /// Index of the next word to temper, N when a twist is pending
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the next extraction will twist the state first
    pub fn needs_twist(&self) -> bool {
        self.index >= N
    }
}

/// Apply the MT19937 tempering transform to a raw state word
pub fn temper(word: u32) -> u32 {
    let mut y = word ^ ((word >> U) & D);
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ (y >> L)
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .field("state", &&self.state[..])
            .finish()
    }
}

impl rand::RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.extract_number() as u64;
        let hi = self.extract_number() as u64;

        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // a trailing partial chunk still consumes a full output
        for chunk in dest.chunks_mut(4) {
            let bytes = self.extract_number().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl rand::SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
