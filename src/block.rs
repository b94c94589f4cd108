use crate::util::*;
use core::ops::Add;

/// A single 4-by-4 ChaCha state matrix, stored flat. Values are copied
/// in, permuted, and serialized out; nothing here survives past one
/// block computation.
#[derive(Clone, Copy)]
pub struct Matrix {
    state: [u32; STATE_LEN],
}

impl From<[u32; STATE_LEN]> for Matrix {
    #[inline]
    fn from(state: [u32; STATE_LEN]) -> Self {
        Self { state }
    }
}

impl Add for Matrix {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        for (word, other) in self.state.iter_mut().zip(rhs.state) {
            *word = word.wrapping_add(other);
        }
        self
    }
}

impl Matrix {
    #[inline]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        let state = &mut self.state;

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    #[inline]
    fn double_round(&mut self) {
        // Column rounds
        self.quarter_round(0, 4, 8, 12);
        self.quarter_round(1, 5, 9, 13);
        self.quarter_round(2, 6, 10, 14);
        self.quarter_round(3, 7, 11, 15);
        // Diagonal rounds
        self.quarter_round(0, 5, 10, 15);
        self.quarter_round(1, 6, 11, 12);
        self.quarter_round(2, 7, 8, 13);
        self.quarter_round(3, 4, 9, 14);
    }

    /// Runs the full block function: 10 double rounds over a working
    /// copy, a word-wise wrapping add of the pre-round state, and
    /// little-endian serialization of the result.
    pub fn block(self) -> [u8; BLOCK_LEN] {
        let mut cur = self;
        for _ in 0..DOUBLE_ROUNDS {
            cur.double_round();
        }
        (cur + self).fetch_result()
    }

    fn fetch_result(self) -> [u8; BLOCK_LEN] {
        let mut buf = [0; BLOCK_LEN];
        for (chunk, word) in buf.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        buf
    }
}
