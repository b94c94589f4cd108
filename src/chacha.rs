use crate::block::Matrix;
use crate::error::Error;
use crate::util::*;
use crate::variations::Nonce;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A ChaCha20 stream cipher instance, as specified by RFC 8439.
///
/// An instance owns one logical keystream, determined by its key, nonce
/// and starting block counter. Keystream blocks are generated eagerly
/// and consumed byte-by-byte, so callers can feed data in chunks of any
/// size (down to a single byte) and still perform exactly one block
/// computation per 64 bytes of traffic. Encryption and decryption are
/// the same operation.
///
/// The counter advances by one per block and must never wrap back onto
/// a block already produced for the same key/nonce pair. Enforcing that
/// limit is the caller's job; the cipher itself performs no overflow
/// check. With a 12-byte nonce the counter is effectively 32 bits wide
/// (256 GiB per stream), with an 8-byte nonce it is the full 64 bits.
///
/// Key material, nonce words and the buffered keystream block are wiped
/// on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    key: [u32; KEY_LEN_U32],
    nonce: Nonce,
    counter: u64,
    block: [u8; BLOCK_LEN],
    pos: usize,
}

impl ChaCha20 {
    /// Creates a cipher from a 32-byte key, a nonce and the index of
    /// the first keystream block (0 for the start of the stream).
    ///
    /// The nonce length selects the state layout: 12 bytes gives the
    /// RFC 8439 layout with a 32-bit counter, 8 bytes the original
    /// layout with a 64-bit counter. The first keystream block is
    /// generated here, so a constructed cipher is always ready to
    /// combine.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKeyLength`] if the key is not exactly 32 bytes,
    /// [`Error::InvalidNonceLength`] if the nonce is neither 8 nor 12.
    pub fn new(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self, Error> {
        if key.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength);
        }
        let nonce = Nonce::from_bytes(nonce)?;
        let mut key_words = [0; KEY_LEN_U32];
        read_words(&mut key_words, key);
        let mut cipher = Self {
            key: key_words,
            nonce,
            counter,
            block: [0; BLOCK_LEN],
            pos: 0,
        };
        cipher.refill();
        Ok(cipher)
    }

    /// XORs `src` with the keystream, writing the result into `dst`.
    /// The same call encrypts plaintext and decrypts ciphertext.
    ///
    /// The keystream position carries over between calls: combining one
    /// large buffer and combining the same bytes as a sequence of
    /// sub-slices produce identical output.
    ///
    /// # Panics
    ///
    /// Panics if `dst` and `src` differ in length.
    pub fn combine(&mut self, dst: &mut [u8], src: &[u8]) {
        assert_eq!(
            dst.len(),
            src.len(),
            "combine buffers must be the same length"
        );
        for (out, byte) in dst.iter_mut().zip(src) {
            *out = byte ^ self.next_byte();
        }
    }

    /// XORs the keystream into `buf` in place. Equivalent to
    /// [`combine`](Self::combine) with `dst` and `src` aliased.
    pub fn apply(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte ^= self.next_byte();
        }
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        let byte = self.block[self.pos];
        self.pos += 1;
        if self.pos == BLOCK_LEN {
            self.counter = self.counter.wrapping_add(1);
            self.refill();
        }
        byte
    }

    /// Assembles the state for the current counter, runs the block
    /// function and rewinds the position cursor.
    fn refill(&mut self) {
        let mut state = [0; STATE_LEN];
        state[..4].copy_from_slice(&ROW_A);
        state[4..12].copy_from_slice(&self.key);
        self.nonce.write_row(&mut state[12..], self.counter);
        self.block = Matrix::from(state).block();
        self.pos = 0;
    }
}
