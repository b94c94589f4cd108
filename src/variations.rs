use crate::error::Error;
use crate::util::*;
use zeroize::Zeroize;

/// Layout of the final state row, fixed at construction from the nonce
/// length and never changed afterwards. The counter always starts at
/// state index 12; the variants only disagree on how many words it
/// occupies.
#[derive(Zeroize)]
pub enum Nonce {
    /// Layout from the original ChaCha paper: a 64-bit counter in words
    /// 12/13 followed by two nonce words.
    Djb([u32; 2]),
    /// Layout from RFC 8439: a 32-bit counter in word 12 followed by
    /// three nonce words.
    Ietf([u32; 3]),
}

impl Nonce {
    pub fn from_bytes(nonce: &[u8]) -> Result<Self, Error> {
        match nonce.len() {
            NONCE_LEN_DJB => {
                let mut words = [0; 2];
                read_words(&mut words, nonce);
                Ok(Self::Djb(words))
            }
            NONCE_LEN_IETF => {
                let mut words = [0; 3];
                read_words(&mut words, nonce);
                Ok(Self::Ietf(words))
            }
            _ => Err(Error::InvalidNonceLength),
        }
    }

    /// Fills the four state words starting at index 12 for the block at
    /// `counter`. The Ietf layout only sees the low half of the counter.
    pub fn write_row(&self, row: &mut [u32], counter: u64) {
        match self {
            Self::Djb(words) => {
                row[0] = counter as u32;
                row[1] = (counter >> 32) as u32;
                row[2..].copy_from_slice(words);
            }
            Self::Ietf(words) => {
                row[0] = counter as u32;
                row[1..].copy_from_slice(words);
            }
        }
    }
}
