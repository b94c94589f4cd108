/// Size (in bytes) of a ChaCha key.
pub const KEY_LEN: usize = 32;
/// Size (in 32-bit integers) of a ChaCha key.
pub const KEY_LEN_U32: usize = KEY_LEN / size_of::<u32>();
/// Size (in bytes) of the nonce in the original layout.
pub const NONCE_LEN_DJB: usize = 8;
/// Size (in bytes) of the nonce in the RFC 8439 layout.
pub const NONCE_LEN_IETF: usize = 12;
/// Size (in bytes) of a single keystream block.
pub const BLOCK_LEN: usize = 64;
/// Size (in 32-bit integers) of a ChaCha state matrix.
pub const STATE_LEN: usize = 16;
/// Column/diagonal round pairs performed per block. Each pair applies
/// the quarter round eight times, making this the 20-round variant.
pub const DOUBLE_ROUNDS: usize = 10;
/// Standard constant used in all ChaCha implementations, the words of
/// "`expand 32-byte k`" read little-endian.
pub const ROW_A: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// Splits `bytes` into little-endian 32-bit words. `bytes` must be at
/// least four times as long as `words`.
pub fn read_words(words: &mut [u32], bytes: &[u8]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}
