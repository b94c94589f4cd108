/*!
Portable implementation of the ChaCha20 stream cipher from [RFC 8439].

Before anything else, it's important to have a general understanding of the structure of the
ChaCha algorithm. A ChaCha instance holds 16 32-bit integers (their signedness is irrelevant),
in the form of a 4-by-4 matrix. The first 4 integers are constant values from the string
"`expand 32-byte k`", and exist to ensure a base amount of entropy for instances with weak key
values. The next 8 integers are the key values. The last 4 integers hold the block counter and
the nonce, and come in two layouts. The layout RFC 8439 standardized uses a single 32-bit
counter and three nonce words, and is selected by passing a 12-byte nonce:

```text
"expa"   "nd 3"   "2-by"  "te k"
Key      Key      Key     Key
Key      Key      Key     Key
Counter  Nonce    Nonce   Nonce
```

The original layout proposed by the author of ChaCha instead spends two words on a 64-bit
counter, and is selected by passing an 8-byte nonce:

```text
"expa"   "nd 3"   "2-by"  "te k"
Key      Key      Key     Key
Key      Key      Key     Key
Counter  Counter  Nonce   Nonce
```

**The counter is the only thing that changes between blocks of a given instance.** Each
64-byte keystream block is produced by copying the matrix, running 20 rounds of the ChaCha
quarter-round permutation over the copy, adding the original matrix back in word-wise, and
serializing the 16 words little-endian. Encrypting is XORing that keystream into your data,
and decrypting is doing the exact same thing again, so [`ChaCha20::combine`] is the whole
cipher surface. The instance buffers the current block and a position cursor, so you can push
data through in chunks of whatever size your I/O hands you and still pay for exactly one block
computation per 64 bytes.

```
use chacha_stream::ChaCha20;

let key = [0x42; 32];
let nonce = [0x24; 12];
let msg = b"attack at dawn";

let mut cipher = ChaCha20::new(&key, &nonce, 0)?;
let mut ciphertext = [0; 14];
cipher.combine(&mut ciphertext, msg);

let mut round_trip = [0; 14];
ChaCha20::new(&key, &nonce, 0)?.combine(&mut round_trip, &ciphertext);
assert_eq!(&round_trip, msg);
# Ok::<(), chacha_stream::Error>(())
```

## Security

This crate produces keystream, nothing more. There is no authentication: an attacker can flip
any ciphertext bit and flip the matching plaintext bit. Pair it with a MAC (RFC 8439 pairs it
with Poly1305) before trusting decrypted data. Reusing a key/nonce pair, or letting the
counter wrap back onto a block it already produced, hands the XOR of two plaintexts to anyone
listening; both are caller responsibilities and neither is detected here. Secret bytes never
influence branches or memory addresses, and instances wipe their state on drop, but no
guarantees are made beyond that.

[RFC 8439]: https://www.rfc-editor.org/rfc/rfc8439
*/

#![no_std]

#[cfg(test)]
extern crate std;

mod block;
mod chacha;
mod error;
mod util;
mod variations;

pub use chacha::ChaCha20;
pub use error::Error;
pub use util::{BLOCK_LEN, KEY_LEN, NONCE_LEN_DJB, NONCE_LEN_IETF};
