//! src/crypto/aes.rs
//! AES (FIPS 197) key expansion and single-block decryption.
//!
//! Only the decryption direction exists. The S-box pair is derived once per
//! process from the multiplicative inverse in GF(2^8) followed by the AES
//! affine transform, then shared read-only.

use std::sync::LazyLock;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_LEN;
use crate::error::NotepadCryptError;

type RoundKey = [u8; BLOCK_LEN];

/// Forward and inverse substitution tables.
struct SubstitutionTables {
    forward: [u8; 256],
    inverse: [u8; 256],
}

impl SubstitutionTables {
    fn build() -> Self {
        let mut forward = [0u8; 256];
        let mut inverse = [0u8; 256];
        for x in 0..=255u8 {
            let b = reciprocal(x);
            let s = b
                ^ b.rotate_left(1)
                ^ b.rotate_left(2)
                ^ b.rotate_left(3)
                ^ b.rotate_left(4)
                ^ 0x63;
            forward[usize::from(x)] = s;
            inverse[usize::from(s)] = x;
        }
        Self { forward, inverse }
    }
}

static TABLES: LazyLock<SubstitutionTables> = LazyLock::new(SubstitutionTables::build);

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1 (0x11B).
///
/// Russian-peasant style: add `x` for each set bit of `y`, doubling `x` and
/// reducing whenever its high bit would be shifted out.
#[inline(always)]
pub(crate) const fn gf_multiply(mut x: u8, y: u8) -> u8 {
    let mut z = 0u8;
    let mut i = 0;
    while i < 8 {
        if (y >> i) & 1 != 0 {
            z ^= x;
        }
        let carry = x & 0x80 != 0;
        x <<= 1;
        if carry {
            x ^= 0x1B; // low byte of 0x11B
        }
        i += 1;
    }
    z
}

/// Multiplicative inverse in GF(2^8), with 0 mapped to 0.
///
/// Computed as x^254: the multiplicative group has order 255.
const fn reciprocal(x: u8) -> u8 {
    let mut result = 1u8;
    let mut base = x;
    let mut exponent = 254u8;
    while exponent != 0 {
        if exponent & 1 != 0 {
            result = gf_multiply(result, base);
        }
        base = gf_multiply(base, base);
        exponent >>= 1;
    }
    result
}

/// Applies the forward S-box to each byte of a word.
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let sbox = &TABLES.forward;
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        sbox[usize::from(b[0])],
        sbox[usize::from(b[1])],
        sbox[usize::from(b[2])],
        sbox[usize::from(b[3])],
    ])
}

/// Expanded round keys for one cipher instance.
///
/// Holds `rounds + 1` round keys, where `rounds = max(Nk, 4) + 6` and `Nk` is
/// the key length in 32-bit words. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: Vec<RoundKey>,
}

impl KeySchedule {
    /// Expands a 16, 24 or 32 byte key.
    ///
    /// # Errors
    ///
    /// [`NotepadCryptError::InvalidKeyLength`] for any other length.
    pub fn expand(key: &[u8]) -> Result<Self, NotepadCryptError> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(NotepadCryptError::InvalidKeyLength(key.len()));
        }

        let nk = key.len() / 4;
        let rounds = nk.max(4) + 6;
        let mut words = vec![0u32; 4 * (rounds + 1)];
        for (word, bytes) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // rcon = 2^(i/nk - 1) in GF(2^8)
        let mut rcon = 1u8;
        for i in nk..words.len() {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ (u32::from(rcon) << 24);
                rcon = gf_multiply(rcon, 0x02);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        let round_keys = words
            .chunks_exact(4)
            .map(|group| {
                let mut round_key = [0u8; BLOCK_LEN];
                for (out, word) in round_key.chunks_exact_mut(4).zip(group) {
                    out.copy_from_slice(&word.to_be_bytes());
                }
                round_key
            })
            .collect();
        words.zeroize();

        Ok(Self { round_keys })
    }

    /// Number of cipher rounds (10, 12 or 14).
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Decrypts one 16-byte block in place.
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_LEN]) {
        let last = self.rounds();

        let mut state = *block;
        add_round_key(&mut state, &self.round_keys[last]);
        let mut shifted = inv_shift_sub(&state);

        for round_key in self.round_keys[1..last].iter().rev() {
            add_round_key(&mut shifted, round_key);
            state = inv_mix_columns(&shifted);
            shifted = inv_shift_sub(&state);
        }

        add_round_key(&mut shifted, &self.round_keys[0]);
        *block = shifted;
        state.zeroize();
        shifted.zeroize();
    }
}

#[inline(always)]
fn add_round_key(state: &mut [u8; BLOCK_LEN], round_key: &RoundKey) {
    for (byte, key) in state.iter_mut().zip(round_key) {
        *byte ^= key;
    }
}

/// Inverse ShiftRows and inverse SubBytes in one pass.
///
/// State is column-major: byte `(row i, column j)` lives at `i + 4 * j` and
/// comes from source column `(j - i) mod 4`.
#[inline(always)]
fn inv_shift_sub(state: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
    let inverse = &TABLES.inverse;
    let mut out = [0u8; BLOCK_LEN];
    for i in 0..4 {
        for j in 0..4 {
            out[i + j * 4] = inverse[usize::from(state[i + (j + 4 - i) % 4 * 4])];
        }
    }
    out
}

#[inline(always)]
fn inv_mix_columns(state: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    for col in (0..BLOCK_LEN).step_by(4) {
        for j in 0..4 {
            out[col + j] = gf_multiply(state[col + j], 0x0E)
                ^ gf_multiply(state[col + (j + 1) % 4], 0x0B)
                ^ gf_multiply(state[col + (j + 2) % 4], 0x0D)
                ^ gf_multiply(state[col + (j + 3) % 4], 0x09);
        }
    }
    out
}
