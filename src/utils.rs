//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC layer to fold the previous ciphertext block (or the IV)
/// into a freshly decrypted block.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8; 16], block_b: &[u8; 16], output: &mut [u8; 16]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Reads a big-endian `u32` at `offset`. Returns `None` if fewer than 4 bytes remain.
#[inline(always)]
pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Copies `N` bytes starting at `offset` into an array.
#[inline(always)]
pub fn read_array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(data.get(offset..offset.checked_add(N)?)?);
    Some(out)
}
