//! tests/common.rs
//! Reference encryption helpers for building NotepadCrypt fixtures.
//!
//! The crate only decrypts, so fixtures are produced with the RustCrypto `aes`
//! and `sha2` crates, independent of the code under test.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Aes192Enc, Aes256Enc};
use sha2::{Digest, Sha256};

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSPHRASE: &[u8] = b"password123";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_MASTER_PASSPHRASE: &[u8] = b"masterPass456";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_IV: [u8; 16] = [
    0x9f, 0x3c, 0x1a, 0x7e, 0x55, 0xd2, 0x0b, 0x44, 0x86, 0xee, 0x0c, 0x71, 0xa2, 0xb3, 0xc4, 0xd5,
];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_MASTER_IV: [u8; 16] = [
    0xa5, 0xa5, 0xa5, 0xa5, 0x5a, 0x5a, 0x5a, 0x5a, 0x0f, 0x0f, 0x0f, 0x0f, 0xf0, 0xf0, 0xf0, 0xf0,
];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_TEXT: &[u8] = b"Line one\r\nLine two\r\nThe quick brown fox jumps over the lazy dog.\r\n";

#[allow(dead_code)]
pub fn reference_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Encrypts one block with a 16/24/32-byte key.
#[allow(dead_code)]
pub fn encrypt_block(key: &[u8], block: &mut [u8; 16]) {
    let block = GenericArray::from_mut_slice(block);
    match key.len() {
        16 => Aes128Enc::new_from_slice(key).unwrap().encrypt_block(block),
        24 => Aes192Enc::new_from_slice(key).unwrap().encrypt_block(block),
        32 => Aes256Enc::new_from_slice(key).unwrap().encrypt_block(block),
        n => panic!("unsupported key length {n}"),
    }
}

/// Reference CBC encryption, in place.
#[allow(dead_code)]
pub fn cbc_encrypt(key: &[u8], iv: &[u8; 16], data: &mut [u8]) {
    assert_eq!(data.len() % 16, 0, "reference CBC needs whole blocks");
    let mut previous = *iv;
    for chunk in data.chunks_exact_mut(16) {
        let mut block = [0u8; 16];
        for i in 0..16 {
            block[i] = chunk[i] ^ previous[i];
        }
        encrypt_block(key, &mut block);
        chunk.copy_from_slice(&block);
        previous = block;
    }
}

#[allow(dead_code)]
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = 16 - data.len() % 16;
    let mut out = data.to_vec();
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Builds a `0x01000000` (no master key) container.
#[allow(dead_code)]
pub fn build_container(plaintext: &[u8], passphrase: &[u8], iv: &[u8; 16]) -> Vec<u8> {
    let mut body = pkcs7_pad(plaintext);
    cbc_encrypt(&reference_sha256(passphrase), iv, &mut body);

    let mut out = Vec::with_capacity(24 + body.len());
    out.extend_from_slice(&0x0403_0201u32.to_be_bytes());
    out.extend_from_slice(&0x0100_0000u32.to_be_bytes());
    out.extend_from_slice(iv);
    out.extend_from_slice(&body);
    out
}

/// Builds a `0x02000000` (master key) container.
///
/// The file key is `SHA-256(passphrase)`, stored wrapped under
/// `SHA-256(master_passphrase)`, so either passphrase opens the file.
#[allow(dead_code)]
pub fn build_master_container(
    plaintext: &[u8],
    passphrase: &[u8],
    master_passphrase: &[u8],
    iv: &[u8; 16],
    master_iv: &[u8; 16],
) -> Vec<u8> {
    let file_key = reference_sha256(passphrase);
    let mut wrapped = file_key;
    cbc_encrypt(&reference_sha256(master_passphrase), master_iv, &mut wrapped);

    let mut body = pkcs7_pad(plaintext);
    cbc_encrypt(&file_key, iv, &mut body);

    let mut out = Vec::with_capacity(72 + body.len());
    out.extend_from_slice(&0x0403_0201u32.to_be_bytes());
    out.extend_from_slice(&0x0200_0000u32.to_be_bytes());
    out.extend_from_slice(iv);
    out.extend_from_slice(master_iv);
    out.extend_from_slice(&wrapped);
    out.extend_from_slice(&body);
    out
}
