//! src/batch_ops.rs
//! Parallel decryption of independent containers.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::{decrypt, NotepadCryptError};

/// Decrypt every `(input, output)` pair in parallel with the same passphrase.
///
/// Pairs are independent; the first failure is returned. Outputs of pairs that
/// failed are left untouched, outputs of pairs that succeeded may already be
/// written.
pub fn decrypt_batch<R, W>(
    batch: &mut [(R, W)],
    passphrase: &[u8],
    use_master_key: bool,
) -> Result<(), NotepadCryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, passphrase, use_master_key))
}
