//! # Constants
//!
//! Fixed values of the NotepadCrypt container format and the primitives it uses.
//! All multi-byte header fields are big-endian.

/// Magic number at offset 0 of every non-empty NotepadCrypt file.
pub const FILE_MAGIC: u32 = 0x0403_0201;

/// Format tag for files whose body key is `SHA-256(passphrase)` only.
pub const TAG_NO_MASTER_KEY: u32 = 0x0100_0000;

/// Format tag for files that also carry a master-key-wrapped file key.
pub const TAG_HAS_MASTER_KEY: u32 = 0x0200_0000;

/// AES block length in bytes. Also the CBC IV length and the padding modulus.
pub const BLOCK_LEN: usize = 16;

/// SHA-256 digest length; every derived key is this long (AES-256).
pub const DIGEST_LEN: usize = 32;

/// Length of magic + format tag.
pub const PREAMBLE_LEN: usize = 8;

/// Offset of the primary (body) IV.
pub const PRIMARY_IV_OFFSET: usize = 8;

/// Offset of the master IV (master-key files only).
pub const MASTER_IV_OFFSET: usize = 24;

/// Offset of the wrapped 32-byte file key (master-key files only).
pub const WRAPPED_KEY_OFFSET: usize = 40;

/// Body offset for [`TAG_NO_MASTER_KEY`] files.
pub const BODY_OFFSET_NO_MASTER_KEY: usize = 24;

/// Body offset for [`TAG_HAS_MASTER_KEY`] files.
pub const BODY_OFFSET_HAS_MASTER_KEY: usize = 72;
