//! # Header Parsing
//!
//! A NotepadCrypt container starts with a big-endian magic number and a format
//! tag, followed by the body IV and, for master-key files, the master IV and
//! the wrapped file key:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `0x04030201` |
//! | 4 | 4 | format tag |
//! | 8 | 16 | primary IV |
//! | 24 | 16 | master IV (master-key files only) |
//! | 40 | 32 | wrapped file key (master-key files only) |
//! | 24 or 72 | rest | ciphertext body |

use std::io::Read;

use crate::aliases::{Iv16, WrappedKey32};
use crate::consts::{
    BODY_OFFSET_HAS_MASTER_KEY, BODY_OFFSET_NO_MASTER_KEY, FILE_MAGIC, MASTER_IV_OFFSET,
    PREAMBLE_LEN, PRIMARY_IV_OFFSET, TAG_HAS_MASTER_KEY, TAG_NO_MASTER_KEY, WRAPPED_KEY_OFFSET,
};
use crate::error::NotepadCryptError;
use crate::utils::{read_array, read_u32_be};

/// Which unlock paths a file supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// Body key is `SHA-256(passphrase)` only.
    NoMasterKey,
    /// Body key is `SHA-256(passphrase)`, and the same key is also stored
    /// wrapped under `SHA-256(master passphrase)`.
    HasMasterKey,
}

impl FormatTag {
    /// Maps the raw tag word to a known format.
    pub fn from_u32(tag: u32) -> Result<Self, NotepadCryptError> {
        match tag {
            TAG_NO_MASTER_KEY => Ok(Self::NoMasterKey),
            TAG_HAS_MASTER_KEY => Ok(Self::HasMasterKey),
            _ => Err(NotepadCryptError::UnsupportedEncryptionFormat { tag }),
        }
    }

    /// The raw tag word as stored on disk; the inverse of [`FormatTag::from_u32`].
    ///
    /// ```
    /// use notepadcrypt_rs::header::FormatTag;
    ///
    /// assert_eq!(FormatTag::HasMasterKey.as_u32(), 0x0200_0000);
    /// assert_eq!(FormatTag::from_u32(0x0100_0000)?, FormatTag::NoMasterKey);
    /// # Ok::<(), notepadcrypt_rs::NotepadCryptError>(())
    /// ```
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::NoMasterKey => TAG_NO_MASTER_KEY,
            Self::HasMasterKey => TAG_HAS_MASTER_KEY,
        }
    }

    /// Whether the header carries a master IV and wrapped file key.
    pub const fn has_master_key(self) -> bool {
        matches!(self, Self::HasMasterKey)
    }

    /// Offset of the ciphertext body; also the minimum file length.
    pub const fn body_offset(self) -> usize {
        match self {
            Self::NoMasterKey => BODY_OFFSET_NO_MASTER_KEY,
            Self::HasMasterKey => BODY_OFFSET_HAS_MASTER_KEY,
        }
    }
}

/// Master-key section of a [`FormatTag::HasMasterKey`] header.
pub struct MasterKeySection {
    pub master_iv: Iv16,
    pub wrapped_file_key: WrappedKey32,
}

/// Parsed fixed-size header of a non-empty container.
pub struct FileHeader {
    pub format: FormatTag,
    pub primary_iv: Iv16,
    pub master_key: Option<MasterKeySection>,
}

impl FileHeader {
    /// Offset of the ciphertext body within the file.
    pub const fn body_offset(&self) -> usize {
        self.format.body_offset()
    }
}

/// Validates magic + tag from the first 8 bytes.
///
/// The magic is checked as soon as 4 bytes are present, so a short foreign
/// file is reported as foreign rather than truncated.
fn parse_preamble(data: &[u8]) -> Result<FormatTag, NotepadCryptError> {
    let truncated = || NotepadCryptError::Truncated {
        expected: PREAMBLE_LEN,
        actual: data.len(),
    };
    let magic = read_u32_be(data, 0).ok_or_else(truncated)?;
    if magic != FILE_MAGIC {
        return Err(NotepadCryptError::UnsupportedFileFormat { magic });
    }
    let tag = read_u32_be(data, 4).ok_or_else(truncated)?;
    FormatTag::from_u32(tag)
}

/// Parses the header of a non-empty container.
///
/// The master-key section is read whenever the tag says it is present, even
/// if the caller will not use it.
///
/// # Errors
///
/// - [`NotepadCryptError::Truncated`] if `data` is shorter than the header.
/// - [`NotepadCryptError::UnsupportedFileFormat`] on a magic mismatch.
/// - [`NotepadCryptError::UnsupportedEncryptionFormat`] on an unknown tag.
pub fn parse_header(data: &[u8]) -> Result<FileHeader, NotepadCryptError> {
    let format = parse_preamble(data)?;
    let truncated = || NotepadCryptError::Truncated {
        expected: format.body_offset(),
        actual: data.len(),
    };
    if data.len() < format.body_offset() {
        return Err(truncated());
    }

    let primary_iv = Iv16::new(read_array(data, PRIMARY_IV_OFFSET).ok_or_else(truncated)?);
    let master_key = if format.has_master_key() {
        Some(MasterKeySection {
            master_iv: Iv16::new(read_array(data, MASTER_IV_OFFSET).ok_or_else(truncated)?),
            wrapped_file_key: WrappedKey32::new(
                read_array(data, WRAPPED_KEY_OFFSET).ok_or_else(truncated)?,
            ),
        })
    } else {
        None
    };

    tracing::debug!(
        format = ?format,
        body_len = data.len() - format.body_offset(),
        "parsed NotepadCrypt header"
    );

    Ok(FileHeader {
        format,
        primary_iv,
        master_key,
    })
}

/// Read the format tag of a NotepadCrypt container without decrypting it.
///
/// Only the first 8 bytes are consumed. An empty input is a valid container
/// (the legacy encryptor writes nothing for empty text) and yields `None`.
///
/// # Errors
///
/// - [`NotepadCryptError::Io`] if reading fails
/// - [`NotepadCryptError::Truncated`] if the input ends inside the first 8 bytes
/// - [`NotepadCryptError::UnsupportedFileFormat`] /
///   [`NotepadCryptError::UnsupportedEncryptionFormat`] for a foreign header
///
/// # Example
///
/// ```
/// use notepadcrypt_rs::header::FormatTag;
/// use notepadcrypt_rs::read_format;
/// use std::io::Cursor;
///
/// let header = [0x04, 0x03, 0x02, 0x01, 0x02, 0x00, 0x00, 0x00];
/// assert_eq!(read_format(Cursor::new(header))?, Some(FormatTag::HasMasterKey));
/// assert_eq!(read_format(Cursor::new(Vec::<u8>::new()))?, None);
/// # Ok::<(), notepadcrypt_rs::NotepadCryptError>(())
/// ```
pub fn read_format<R: Read>(reader: R) -> Result<Option<FormatTag>, NotepadCryptError> {
    let mut preamble = Vec::with_capacity(PREAMBLE_LEN);
    reader
        .take(PREAMBLE_LEN as u64)
        .read_to_end(&mut preamble)?;

    if preamble.is_empty() {
        return Ok(None);
    }
    parse_preamble(&preamble).map(Some)
}
