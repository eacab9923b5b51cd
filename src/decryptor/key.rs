//! src/decryptor/key.rs
//! Body-key selection: passphrase hash, or the file key unwrapped with it.

use crate::aliases::Key32;
use crate::crypto::cbc::decrypt_cbc;
use crate::crypto::kdf::derive_passphrase_key;
use crate::error::NotepadCryptError;
use crate::header::FileHeader;

/// The AES-256 key that decrypts the ciphertext body.
///
/// Resolved once per decode. Both variants hold 32 bytes; the tag records
/// which unlock path produced them.
pub enum CipherKey {
    /// `SHA-256(passphrase)` used directly.
    Direct(Key32),
    /// File key recovered by CBC-decrypting the header's wrapped key under
    /// `SHA-256(master passphrase)`.
    MasterWrapped(Key32),
}

impl CipherKey {
    /// Derive the body key for `header`.
    ///
    /// With `use_master_key == false` a master-key section, if present, is
    /// ignored: such files open with either passphrase.
    ///
    /// # Errors
    ///
    /// [`NotepadCryptError::NoMasterKeyPresent`] if master-key mode is
    /// requested for a file without a master-key section.
    pub fn derive(
        header: &FileHeader,
        passphrase: &[u8],
        use_master_key: bool,
    ) -> Result<Self, NotepadCryptError> {
        let mut passphrase_key = Key32::new([0u8; 32]);
        derive_passphrase_key(passphrase, &mut passphrase_key)?;

        if !use_master_key {
            tracing::debug!(format = ?header.format, "using passphrase key directly");
            return Ok(Self::Direct(passphrase_key));
        }

        let section = header
            .master_key
            .as_ref()
            .ok_or(NotepadCryptError::NoMasterKeyPresent)?;

        tracing::debug!("unwrapping file key with master passphrase");
        let mut file_key = Key32::new(*section.wrapped_file_key.expose_secret());
        decrypt_cbc(
            file_key.expose_secret_mut(),
            passphrase_key.expose_secret(),
            section.master_iv.expose_secret(),
        )?;
        Ok(Self::MasterWrapped(file_key))
    }

    /// Raw key bytes for the body decryption.
    pub fn expose_secret(&self) -> &[u8; 32] {
        match self {
            Self::Direct(key) | Self::MasterWrapped(key) => key.expose_secret(),
        }
    }

    /// `true` when the key came from the master-key section rather than the
    /// passphrase hash.
    pub const fn is_master_wrapped(&self) -> bool {
        matches!(self, Self::MasterWrapped(_))
    }
}
