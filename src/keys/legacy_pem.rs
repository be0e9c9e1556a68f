// ABOUTME: RFC 1423 decryption of password-protected legacy PEM blocks
// ABOUTME: Parses DEK-Info headers, derives keys with EVP_BytesToKey/MD5 and decrypts CBC payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! Legacy encrypted PEM support
//!
//! OpenSSL's "traditional" key format encrypts the DER body of a PEM block and
//! announces it with two headers:
//!
//! ```text
//! Proc-Type: 4,ENCRYPTED
//! DEK-Info: AES-128-CBC,CE9601962803498FD8AE1E9759DD3CB8
//! ```
//!
//! The cipher key is derived from the password with `EVP_BytesToKey` (MD5, one
//! iteration) salted with the first eight bytes of the IV.

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use make_jwt_core::constants::key_format::{
    DEK_INFO_HEADER, PROC_TYPE_ENCRYPTED, PROC_TYPE_HEADER,
};
use make_jwt_core::{IssueError, IssueResult};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

/// Length of the salt taken from the front of the IV
const SALT_LEN: usize = 8;

/// Block ciphers allowed in a `DEK-Info` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemCipher {
    /// Single DES in CBC mode
    DesCbc,
    /// Three-key triple DES in CBC mode
    DesEde3Cbc,
    /// AES-128 in CBC mode
    Aes128Cbc,
    /// AES-192 in CBC mode
    Aes192Cbc,
    /// AES-256 in CBC mode
    Aes256Cbc,
}

impl PemCipher {
    /// Look up a cipher by its `DEK-Info` name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DES-CBC" => Some(Self::DesCbc),
            "DES-EDE3-CBC" => Some(Self::DesEde3Cbc),
            "AES-128-CBC" => Some(Self::Aes128Cbc),
            "AES-192-CBC" => Some(Self::Aes192Cbc),
            "AES-256-CBC" => Some(Self::Aes256Cbc),
            _ => None,
        }
    }

    /// Key length in bytes
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::DesCbc => 8,
            Self::Aes128Cbc => 16,
            Self::DesEde3Cbc | Self::Aes192Cbc => 24,
            Self::Aes256Cbc => 32,
        }
    }

    /// Block (and IV) length in bytes
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::DesCbc | Self::DesEde3Cbc => 8,
            Self::Aes128Cbc | Self::Aes192Cbc | Self::Aes256Cbc => 16,
        }
    }
}

/// Whether a PEM block carries RFC 1423 encryption headers
#[must_use]
pub fn is_encrypted(block: &pem::Pem) -> bool {
    let headers = block.headers();
    headers.get(DEK_INFO_HEADER).is_some()
        || headers
            .get(PROC_TYPE_HEADER)
            .is_some_and(|value| value == PROC_TYPE_ENCRYPTED)
}

/// Cipher and IV announced by a `DEK-Info` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DekInfo {
    /// Cipher used for the body
    pub cipher: PemCipher,
    /// Initialisation vector, also the key derivation salt source
    pub iv: Vec<u8>,
}

impl DekInfo {
    /// Parse a `DEK-Info` header value such as `AES-128-CBC,<hex iv>`
    ///
    /// # Errors
    ///
    /// Returns `IssueError::Decryption` when the cipher is unsupported or the
    /// IV is not valid hex of the cipher's block length.
    pub fn parse(value: &str) -> IssueResult<Self> {
        let (name, iv_hex) = value
            .split_once(',')
            .ok_or_else(|| IssueError::decryption(format!("malformed DEK-Info header: {value}")))?;

        let cipher = PemCipher::from_name(name.trim()).ok_or_else(|| {
            IssueError::decryption(format!("unknown encryption mode: {}", name.trim()))
        })?;

        let iv = hex::decode(iv_hex.trim())
            .map_err(|e| IssueError::decryption(format!("invalid IV in DEK-Info header: {e}")))?;
        if iv.len() != cipher.block_len() {
            return Err(IssueError::decryption(format!(
                "IV must be {} bytes for {name}, got {}",
                cipher.block_len(),
                iv.len()
            )));
        }

        Ok(Self { cipher, iv })
    }
}

/// Decrypt the body of an encrypted PEM block.
///
/// # Errors
///
/// Returns `IssueError::Decryption` when the headers are missing or invalid,
/// the ciphertext is truncated, or the padding does not check out (which is
/// what a wrong password looks like).
pub fn decrypt_block(block: &pem::Pem, password: &[u8]) -> IssueResult<Zeroizing<Vec<u8>>> {
    let header = block
        .headers()
        .get(DEK_INFO_HEADER)
        .ok_or_else(|| IssueError::decryption("encrypted block has no DEK-Info header"))?;
    let dek_info = DekInfo::parse(header)?;

    let ciphertext = block.contents();
    if ciphertext.is_empty() || ciphertext.len() % dek_info.cipher.block_len() != 0 {
        return Err(IssueError::decryption(
            "encrypted PEM data is not a multiple of the block size",
        ));
    }

    let key = derive_key(password, &dek_info.iv[..SALT_LEN], dek_info.cipher.key_len());
    let iv = dek_info.iv.as_slice();

    match dek_info.cipher {
        PemCipher::DesCbc => cbc_decrypt::<cbc::Decryptor<des::Des>>(&key, iv, ciphertext),
        PemCipher::DesEde3Cbc => {
            cbc_decrypt::<cbc::Decryptor<des::TdesEde3>>(&key, iv, ciphertext)
        }
        PemCipher::Aes128Cbc => cbc_decrypt::<cbc::Decryptor<aes::Aes128>>(&key, iv, ciphertext),
        PemCipher::Aes192Cbc => cbc_decrypt::<cbc::Decryptor<aes::Aes192>>(&key, iv, ciphertext),
        PemCipher::Aes256Cbc => cbc_decrypt::<cbc::Decryptor<aes::Aes256>>(&key, iv, ciphertext),
    }
}

fn cbc_decrypt<D>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> IssueResult<Zeroizing<Vec<u8>>>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let decryptor = D::new_from_slices(key, iv)
        .map_err(|e| IssueError::decryption(format!("invalid key or IV length: {e}")))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| IssueError::decryption("decryption password incorrect"))
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single iteration
fn derive_key(password: &[u8], salt: &[u8], key_len: usize) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(Vec::with_capacity(key_len + 16));
    let mut digest = Vec::new();

    while key.len() < key_len {
        let mut hasher = Md5::new();
        hasher.update(&digest);
        hasher.update(password);
        hasher.update(salt);
        digest = hasher.finalize().to_vec();
        key.extend_from_slice(&digest);
    }

    key.truncate(key_len);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_derive_key_matches_openssl() {
        // openssl enc -aes-256-cbc -P -md md5 -S 0102030405060708 -pass pass:correct-horse
        let key = derive_key(b"correct-horse", &SALT, 32);
        assert_eq!(
            hex::encode_upper(key.as_slice()),
            "E6E1D613D61FC644B1DDF76EBB33F5EA71E6C67BA50BF04F44A0D415C093B5B5"
        );
    }

    #[test]
    fn test_derive_key_truncates_to_cipher_length() {
        let key = derive_key(b"correct-horse", &SALT, 16);
        assert_eq!(
            hex::encode_upper(key.as_slice()),
            "E6E1D613D61FC644B1DDF76EBB33F5EA"
        );
    }

    #[test]
    fn test_parse_dek_info() {
        let info = DekInfo::parse("AES-128-CBC,CE9601962803498FD8AE1E9759DD3CB8").unwrap();
        assert_eq!(info.cipher, PemCipher::Aes128Cbc);
        assert_eq!(info.iv.len(), 16);

        let info = DekInfo::parse("DES-EDE3-CBC,7A8F5F887499DEC5").unwrap();
        assert_eq!(info.cipher, PemCipher::DesEde3Cbc);
        assert_eq!(info.iv.len(), 8);
    }

    #[test]
    fn test_parse_dek_info_rejects_bad_input() {
        assert!(matches!(
            DekInfo::parse("AES-128-CBC"),
            Err(IssueError::Decryption(_))
        ));
        assert!(matches!(
            DekInfo::parse("RC2-CBC,7A8F5F887499DEC5"),
            Err(IssueError::Decryption(_))
        ));
        assert!(matches!(
            DekInfo::parse("AES-128-CBC,7A8F5F887499DEC5"),
            Err(IssueError::Decryption(_))
        ));
        assert!(matches!(
            DekInfo::parse("AES-128-CBC,not-hex"),
            Err(IssueError::Decryption(_))
        ));
    }

    #[test]
    fn test_truncated_ciphertext_is_rejected() {
        let block = encrypted_block("AES-128-CBC,CE9601962803498FD8AE1E9759DD3CB8", vec![0u8; 15]);

        assert!(is_encrypted(&block));
        let error = decrypt_block(&block, b"correct-horse").unwrap_err();
        assert!(error.to_string().contains("multiple of the block size"));
    }

    fn encrypted_block(dek_info: &str, ciphertext: Vec<u8>) -> pem::Pem {
        let mut block = pem::Pem::new("RSA PRIVATE KEY", ciphertext);
        block
            .headers_mut()
            .add(PROC_TYPE_HEADER, PROC_TYPE_ENCRYPTED)
            .unwrap();
        block.headers_mut().add(DEK_INFO_HEADER, dek_info).unwrap();
        block
    }

    #[test]
    fn test_des_cbc_decrypts_known_vector() {
        // printf 'des payload' | openssl enc -des-cbc -K E6E1D613D61FC644 -iv 0102030405060708
        let ciphertext = hex::decode("c2dd5b5ecede91f8bf29a0c2bddb4f7a").unwrap();
        let block = encrypted_block("DES-CBC,0102030405060708", ciphertext);

        let plaintext = decrypt_block(&block, b"correct-horse").unwrap();
        assert_eq!(plaintext.as_slice(), b"des payload");
    }

    #[test]
    fn test_plain_block_is_not_encrypted() {
        let block = pem::Pem::new("RSA PRIVATE KEY", vec![0u8; 16]);
        assert!(!is_encrypted(&block));
    }
}
