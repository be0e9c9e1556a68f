// ABOUTME: PEM markers for legacy PKCS#1 RSA private keys
// ABOUTME: Includes the RFC 1423 header names used by encrypted PEM blocks

/// PEM tag of a PKCS#1 RSA private key
pub const RSA_PRIVATE_KEY_TAG: &str = "RSA PRIVATE KEY";

/// RFC 1423 header naming the cipher and IV of an encrypted block
pub const DEK_INFO_HEADER: &str = "DEK-Info";

/// RFC 1421 header marking an encrypted block
pub const PROC_TYPE_HEADER: &str = "Proc-Type";

/// `Proc-Type` value of an encrypted block
pub const PROC_TYPE_ENCRYPTED: &str = "4,ENCRYPTED";
