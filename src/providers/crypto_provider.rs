use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::errors::InternalError;

/// Alphabet session tokens are drawn from
const TOKEN_CHARSET: &[u8] = b"0123456789\
                               ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                               abcdefghijklmnopqrstuvwxyz";

/// Length of a session token (62^30 possible values)
pub const SESSION_TOKEN_LENGTH: usize = 30;

/// Cryptographic operations provider
///
/// Hashes and verifies passwords with Argon2id keyed by a server-side pepper,
/// and generates and digests session tokens.
pub struct CryptoProvider {
    password_pepper: String,
}

impl CryptoProvider {
    /// Create a new CryptoProvider
    ///
    /// # Arguments
    /// * `password_pepper` - Secret mixed into every password hash
    pub fn new(password_pepper: String) -> Self {
        Self { password_pepper }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    /// Hash a plaintext password into a PHC string
    pub fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| InternalError::crypto("encode_salt", e.to_string()))?;

        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(InternalError)` - Stored hash is malformed or Argon2 failed
    pub fn verify_password(&self, password_hash: &str, password: &str) -> Result<bool, InternalError> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| InternalError::crypto("parse_password_hash", e.to_string()))?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(InternalError::crypto("verify_password", e.to_string())),
        }
    }

    /// Generate a random alphanumeric session token
    pub fn generate_session_token(&self) -> String {
        let mut rng = rand::rng();
        (0..SESSION_TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..TOKEN_CHARSET.len());
                TOKEN_CHARSET[idx] as char
            })
            .collect()
    }

    /// SHA-256 digest of a session token as lowercase hex
    ///
    /// Only the digest is persisted, so a leaked users table does not leak
    /// live sessions.
    pub fn hash_session_token(&self, token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}

impl std::fmt::Debug for CryptoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoProvider")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}
