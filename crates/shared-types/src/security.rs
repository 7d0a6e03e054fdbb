//! # Access Token Signing
//!
//! The single implementation of access-token minting and verification.
//!
//! ## Token Format
//!
//! ```text
//! <user_id>.<expires_at_unix_secs>.<hex(HMAC-SHA256(secret, "<user_id>.<expires_at>"))>
//! ```
//!
//! ## Security Properties
//!
//! - **HMAC-SHA256 Signatures**: claims cannot be altered without the secret
//! - **Constant-time verification**: via `Mac::verify_slice`
//! - **Time-bounded validity**: tokens carry an absolute expiry

use crate::entities::UserId;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject of the token.
    pub user_id: UserId,
    /// Expiry as unix seconds.
    pub expires_at: u64,
}

/// Reasons a presented token is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the expected three-part shape.
    #[error("malformed token")]
    Malformed,

    /// Signature does not match the claims.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token expired at the given time.
    #[error("token expired at {expires_at}")]
    Expired { expires_at: u64 },
}

/// Mints and verifies HMAC-signed access tokens.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Creates a signer over the given secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size")
    }

    /// Signs claims into a bearer token string.
    pub fn sign(&self, claims: AccessClaims) -> String {
        let payload = format!("{}.{}", claims.user_id, claims.expires_at);
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let tag = hex::encode(mac.finalize().into_bytes());
        format!("{payload}.{tag}")
    }

    /// Verifies a token's signature and expiry against `now` (unix seconds).
    pub fn verify(&self, token: &str, now: u64) -> Result<AccessClaims, TokenError> {
        let mut parts = token.splitn(3, '.');
        let (Some(user), Some(expiry), Some(tag)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };

        let user_id: UserId = user.parse().map_err(|_| TokenError::Malformed)?;
        let expires_at: u64 = expiry.parse().map_err(|_| TokenError::Malformed)?;
        let tag = hex::decode(tag).map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac();
        mac.update(format!("{user}.{expiry}").as_bytes());
        mac.verify_slice(&tag)
            .map_err(|_| TokenError::InvalidSignature)?;

        if now >= expires_at {
            return Err(TokenError::Expired { expires_at });
        }

        Ok(AccessClaims {
            user_id,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(expires_at: u64) -> AccessClaims {
        AccessClaims {
            user_id: UserId(9),
            expires_at,
        }
    }

    #[test]
    fn test_sign_then_verify() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(claims(2_000));
        assert!(token.starts_with("9.2000."));
        assert_eq!(signer.verify(&token, 1_000), Ok(claims(2_000)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(claims(1_000));
        assert_eq!(
            signer.verify(&token, 1_000),
            Err(TokenError::Expired { expires_at: 1_000 })
        );
    }

    #[test]
    fn test_tampered_subject_rejected() {
        let signer = TokenSigner::new("secret");
        let token = signer.sign(claims(2_000));
        let forged = token.replacen("9.", "10.", 1);
        assert_eq!(signer.verify(&forged, 0), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = TokenSigner::new("secret").sign(claims(2_000));
        assert_eq!(
            TokenSigner::new("other").verify(&token, 0),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        let signer = TokenSigner::new("secret");
        for token in ["", "abc", "1.2", "x.2.00", "1.y.00", "1.2.zz"] {
            assert_eq!(signer.verify(token, 0), Err(TokenError::Malformed), "{token}");
        }
    }
}
