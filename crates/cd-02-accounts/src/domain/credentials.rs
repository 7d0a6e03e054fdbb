//! Salted password hashing.
//!
//! Stored form is `hex(salt)$hex(HMAC-SHA256(salt, password))` with a
//! 16-byte random salt. Verification recomputes the tag and compares in
//! constant time via `Mac::verify_slice`.

use super::errors::AccountError;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const SALT_LEN: usize = 16;

fn mac_for(salt: &[u8], password: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(salt).expect("HMAC can take key of any size");
    mac.update(password.as_bytes());
    mac
}

/// Hashes `password` under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    hash_with_salt(&salt, password)
}

fn hash_with_salt(salt: &[u8], password: &str) -> String {
    let tag = mac_for(salt, password).finalize().into_bytes();
    format!("{}${}", hex::encode(salt), hex::encode(tag))
}

/// Returns `Ok(false)` on a wrong password and `CorruptCredential` when
/// `stored` is not in the expected form.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AccountError> {
    let (salt_hex, tag_hex) = stored
        .split_once('$')
        .ok_or(AccountError::CorruptCredential)?;
    let salt = hex::decode(salt_hex).map_err(|_| AccountError::CorruptCredential)?;
    let tag = hex::decode(tag_hex).map_err(|_| AccountError::CorruptCredential)?;
    if salt.is_empty() || tag.is_empty() {
        return Err(AccountError::CorruptCredential);
    }
    Ok(mac_for(&salt, password).verify_slice(&tag).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let stored = hash_password("Password1");
        assert!(verify_password("Password1", &stored).unwrap());
        assert!(!verify_password("password1", &stored).unwrap());
    }

    #[test]
    fn test_salts_differ_per_hash() {
        assert_ne!(hash_password("Password1"), hash_password("Password1"));
    }

    #[test]
    fn test_stored_form() {
        let stored = hash_with_salt(&[0xab; SALT_LEN], "Password1");
        let (salt, tag) = stored.split_once('$').unwrap();
        assert_eq!(salt, "ab".repeat(SALT_LEN));
        assert_eq!(tag.len(), 64);
    }

    #[test]
    fn test_corrupt_records() {
        for stored in ["", "nodollar", "zz$00", "$", "00$"] {
            assert_eq!(
                verify_password("Password1", stored),
                Err(AccountError::CorruptCredential),
                "{stored:?}"
            );
        }
    }
}
