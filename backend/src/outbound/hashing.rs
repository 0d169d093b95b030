//! Salted SHA-256 credential hashing adapter.
//!
//! Reference implementation of the hashing capability. The encoded form is
//! `hex(salt)$hex(sha256(salt || password))`; digests are compared in
//! constant time. Deployments wanting a dedicated password KDF swap their
//! adapter in behind the same port without touching the login operation.

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::ports::PasswordHasher;

/// Length of the random salt in bytes before hex encoding.
const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

/// Stateless hashing adapter; safe to share and copy freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    fn digest(salt: &[u8], plain: &str) -> [u8; 32] {
        Sha256::new()
            .chain_update(salt)
            .chain_update(plain.as_bytes())
            .finalize()
            .into()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plain: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let digest = Self::digest(&salt, plain);
        format!("{}{SEPARATOR}{}", hex::encode(salt), hex::encode(digest))
    }

    fn verify(&self, plain: &str, encoded: &str) -> bool {
        let Some((salt_hex, digest_hex)) = encoded.split_once(SEPARATOR) else {
            return false;
        };
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        let Ok(expected) = hex::decode(digest_hex) else {
            return false;
        };
        let actual = Self::digest(&salt, plain);
        // Slice ct_eq treats length mismatches as unequal.
        actual.as_slice().ct_eq(expected.as_slice()).into()
    }
}
