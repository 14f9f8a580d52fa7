//! Hashing utilities for the token ledger
//!
//! Provides Keccak256 hashing for state roots, event signatures and
//! event-log digests. All hashing is deterministic: the same ledger state
//! always produces the same root.

use crate::types::{Hash, B256};
use sha3::{Digest, Keccak256};

/// Compute Keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    B256::from_slice(&hasher.finalize())
}

/// Hash a serializable struct
///
/// Uses bincode for deterministic serialization before hashing, so two
/// structurally equal values always hash identically.
pub fn hash_struct<T: serde::Serialize>(value: &T) -> Hash {
    let bytes = bincode::serialize(value).expect("serialization should not fail");
    keccak256(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        let hash = keccak256(&[]);
        // Known empty Keccak256 hash
        assert_eq!(
            hex::encode(hash),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_known_vector() {
        let hash = keccak256(b"hello");
        assert_eq!(
            hex::encode(hash),
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_hash_struct_deterministic() {
        #[derive(serde::Serialize)]
        struct Entry {
            account: u64,
            balance: u64,
        }

        let a = Entry {
            account: 1,
            balance: 100,
        };
        let b = Entry {
            account: 1,
            balance: 100,
        };
        let c = Entry {
            account: 1,
            balance: 99,
        };

        assert_eq!(hash_struct(&a), hash_struct(&b));
        assert_ne!(hash_struct(&a), hash_struct(&c));
    }
}
