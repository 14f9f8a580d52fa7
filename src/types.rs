//! Core type definitions for the token ledger
//!
//! Uses alloy-primitives for Ethereum-compatible types.
//! All arithmetic on amounts is exact unsigned 256-bit integer arithmetic.

pub use alloy_primitives::{Address, B256, U256};

/// 32-byte hash (Keccak256 output)
pub type Hash = B256;

/// Token amount in base units (10^-18 of a whole token)
pub type Amount = U256;

/// Fixed divisibility of the token: one whole token is 10^18 base units
pub const DECIMALS: u8 = 18;

/// The reserved all-zero account. Never holds a balance and is rejected
/// as a transfer or approval participant.
pub const NULL_ACCOUNT: Address = Address::ZERO;

/// One whole token expressed in base units (10^18)
pub fn unit() -> Amount {
    U256::from(10u64).pow(U256::from(DECIMALS))
}

/// Scale a whole-unit quantity into base units
///
/// Mirrors `parseUnits(n, "ether")`: `whole_units(100)` is 100 tokens,
/// i.e. `100 * 10^18` base units.
pub fn whole_units(n: u64) -> Amount {
    U256::from(n) * unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_account_is_zero() {
        assert_eq!(NULL_ACCOUNT, Address::ZERO);
        assert!(NULL_ACCOUNT.is_zero());
    }

    #[test]
    fn test_unit_scaling() {
        assert_eq!(unit(), U256::from(1_000_000_000_000_000_000u64));
        assert_eq!(whole_units(0), U256::ZERO);
        assert_eq!(whole_units(1), unit());
        assert_eq!(
            whole_units(1_000_000),
            U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64))
        );
    }

    #[test]
    fn test_amount_arithmetic_is_exact() {
        let a = whole_units(100);
        let b = whole_units(40);
        assert_eq!(a - b, whole_units(60));
        assert_eq!(a.checked_sub(b), Some(whole_units(60)));
        assert_eq!(b.checked_sub(a), None);
    }
}
