//! # Token Ledger
//!
//! In-memory fungible token ledger with ERC-20 style semantics.
//!
//! Tracks ownership of a fixed-supply divisible asset across accounts and
//! lets owners move value directly or delegate transfer rights up to an
//! approved limit. The crate is:
//! - **Exact**: all amounts are unsigned 256-bit integers, arithmetic is
//!   checked and never wraps
//! - **Atomic**: each mutating operation commits all of its updates and its
//!   event, or none of them
//! - **Deterministic**: state maps iterate in a fixed order and hash to a
//!   stable root, compatible with `no_std`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Ledger      │ ── name, symbol, total supply
//! └────────┬────────┘
//!          │  transfer / approve / transfer_from
//!          ▼
//! ┌─────────────────┐
//! │   LedgerState   │ ── balances, allowances (BTreeMap)
//! └────────┬────────┘
//!          │  committed mutations only
//!          ▼
//! ┌─────────────────┐
//! │    EventLog     │ ── Transfer / Approval, ERC-20 topic
//! └─────────────────┘    encoding for external observers
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use token_ledger::prelude::*;
//!
//! let deployer = Address::repeat_byte(0x01);
//! let receiver = Address::repeat_byte(0x02);
//!
//! // Deploy: the full supply lands on the deployer
//! let mut ledger = Ledger::new("RH Token", "RH", 1_000_000, deployer)?;
//!
//! // Move 100 tokens
//! ledger.transfer(deployer, receiver, whole_units(100))?;
//! assert_eq!(ledger.balance_of(receiver), whole_units(100));
//! # Ok::<(), LedgerError>(())
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Address, Amount, scaling)
//! - [`errors`] - Error types and Result alias
//! - [`hashing`] - Keccak256 and deterministic struct hashing
//! - [`events`] - Transfer/Approval events and the append-only log
//! - [`state`] - Balance and allowance bookkeeping
//! - [`ledger`] - The Ledger itself and its builder
//!
//! ## Concurrency
//!
//! The ledger is a strictly sequential state machine: mutations take
//! `&mut self` and complete synchronously, so partial effects are never
//! observable. A concurrent host wraps the whole `Ledger` in a single
//! `Mutex` (one lock guarding both maps) to serialize callers.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod hashing;
pub mod ledger;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use errors::{LedgerError, Result};
pub use events::{Event, EventLog, APPROVAL_SIGNATURE, TRANSFER_SIGNATURE};
pub use hashing::{hash_struct, keccak256};
pub use ledger::{Ledger, LedgerBuilder};
pub use state::LedgerState;
pub use types::{whole_units, Address, Amount, Hash, B256, DECIMALS, NULL_ACCOUNT, U256};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        whole_units, Address, Amount, Event, EventLog, Hash, Ledger, LedgerBuilder, LedgerError,
        LedgerState, Result, DECIMALS, NULL_ACCOUNT, U256,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn deploy() -> (Ledger, Address, Address, Address) {
        let deployer = Address::repeat_byte(0x01);
        let receiver = Address::repeat_byte(0x02);
        let exchange = Address::repeat_byte(0x03);
        let ledger = Ledger::new("RH Token", "RH", 1_000_000, deployer).unwrap();
        (ledger, deployer, receiver, exchange)
    }

    /// Sum of balances across every account that ever appeared
    fn total_of(ledger: &Ledger, accounts: &[Address]) -> Amount {
        accounts
            .iter()
            .fold(U256::ZERO, |acc, a| acc + ledger.balance_of(*a))
    }

    /// End-to-end test: deployment metadata and initial distribution
    #[test]
    fn test_deployment() {
        let (ledger, deployer, ..) = deploy();

        assert_eq!(ledger.name(), "RH Token");
        assert_eq!(ledger.symbol(), "RH");
        assert_eq!(ledger.decimals(), 18);
        assert_eq!(ledger.total_supply(), whole_units(1_000_000));
        assert_eq!(ledger.balance_of(deployer), whole_units(1_000_000));
    }

    /// End-to-end test: direct transfer, delegated transfer, and the
    /// conservation invariant across a mixed history
    #[test]
    fn test_transfer_lifecycle_conserves_supply() {
        let (mut ledger, deployer, receiver, exchange) = deploy();
        let accounts = [deployer, receiver, exchange];

        ledger
            .transfer(deployer, receiver, whole_units(100))
            .unwrap();
        assert_eq!(total_of(&ledger, &accounts), ledger.total_supply());

        ledger
            .approve(deployer, exchange, whole_units(500))
            .unwrap();
        ledger
            .transfer_from(exchange, deployer, exchange, whole_units(200))
            .unwrap();
        assert_eq!(total_of(&ledger, &accounts), ledger.total_supply());
        assert_eq!(ledger.allowance(deployer, exchange), whole_units(300));

        // Rejections leave the invariant holding too
        let _ = ledger
            .transfer(receiver, NULL_ACCOUNT, whole_units(1))
            .unwrap_err();
        let _ = ledger
            .transfer_from(exchange, deployer, receiver, whole_units(400))
            .unwrap_err();
        assert_eq!(total_of(&ledger, &accounts), ledger.total_supply());
        assert_eq!(ledger.balance_of(deployer), whole_units(999_700));
        assert_eq!(ledger.balance_of(receiver), whole_units(100));
        assert_eq!(ledger.balance_of(exchange), whole_units(200));
    }

    /// End-to-end test: delegated transfer spends the whole allowance
    #[test]
    fn test_delegated_transfer() {
        let (mut ledger, deployer, receiver, exchange) = deploy();

        ledger
            .approve(deployer, exchange, whole_units(100))
            .unwrap();
        ledger
            .transfer_from(exchange, deployer, receiver, whole_units(100))
            .unwrap();

        assert_eq!(ledger.allowance(deployer, exchange), U256::ZERO);
        assert_eq!(ledger.balance_of(deployer), whole_units(999_900));
        assert_eq!(ledger.balance_of(receiver), whole_units(100));

        // Allowance is spent; a second pull must reject
        let err = ledger
            .transfer_from(exchange, deployer, receiver, whole_units(1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { .. }));
    }

    /// Replaying the event log reconstructs the final balances
    #[test]
    fn test_event_log_replay() {
        let (mut ledger, deployer, receiver, exchange) = deploy();

        ledger
            .transfer(deployer, receiver, whole_units(100))
            .unwrap();
        ledger
            .approve(deployer, exchange, whole_units(250))
            .unwrap();
        ledger
            .transfer_from(exchange, deployer, exchange, whole_units(250))
            .unwrap();
        ledger
            .transfer(exchange, receiver, whole_units(50))
            .unwrap();

        // Observer replays Transfer events on top of the initial state
        let mut replayed = LedgerState::new();
        replayed.set_balance(deployer, ledger.total_supply());
        for event in ledger.events() {
            if let Event::Transfer { from, to, value } = event {
                replayed.move_value(*from, *to, *value).unwrap();
            }
        }

        for account in [deployer, receiver, exchange] {
            assert_eq!(replayed.balance_of(&account), ledger.balance_of(account));
        }
        assert_eq!(replayed.total_balance(), Some(ledger.total_supply()));
    }

    /// Events carry the canonical ERC-20 log encoding
    #[test]
    fn test_event_encoding_for_observers() {
        let (mut ledger, deployer, receiver, _) = deploy();

        ledger
            .transfer(deployer, receiver, whole_units(100))
            .unwrap();

        let event = ledger.events().last().copied().unwrap();
        let topics = event.topics();
        assert_eq!(
            hex::encode(topics[0]),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
        assert_eq!(topics[1], deployer.into_word());
        assert_eq!(topics[2], receiver.into_word());
        assert_eq!(U256::from_be_bytes(event.data()), whole_units(100));
    }
}
