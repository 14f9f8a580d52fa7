//! Observable event log for the token ledger
//!
//! `Transfer` and `Approval` records are the ledger's externally observable
//! log, consumed by outside tooling (explorers, exchanges, deployment
//! layers). Exactly one event is appended per successful mutation, inside
//! that operation's commit; a rejected call appends nothing.

use crate::hashing::{hash_struct, keccak256};
use crate::types::{Address, Amount, Hash};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

extern crate alloc;

/// Canonical signature of the Transfer event
pub const TRANSFER_SIGNATURE: &str = "Transfer(address,address,uint256)";

/// Canonical signature of the Approval event
pub const APPROVAL_SIGNATURE: &str = "Approval(address,address,uint256)";

/// A committed ledger event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    /// Value moved between accounts (transfer or delegated transfer)
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },
    /// Allowance set by an owner for a spender
    Approval {
        owner: Address,
        spender: Address,
        value: Amount,
    },
}

impl Event {
    /// Canonical event signature string
    pub fn signature(&self) -> &'static str {
        match self {
            Event::Transfer { .. } => TRANSFER_SIGNATURE,
            Event::Approval { .. } => APPROVAL_SIGNATURE,
        }
    }

    /// Keccak256 of the canonical signature (the first log topic)
    pub fn signature_hash(&self) -> Hash {
        keccak256(self.signature().as_bytes())
    }

    /// Log topics: signature hash plus the two indexed, left-padded accounts
    ///
    /// Matches the ERC-20 log encoding, so tooling that already consumes
    /// ERC-20 logs can consume this log unchanged.
    pub fn topics(&self) -> [Hash; 3] {
        match self {
            Event::Transfer { from, to, .. } => {
                [self.signature_hash(), from.into_word(), to.into_word()]
            }
            Event::Approval { owner, spender, .. } => {
                [self.signature_hash(), owner.into_word(), spender.into_word()]
            }
        }
    }

    /// Log data: the value as a big-endian 32-byte word
    pub fn data(&self) -> [u8; 32] {
        self.value().to_be_bytes::<32>()
    }

    /// The amount carried by the event
    pub fn value(&self) -> Amount {
        match self {
            Event::Transfer { value, .. } | Event::Approval { value, .. } => *value,
        }
    }
}

/// Append-only event log
///
/// Appended only on the committed-success path of each operation; replayable
/// by external observers to reconstruct balance movements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed event
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All committed events, in commit order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Most recently committed event
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Number of committed events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether any event has been committed
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Deterministic digest of the full log
    pub fn digest(&self) -> Hash {
        hash_struct(&self.events)
    }
}
