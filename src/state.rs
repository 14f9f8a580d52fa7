//! In-memory ledger state
//!
//! Holds the two bookkeeping maps: account balances and owner→spender
//! allowances. Uses BTreeMap for deterministic iteration order, so the
//! state root is stable across runs. Absent entries are implicitly zero and
//! zero-valued entries are pruned rather than stored.

use crate::errors::{LedgerError, Result};
use crate::hashing::hash_struct;
use crate::types::{Address, Amount, Hash, U256};
use alloc::collections::BTreeMap;
use serde::{Deserialize, Serialize};

extern crate alloc;

/// Ledger bookkeeping state
///
/// Only the guarded primitives below mutate the maps; the null-account and
/// event-emission rules live one level up in [`crate::ledger::Ledger`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerState {
    /// Account balances in base units
    balances: BTreeMap<Address, Amount>,
    /// Allowances keyed by (owner, spender)
    allowances: BTreeMap<(Address, Address), Amount>,
}

impl LedgerState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of an account, zero if never credited
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(U256::ZERO)
    }

    /// Remaining allowance from `owner` to `spender`, zero if never set
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Set an account balance, pruning the entry when zero
    pub fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    /// Set an allowance, pruning the entry when zero
    ///
    /// Overwrites any prior value; setting zero is revocation.
    pub fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Move value between two accounts, all-or-nothing
    ///
    /// Validates both sides before writing either: underflow on the debit
    /// rejects with `InsufficientBalance`, overflow on the credit with
    /// `BalanceOverflow`, and in both cases the maps are untouched.
    pub fn move_value(&mut self, from: Address, to: Address, amount: Amount) -> Result<()> {
        let from_balance = self.balance_of(&from);
        let debited =
            from_balance
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientBalance {
                    account: from,
                    balance: from_balance,
                    amount,
                })?;

        // A self-transfer credits the post-debit balance
        let to_balance = if from == to {
            debited
        } else {
            self.balance_of(&to)
        };
        let credited = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account: to })?;

        self.set_balance(from, debited);
        self.set_balance(to, credited);
        Ok(())
    }

    /// Number of accounts holding a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Sum of all stored balances
    ///
    /// Equals the total supply at every point in time; exposed so observers
    /// and tests can check the conservation invariant directly. Returns
    /// `None` when the sum overflows, which is itself proof the invariant
    /// no longer holds.
    pub fn total_balance(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(U256::ZERO, |acc, b| acc.checked_add(*b))
    }

    /// Deterministic commitment over the full state
    pub fn compute_state_root(&self) -> Hash {
        hash_struct(self)
    }
}
