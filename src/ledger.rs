//! The token ledger
//!
//! Single owner of all balances and allowances for one deployed token.
//! Every mutating operation is a single atomic transaction: all precondition
//! checks run before any write, so a rejected call leaves both the state and
//! the event log exactly as they were.

extern crate alloc;

use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventLog};
use crate::state::LedgerState;
use crate::types::{Address, Amount, Hash, DECIMALS, NULL_ACCOUNT};
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Fungible token ledger with a fixed supply
///
/// Created once per deployed token with `(name, symbol, supply, deployer)`;
/// the full supply is credited to the deployer at construction and is never
/// minted or burned afterwards. Mutations go through [`transfer`],
/// [`approve`] and [`transfer_from`] only.
///
/// Mutating operations take `&mut self`, so exclusive access is enforced by
/// ownership; a concurrent host wraps the whole ledger in one mutex so
/// read-modify-write steps never interleave.
///
/// [`transfer`]: Ledger::transfer
/// [`approve`]: Ledger::approve
/// [`transfer_from`]: Ledger::transfer_from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    name: String,
    symbol: String,
    total_supply: Amount,
    state: LedgerState,
    log: EventLog,
}

impl Ledger {
    /// Create a ledger and credit the full supply to the deployer
    ///
    /// `total_supply_whole_units` is scaled by 10^18 into base units.
    /// Rejects with `InvalidRecipient` when the deployer is the null
    /// account, which must never hold a balance.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        total_supply_whole_units: u64,
        deployer: Address,
    ) -> Result<Self> {
        if deployer == NULL_ACCOUNT {
            return Err(LedgerError::InvalidRecipient);
        }

        let total_supply = crate::types::whole_units(total_supply_whole_units);
        let mut state = LedgerState::new();
        state.set_balance(deployer, total_supply);

        Ok(Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply,
            state,
            log: EventLog::new(),
        })
    }

    /// Display name, fixed at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol, fixed at construction
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Divisibility of the token (base units per whole token = 10^decimals)
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Total supply in base units; equals the sum of all balances
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of an account, zero if never credited
    pub fn balance_of(&self, account: Address) -> Amount {
        self.state.balance_of(&account)
    }

    /// Remaining allowance from `owner` to `spender`, zero if never set
    ///
    /// A pure read: it never rejects, not even when the allowance is zero.
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.state.allowance(&owner, &spender)
    }

    /// Committed events, in commit order
    pub fn events(&self) -> &[Event] {
        self.log.events()
    }

    /// The full event log
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Number of accounts holding a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.state.holder_count()
    }

    /// Deterministic commitment over balances and allowances
    ///
    /// Changes iff a mutation commits; observers replaying the event log can
    /// check their reconstruction against it.
    pub fn state_root(&self) -> Hash {
        self.state.compute_state_root()
    }

    /// Move `amount` from the caller to `to`
    ///
    /// Rejects with `InvalidSender` when the caller is the null account,
    /// `InvalidRecipient` when `to` is, and `InsufficientBalance` when the
    /// caller's balance does not cover `amount`. On success both balances
    /// update together and one `Transfer` event is appended.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> Result<()> {
        if caller == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSender);
        }
        if to == NULL_ACCOUNT {
            return Err(LedgerError::InvalidRecipient);
        }

        self.state.move_value(caller, to, amount)?;
        self.log.push(Event::Transfer {
            from: caller,
            to,
            value: amount,
        });
        Ok(())
    }

    /// Set the caller's allowance for `spender` to exactly `amount`
    ///
    /// Overwrites any prior allowance, it is not additive; approving zero is
    /// the revocation mechanism. Rejects with `InvalidSender` when the
    /// caller is the null account and `InvalidSpender` when `spender` is.
    /// Appends one `Approval` event.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: Amount) -> Result<()> {
        if caller == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSender);
        }
        if spender == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSpender);
        }

        self.state.set_allowance(caller, spender, amount);
        self.log.push(Event::Approval {
            owner: caller,
            spender,
            value: amount,
        });
        Ok(())
    }

    /// Move `amount` from `from` to `to` on the caller's allowance
    ///
    /// The caller must hold an allowance from `from` covering `amount`, and
    /// `from`'s balance must cover it too. The null account can participate
    /// in no role: `InvalidSender` for `from`, `InvalidSpender` for the
    /// caller, `InvalidRecipient` for `to`. On success the allowance is
    /// decremented, both balances update, and one `Transfer` event is
    /// appended (no Approval event for the decrement). Any precondition
    /// failure rejects with state and log untouched.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        if from == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSender);
        }
        if caller == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSpender);
        }
        if to == NULL_ACCOUNT {
            return Err(LedgerError::InvalidRecipient);
        }

        let allowance = self.state.allowance(&from, &caller);
        let remaining = allowance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                owner: from,
                spender: caller,
                allowance,
                amount,
            })?;

        // Balance check happens inside move_value; nothing has been written
        // yet, so a rejection here still leaves the allowance intact.
        self.state.move_value(from, to, amount)?;
        self.state.set_allowance(from, caller, remaining);
        self.log.push(Event::Transfer {
            from,
            to,
            value: amount,
        });
        Ok(())
    }
}

/// Builder for deploying a ledger
///
/// Convenience over [`Ledger::new`] for hosts that assemble deployment
/// parameters incrementally.
#[derive(Debug, Clone)]
pub struct LedgerBuilder {
    name: String,
    symbol: String,
    total_supply_whole_units: u64,
    deployer: Address,
}

impl LedgerBuilder {
    /// Create a builder with an empty token and the null deployer
    ///
    /// `build` rejects until a non-null deployer is supplied.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply_whole_units: 0,
            deployer: NULL_ACCOUNT,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the ticker symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set the supply in whole units (scaled by 10^18 at build)
    pub fn with_supply(mut self, whole_units: u64) -> Self {
        self.total_supply_whole_units = whole_units;
        self
    }

    /// Set the account credited with the full supply
    pub fn with_deployer(mut self, deployer: Address) -> Self {
        self.deployer = deployer;
        self
    }

    /// Deploy the ledger
    pub fn build(self) -> Result<Ledger> {
        Ledger::new(
            self.name,
            self.symbol,
            self.total_supply_whole_units,
            self.deployer,
        )
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
