/*
Error types for ledger operations
Every variant is a whole-call rejection: no partial state change, no event.
*/

use crate::types::{Address, Amount};
use thiserror::Error;

/// Errors that can reject a ledger operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Destination of a value-moving operation is the null account
    #[error("invalid recipient: the null account cannot receive tokens")]
    InvalidRecipient,

    /// Acting party of a mutation is the null account
    ///
    /// Covers the caller of transfer/approve and the source account of a
    /// delegated transfer; the null account never participates, not even
    /// with a zero amount.
    #[error("invalid sender: the null account cannot send or approve")]
    InvalidSender,

    /// Spender of an approval is the null account
    #[error("invalid spender: the null account cannot be approved")]
    InvalidSpender,

    /// Requested amount exceeds the source account's balance
    #[error("insufficient balance for {account}: have {balance}, need {amount}")]
    InsufficientBalance {
        account: Address,
        balance: Amount,
        amount: Amount,
    },

    /// Requested amount exceeds the caller's remaining allowance
    #[error("insufficient allowance from {owner} to {spender}: have {allowance}, need {amount}")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        allowance: Amount,
        amount: Amount,
    },

    /// Crediting would overflow the balance representation
    ///
    /// Unreachable while the fixed-supply invariant holds; kept as a
    /// defensive bound so arithmetic never wraps.
    #[error("balance overflow crediting {account}")]
    BalanceOverflow { account: Address },
}

/// Result type for ledger operations
pub type Result<T> = core::result::Result<T, LedgerError>;
