//! Side effects a core operation asks the ledger collaborator to execute.
//!
//! The core never moves balances itself.  Every committed operation returns
//! the list of effects that must be applied together with its state change;
//! the engine hands that list to a [`Ledger`](crate::traits::Ledger) and only
//! commits the new pair state if the ledger applied all of them.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, PairKey, Shares};

/// A party that can hold asset balances in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Holder {
    /// A user or platform account.
    Account(AccountId),
    /// The custody of a pair's reserves.
    Pool(PairKey),
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account:{id}"),
            Self::Pool(key) => write!(f, "pool:{key}"),
        }
    }
}

/// One ledger instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Move `amount` of `asset` from one holder to another.
    Transfer {
        /// Asset being moved.
        asset: AssetId,
        /// Debited holder.
        from: Holder,
        /// Credited holder.
        to: Holder,
        /// Raw amount.
        amount: Amount,
    },
    /// Mint `shares` of `pair` to `to`.
    MintShares {
        /// Pair whose shares are minted.
        pair: PairKey,
        /// Recipient.
        to: AccountId,
        /// Number of shares.
        shares: Shares,
    },
    /// Burn `shares` of `pair` from `from`.
    BurnShares {
        /// Pair whose shares are burned.
        pair: PairKey,
        /// Share holder.
        from: AccountId,
        /// Number of shares.
        shares: Shares,
    },
}

impl Effect {
    /// Shorthand for a transfer.
    #[must_use]
    pub const fn transfer(asset: AssetId, from: Holder, to: Holder, amount: Amount) -> Self {
        Self::Transfer {
            asset,
            from,
            to,
            amount,
        }
    }
}
