//! The asset-ledger collaborator.
//!
//! The engine never moves balances.  It produces [`Effect`]s and asks a
//! [`Ledger`] to execute them; the ledger owns custody, balance checks and
//! share ownership.

use crate::domain::Effect;
use crate::error::AmmError;

/// Executes the side effects of one engine operation.
///
/// # Atomicity Contract
///
/// [`apply`](Ledger::apply) must execute **all** effects or **none**.  When
/// it returns `Err`, no balance may have changed.  The engine relies on this
/// to keep pair state and custody in lockstep: pair state is committed only
/// after `apply` returned `Ok`.
///
/// Implementations are shared across pairs and called while the target
/// pair's lock is held, so they must be `Sync` and must not call back into
/// the engine.
pub trait Ledger: Send + Sync {
    /// Applies `effects` atomically.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientFunds`] if an asset debit exceeds the
    ///   holder's balance.
    /// - [`AmmError::InsufficientShares`] if a burn exceeds the holder's
    ///   share balance.
    /// - [`AmmError::ArithmeticOverflow`] if a credit overflows.
    fn apply(&self, effects: &[Effect]) -> Result<(), AmmError>;
}
