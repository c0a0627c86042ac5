//! A process-local, all-or-nothing ledger.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{AccountId, Amount, AssetId, Effect, Holder, PairKey, Shares};
use crate::error::AmmError;
use crate::traits::Ledger;

#[derive(Debug, Default)]
struct Books {
    assets: HashMap<(Holder, AssetId), u64>,
    shares: HashMap<(PairKey, AccountId), u64>,
}

impl Books {
    fn asset(&self, holder: Holder, asset: AssetId) -> u64 {
        self.assets.get(&(holder, asset)).copied().unwrap_or_default()
    }

    fn shares(&self, pair: PairKey, account: AccountId) -> u64 {
        self.shares.get(&(pair, account)).copied().unwrap_or_default()
    }
}

/// Asset balances per holder and share balances per `(pair, account)`,
/// behind one mutex.
///
/// [`apply`](Ledger::apply) stages every touched balance, runs the whole
/// batch against the staged copy and writes back only if every effect
/// succeeded.
///
/// # Example
///
/// ```rust
/// use hydra_pairs::domain::{AccountId, Amount, AssetId, Effect, Holder};
/// use hydra_pairs::ledger::InMemoryLedger;
/// use hydra_pairs::traits::Ledger;
///
/// let alice = AccountId::from_bytes([1; 32]);
/// let bob = AccountId::from_bytes([2; 32]);
/// let usdc = AssetId::from_bytes([9; 32]);
///
/// let ledger = InMemoryLedger::new();
/// ledger.credit(alice, usdc, Amount::new(100)).expect("fits");
///
/// let pay = Effect::transfer(usdc, Holder::Account(alice), Holder::Account(bob), Amount::new(40));
/// ledger.apply(&[pay]).expect("funded");
/// assert_eq!(ledger.balance(alice, usdc), Amount::new(60));
/// assert_eq!(ledger.balance(bob, usdc), Amount::new(40));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    books: Mutex<Books>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Books> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mints `amount` of `asset` into `account` from outside the system.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the balance overflows.
    pub fn credit(&self, account: AccountId, asset: AssetId, amount: Amount) -> Result<(), AmmError> {
        let mut books = self.lock();
        let balance = books
            .assets
            .entry((Holder::Account(account), asset))
            .or_default();
        *balance = balance
            .checked_add(amount.get())
            .ok_or(AmmError::ArithmeticOverflow("ledger balance"))?;
        Ok(())
    }

    /// Balance of `asset` held by `account`.
    #[must_use]
    pub fn balance(&self, account: AccountId, asset: AssetId) -> Amount {
        self.holder_balance(Holder::Account(account), asset)
    }

    /// Balance of `asset` held by any holder, including pool custody.
    #[must_use]
    pub fn holder_balance(&self, holder: Holder, asset: AssetId) -> Amount {
        Amount::new(self.lock().asset(holder, asset))
    }

    /// Shares of `pair` owned by `account`.
    #[must_use]
    pub fn share_balance(&self, pair: PairKey, account: AccountId) -> Shares {
        Shares::new(self.lock().shares(pair, account))
    }
}

impl Ledger for InMemoryLedger {
    fn apply(&self, effects: &[Effect]) -> Result<(), AmmError> {
        let mut books = self.lock();
        let mut assets: HashMap<(Holder, AssetId), u64> = HashMap::new();
        let mut shares: HashMap<(PairKey, AccountId), u64> = HashMap::new();

        for effect in effects {
            match *effect {
                Effect::Transfer {
                    asset,
                    from,
                    to,
                    amount,
                } => {
                    let debit = assets
                        .entry((from, asset))
                        .or_insert_with(|| books.asset(from, asset));
                    *debit = debit
                        .checked_sub(amount.get())
                        .ok_or(AmmError::InsufficientFunds)?;
                    let credit = assets
                        .entry((to, asset))
                        .or_insert_with(|| books.asset(to, asset));
                    *credit = credit
                        .checked_add(amount.get())
                        .ok_or(AmmError::ArithmeticOverflow("ledger balance"))?;
                }
                Effect::MintShares { pair, to, shares: n } => {
                    let balance = shares
                        .entry((pair, to))
                        .or_insert_with(|| books.shares(pair, to));
                    *balance = balance
                        .checked_add(n.get())
                        .ok_or(AmmError::ArithmeticOverflow("share balance"))?;
                }
                Effect::BurnShares {
                    pair,
                    from,
                    shares: n,
                } => {
                    let balance = shares
                        .entry((pair, from))
                        .or_insert_with(|| books.shares(pair, from));
                    *balance = balance
                        .checked_sub(n.get())
                        .ok_or(AmmError::InsufficientShares)?;
                }
            }
        }

        books.assets.extend(assets);
        books.shares.extend(shares);
        tracing::trace!(effects = effects.len(), "ledger batch applied");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([2; 32])
    }

    fn usdc() -> AssetId {
        AssetId::from_bytes([9; 32])
    }

    fn pair() -> PairKey {
        let Ok(k) = PairKey::new(usdc(), AssetId::from_bytes([8; 32])) else {
            panic!("expected Ok");
        };
        k
    }

    fn pay(from: AccountId, to: AccountId, amount: u64) -> Effect {
        Effect::transfer(
            usdc(),
            Holder::Account(from),
            Holder::Account(to),
            Amount::new(amount),
        )
    }

    #[test]
    fn unknown_balances_are_zero() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.balance(alice(), usdc()), Amount::ZERO);
        assert_eq!(ledger.share_balance(pair(), alice()), Shares::ZERO);
    }

    #[test]
    fn batch_applies_in_order() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.credit(alice(), usdc(), Amount::new(10)).is_ok());
        // Bob can only pay after Alice's transfer in the same batch.
        let result = ledger.apply(&[pay(alice(), bob(), 10), pay(bob(), alice(), 4)]);
        assert_eq!(result, Ok(()));
        assert_eq!(ledger.balance(alice(), usdc()), Amount::new(4));
        assert_eq!(ledger.balance(bob(), usdc()), Amount::new(6));
    }

    #[test]
    fn failed_batch_changes_nothing() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.credit(alice(), usdc(), Amount::new(10)).is_ok());
        let mint = Effect::MintShares {
            pair: pair(),
            to: alice(),
            shares: Shares::new(3),
        };
        let result = ledger.apply(&[pay(alice(), bob(), 5), mint, pay(bob(), alice(), 6)]);
        assert_eq!(result, Err(AmmError::InsufficientFunds));
        assert_eq!(ledger.balance(alice(), usdc()), Amount::new(10));
        assert_eq!(ledger.balance(bob(), usdc()), Amount::ZERO);
        assert_eq!(ledger.share_balance(pair(), alice()), Shares::ZERO);
    }

    #[test]
    fn burn_beyond_balance() {
        let ledger = InMemoryLedger::new();
        let mint = Effect::MintShares {
            pair: pair(),
            to: alice(),
            shares: Shares::new(3),
        };
        let burn = Effect::BurnShares {
            pair: pair(),
            from: alice(),
            shares: Shares::new(4),
        };
        assert_eq!(ledger.apply(&[mint]), Ok(()));
        assert_eq!(ledger.apply(&[burn]), Err(AmmError::InsufficientShares));
        assert_eq!(ledger.share_balance(pair(), alice()), Shares::new(3));
    }

    #[test]
    fn pool_custody_is_tracked() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.credit(alice(), usdc(), Amount::new(7)).is_ok());
        let into_pool = Effect::transfer(
            usdc(),
            Holder::Account(alice()),
            Holder::Pool(pair()),
            Amount::new(7),
        );
        assert_eq!(ledger.apply(&[into_pool]), Ok(()));
        assert_eq!(
            ledger.holder_balance(Holder::Pool(pair()), usdc()),
            Amount::new(7)
        );
    }

    #[test]
    fn credit_overflow() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.credit(alice(), usdc(), Amount::MAX).is_ok());
        assert_eq!(
            ledger.credit(alice(), usdc(), Amount::new(1)),
            Err(AmmError::ArithmeticOverflow("ledger balance"))
        );
    }
}
