//! The engine: dispatches [`Instruction`]s against the platform, the
//! registry and a [`Ledger`].
//!
//! # Commit Protocol
//!
//! Every pair-mutating operation runs under that pair's lock:
//!
//! 1. Read the platform terms (`NotConfigured` / `PlatformPaused`).
//! 2. Compute the plan from the current pair snapshot (pure).
//! 3. Hand the plan's effects to [`Ledger::apply`].
//! 4. Commit the plan's pair state only if step 3 succeeded.
//!
//! Any error in steps 1–3 leaves the pair and every balance untouched.

mod outcome;

pub use outcome::Outcome;

use crate::domain::{Amount, PairKey, SwapDirection};
use crate::error::AmmError;
use crate::platform::{PlatformConfig, PlatformSettings};
use crate::pools::{Deposit, Pair, SwapQuote, Withdrawal};
use crate::registry::PoolRegistry;
use crate::requests::{
    AddLiquidity, CreatePair, Instruction, RemoveLiquidity, SetPause, Swap, UpdateFeeRate,
};
use crate::traits::{Ledger, LiquidityAccounting, SwapEngine};

/// Owns one platform record, one pair registry and one ledger.
///
/// `Engine` is `Sync` whenever its ledger is, so a single instance can be
/// shared behind an `Arc` by many threads.  Operations on different pairs
/// proceed in parallel; operations on the same pair serialize.
///
/// # Example
///
/// ```rust
/// use hydra_pairs::domain::{AccountId, Amount, AssetId, BasisPoints, PairKey, SwapDirection};
/// use hydra_pairs::engine::Engine;
/// use hydra_pairs::ledger::InMemoryLedger;
/// use hydra_pairs::platform::PlatformSettings;
/// use hydra_pairs::requests::{AddLiquidity, CreatePair, Swap};
///
/// let admin = AccountId::from_bytes([0xad; 32]);
/// let lp = AccountId::from_bytes([1; 32]);
/// let x = AssetId::from_bytes([10; 32]);
/// let y = AssetId::from_bytes([11; 32]);
///
/// let engine = Engine::new(InMemoryLedger::new());
/// let settings = PlatformSettings::new(BasisPoints::new(250), x, admin, admin).expect("valid");
/// engine.configure_platform(&settings).expect("first configure");
///
/// let key = engine.create_pair(&CreatePair::new(x, y).expect("distinct")).expect("new").key();
/// engine.ledger().credit(lp, x, Amount::new(1_010_000_000)).expect("fits");
/// engine.ledger().credit(lp, y, Amount::new(1_000_000_000)).expect("fits");
///
/// let add = AddLiquidity::new(lp, key, Amount::new(1_000_000_000), Amount::new(1_000_000_000))
///     .expect("non-zero");
/// engine.add_liquidity(&add).expect("deposit");
///
/// let swap = Swap::new(lp, key, Amount::new(10_000_000), Amount::ZERO, SwapDirection::AToB)
///     .expect("non-zero");
/// let quote = engine.swap(&swap).expect("swap");
/// assert_eq!(quote.amount_out(), Amount::new(9_655_856));
/// ```
#[derive(Debug, Default)]
pub struct Engine<L> {
    platform: PlatformConfig,
    registry: PoolRegistry,
    ledger: L,
}

impl<L: Ledger> Engine<L> {
    /// Creates an engine with an unconfigured platform and no pairs.
    pub fn new(ledger: L) -> Self {
        Self {
            platform: PlatformConfig::new(),
            registry: PoolRegistry::new(),
            ledger,
        }
    }

    /// Returns the platform handle.
    pub const fn platform(&self) -> &PlatformConfig {
        &self.platform
    }

    /// Returns the pair registry.
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Validates and executes one instruction.
    ///
    /// # Flow
    ///
    /// 1. Validate the request via [`Instruction::validate`].
    /// 2. Require an active platform if
    ///    [`requires_active_platform`](Instruction::requires_active_platform).
    /// 3. Delegate to the matching operation below.
    ///
    /// # Errors
    ///
    /// Any error from validation or from the delegated operation.
    #[tracing::instrument(level = "debug", skip_all, fields(instruction = %instruction))]
    pub fn execute(&self, instruction: &Instruction) -> Result<Outcome, AmmError> {
        instruction.validate()?;
        if instruction.requires_active_platform() {
            self.platform.require_active()?;
        }
        match instruction {
            Instruction::ConfigurePlatform(settings) => {
                self.configure_platform(settings)?;
                Ok(Outcome::Configured)
            }
            Instruction::CreatePair(req) => self.create_pair(req).map(Outcome::PairCreated),
            Instruction::AddLiquidity(req) => self.add_liquidity(req).map(Outcome::Deposited),
            Instruction::RemoveLiquidity(req) => {
                self.remove_liquidity(req).map(Outcome::Withdrew)
            }
            Instruction::Swap(req) => self.swap(req).map(Outcome::Swapped),
            Instruction::SetPause(req) => {
                self.set_pause(req)?;
                Ok(Outcome::PauseSet(req.pause()))
            }
            Instruction::UpdateFeeRate(req) => {
                self.update_fee_rate(req)?;
                Ok(Outcome::FeeRateUpdated(req.fee_rate()))
            }
        }
    }

    /// Creates the platform record.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidFeeRate`] or [`AmmError::AlreadyConfigured`].
    pub fn configure_platform(&self, settings: &PlatformSettings) -> Result<(), AmmError> {
        self.platform.configure(settings)
    }

    /// Registers an empty pair.  Not gated by configuration or pause.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidPair`] or [`AmmError::PairAlreadyExists`].
    pub fn create_pair(&self, req: &CreatePair) -> Result<Pair, AmmError> {
        req.validate()?;
        let key = req.key();
        self.registry.create_pair(key.asset_a(), key.asset_b())
    }

    /// Returns a snapshot of the pair under `key`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PairNotFound`] if no such pair exists.
    pub fn pair(&self, key: &PairKey) -> Result<Pair, AmmError> {
        self.registry.lookup(key)
    }

    /// Deposits both assets and mints shares to the caller.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::NotConfigured`] / [`AmmError::PlatformPaused`].
    /// - [`AmmError::PairNotFound`] if the pair does not exist.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be
    ///   minted.
    /// - [`AmmError::InsufficientFunds`] from the ledger.
    pub fn add_liquidity(&self, req: &AddLiquidity) -> Result<Deposit, AmmError> {
        req.validate()?;
        self.platform.require_active()?;
        let deposit = self.registry.with_pair(&req.pair(), |pair| {
            let deposit = pair.plan_deposit(req.amount_a(), req.amount_b())?;
            self.ledger.apply(&deposit.effects(req.caller()))?;
            *pair = deposit.pair_after();
            Ok(deposit)
        })?;
        tracing::debug!(
            pair = %req.pair(),
            provider = %req.caller(),
            amount_a = %deposit.amount_a(),
            amount_b = %deposit.amount_b(),
            shares = %deposit.shares_minted(),
            "liquidity added"
        );
        Ok(deposit)
    }

    /// Burns shares and pays out both assets.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero or the payout rounds
    ///   to nothing.
    /// - [`AmmError::NotConfigured`] / [`AmmError::PlatformPaused`].
    /// - [`AmmError::PairNotFound`] if the pair does not exist.
    /// - [`AmmError::InsufficientShares`] if the request exceeds the supply
    ///   or the caller's balance.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    pub fn remove_liquidity(&self, req: &RemoveLiquidity) -> Result<Withdrawal, AmmError> {
        req.validate()?;
        self.platform.require_active()?;
        let withdrawal = self.registry.with_pair(&req.pair(), |pair| {
            let withdrawal =
                pair.plan_withdrawal(req.shares(), req.min_amount_a(), req.min_amount_b())?;
            self.ledger.apply(&withdrawal.effects(req.caller()))?;
            *pair = withdrawal.pair_after();
            Ok(withdrawal)
        })?;
        tracing::debug!(
            pair = %req.pair(),
            provider = %req.caller(),
            shares = %withdrawal.shares_burned(),
            amount_a = %withdrawal.amount_a(),
            amount_b = %withdrawal.amount_b(),
            "liquidity removed"
        );
        Ok(withdrawal)
    }

    /// Executes a swap at the current protocol fee rate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::NotConfigured`] / [`AmmError::PlatformPaused`].
    /// - [`AmmError::PairNotFound`] if the pair does not exist.
    /// - [`AmmError::InsufficientLiquidity`] if the pair is empty or would
    ///   be drained.
    /// - [`AmmError::SlippageExceeded`] if the output is below the minimum.
    /// - [`AmmError::InsufficientFunds`] from the ledger.
    pub fn swap(&self, req: &Swap) -> Result<SwapQuote, AmmError> {
        req.validate()?;
        let terms = self.platform.active_terms()?;
        let quote = self.registry.with_pair(&req.pair(), |pair| {
            let quote = pair.quote_swap(
                req.amount_in(),
                req.min_amount_out(),
                req.direction(),
                terms.fee_rate,
            )?;
            self.ledger
                .apply(&quote.effects(req.caller(), terms.fee_collector))?;
            *pair = quote.pair_after();
            Ok(quote)
        })?;
        let key = req.pair();
        self.platform.record_swap(
            quote.direction().input_asset(&key),
            quote.amount_in(),
            quote.protocol_fee(),
        );
        tracing::debug!(
            pair = %key,
            trader = %req.caller(),
            direction = %quote.direction(),
            amount_in = %quote.amount_in(),
            protocol_fee = %quote.protocol_fee(),
            amount_out = %quote.amount_out(),
            "swap executed"
        );
        Ok(quote)
    }

    /// Prices a swap against the current pair state without committing.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap) minus the ledger errors.
    pub fn quote_swap(
        &self,
        key: &PairKey,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<SwapQuote, AmmError> {
        let terms = self.platform.active_terms()?;
        self.registry.lookup(key)?.quote_swap(
            amount_in,
            min_amount_out,
            direction,
            terms.fee_rate,
        )
    }

    /// Sets the pause flag.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotConfigured`] or [`AmmError::Unauthorized`].
    pub fn set_pause(&self, req: &SetPause) -> Result<(), AmmError> {
        self.platform.set_pause(req.caller(), req.pause())
    }

    /// Replaces the protocol fee rate.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotConfigured`], [`AmmError::Unauthorized`] or
    /// [`AmmError::InvalidFeeRate`].
    pub fn update_fee_rate(&self, req: &UpdateFeeRate) -> Result<(), AmmError> {
        req.validate()?;
        self.platform.update_fee_rate(req.caller(), req.fee_rate())
    }
}
