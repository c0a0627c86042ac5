//! # Hydra Pairs
//!
//! A multi-pair constant-product exchange core: a platform record with an
//! administrator, a protocol fee and a pause switch; a registry of
//! two-asset pairs keyed by literal asset order; share accounting for
//! liquidity providers; and single-hop swap pricing.
//!
//! The crate never moves balances itself.  Every committed operation
//! produces a list of [`Effect`](domain::Effect)s that a pluggable
//! [`Ledger`](traits::Ledger) executes all-or-nothing; pair state is
//! committed only after the ledger accepted them.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pairs::prelude::*;
//!
//! let admin = AccountId::from_bytes([0xad; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let usdc = AssetId::from_bytes([1; 32]);
//! let weth = AssetId::from_bytes([2; 32]);
//!
//! // 1. Create the engine and the platform record (250bp protocol fee)
//! let engine = Engine::new(InMemoryLedger::new());
//! let settings = PlatformSettings::new(BasisPoints::new(250), usdc, admin, admin)
//!     .expect("valid settings");
//! engine.configure_platform(&settings).expect("first configure");
//!
//! // 2. Register a pair and fund a provider
//! let key = engine
//!     .create_pair(&CreatePair::new(usdc, weth).expect("distinct"))
//!     .expect("new pair")
//!     .key();
//! engine.ledger().credit(alice, usdc, Amount::new(2_000_000_000)).expect("fits");
//! engine.ledger().credit(alice, weth, Amount::new(1_000_000_000)).expect("fits");
//!
//! // 3. Seed liquidity
//! let add = AddLiquidity::new(alice, key, Amount::new(1_000_000_000), Amount::new(1_000_000_000))
//!     .expect("non-zero");
//! let deposit = engine.add_liquidity(&add).expect("deposit");
//! assert_eq!(deposit.shares_minted(), Shares::new(1_000_000_000));
//!
//! // 4. Swap 10 000 000 USDC for WETH
//! let swap = Swap::new(alice, key, Amount::new(10_000_000), Amount::ZERO, SwapDirection::AToB)
//!     .expect("non-zero");
//! let quote = engine.swap(&swap).expect("swap");
//! assert_eq!(quote.protocol_fee(), Amount::new(250_000));
//! assert_eq!(quote.amount_out(), Amount::new(9_655_856));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Consumer    │  builds Instruction / request structs
//! └──────┬──────┘
//!        │ execute(&instruction)
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  validates, checks platform, locks the pair
//! └──────┬──────┘
//!        │ plan_deposit / plan_withdrawal / quote_swap
//!        ▼
//! ┌─────────────┐
//! │    Pair      │  pure pricing + share accounting
//! └──────┬──────┘
//!        │ effects
//!        ▼
//! ┌─────────────┐
//! │   Ledger     │  applies all effects or none, then Engine commits
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PairKey`](domain::PairKey), [`Effect`](domain::Effect), etc. |
//! | [`traits`] | Seams: [`SwapEngine`](traits::SwapEngine), [`LiquidityAccounting`](traits::LiquidityAccounting), [`Ledger`](traits::Ledger) |
//! | [`platform`] | [`PlatformConfig`](platform::PlatformConfig) handle and [`PlatformSettings`](platform::PlatformSettings) |
//! | [`pools`] | [`Pair`](pools::Pair) record and its plans |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) concurrent pair map |
//! | [`requests`] | Typed requests and the [`Instruction`](requests::Instruction) enum |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`engine`] | [`Engine`](engine::Engine) dispatcher |
//! | [`math`] | Checked arithmetic, integer square root |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod platform;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod requests;
pub mod traits;
