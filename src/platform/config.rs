//! The platform record and its lock-guarded handle.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use super::PlatformSettings;
use crate::domain::{AccountId, Amount, AssetId, BasisPoints};
use crate::error::AmmError;

/// Cumulative swap statistics.
///
/// Counters saturate instead of failing: they are recorded after a swap
/// has already been committed and must not undo it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformStats {
    swap_count: u64,
    volume: BTreeMap<AssetId, u128>,
    fees: BTreeMap<AssetId, u128>,
}

impl PlatformStats {
    /// Number of committed swaps.
    #[must_use]
    pub const fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Total gross input swapped in `asset`.
    #[must_use]
    pub fn volume(&self, asset: &AssetId) -> u128 {
        self.volume.get(asset).copied().unwrap_or_default()
    }

    /// Total protocol fees charged in `asset`.
    #[must_use]
    pub fn fees(&self, asset: &AssetId) -> u128 {
        self.fees.get(asset).copied().unwrap_or_default()
    }

    fn record(&mut self, asset_in: AssetId, amount_in: Amount, fee: Amount) {
        self.swap_count = self.swap_count.saturating_add(1);
        let volume = self.volume.entry(asset_in).or_default();
        *volume = volume.saturating_add(amount_in.widen());
        let fees = self.fees.entry(asset_in).or_default();
        *fees = fees.saturating_add(fee.widen());
    }
}

/// The singleton platform record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRecord {
    admin: AccountId,
    base_asset: AssetId,
    fee_collector: AccountId,
    fee_rate: BasisPoints,
    paused: bool,
    pause_count: u64,
    stats: PlatformStats,
}

impl PlatformRecord {
    fn from_settings(settings: &PlatformSettings) -> Self {
        Self {
            admin: settings.admin(),
            base_asset: settings.base_asset(),
            fee_collector: settings.fee_collector(),
            fee_rate: settings.fee_rate(),
            paused: false,
            pause_count: 0,
            stats: PlatformStats::default(),
        }
    }

    /// Returns the administrator.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }

    /// Returns the platform's quote asset.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// Returns the protocol fee recipient.
    #[must_use]
    pub const fn fee_collector(&self) -> AccountId {
        self.fee_collector
    }

    /// Returns the protocol fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Returns `true` while mutations are suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of transitions into the paused state.
    #[must_use]
    pub const fn pause_count(&self) -> u64 {
        self.pause_count
    }

    /// Returns the swap statistics.
    #[must_use]
    pub const fn stats(&self) -> &PlatformStats {
        &self.stats
    }

    fn authorize(&self, caller: AccountId, action: &'static str) -> Result<(), AmmError> {
        if caller == self.admin {
            Ok(())
        } else {
            tracing::warn!(%caller, action, "rejected admin action");
            Err(AmmError::Unauthorized)
        }
    }
}

/// Parameters a swap reads from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTerms {
    /// Current protocol fee rate.
    pub fee_rate: BasisPoints,
    /// Recipient of the protocol fee.
    pub fee_collector: AccountId,
}

/// Handle to the platform record.
///
/// The record is created at most once per handle through
/// [`configure`](Self::configure).  All access goes through a read/write
/// lock; a poisoned lock is recovered because every write leaves the
/// record consistent before it can panic.
#[derive(Debug, Default)]
pub struct PlatformConfig {
    record: RwLock<Option<PlatformRecord>>,
}

impl PlatformConfig {
    /// Creates an unconfigured handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<PlatformRecord>> {
        self.record.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<PlatformRecord>> {
        self.record.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates the platform record.  Any caller may do this once.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFeeRate`] if the settings carry a rate above 100%.
    /// - [`AmmError::AlreadyConfigured`] on every call after the first
    ///   successful one.
    pub fn configure(&self, settings: &PlatformSettings) -> Result<(), AmmError> {
        settings.validate()?;
        let mut guard = self.write();
        if guard.is_some() {
            return Err(AmmError::AlreadyConfigured);
        }
        *guard = Some(PlatformRecord::from_settings(settings));
        tracing::info!(
            admin = %settings.admin(),
            base_asset = %settings.base_asset(),
            fee_collector = %settings.fee_collector(),
            fee_rate = %settings.fee_rate(),
            "platform configured"
        );
        Ok(())
    }

    /// Sets the pause flag.  Idempotent.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotConfigured`] before configuration.
    /// - [`AmmError::Unauthorized`] if `caller` is not the administrator.
    pub fn set_pause(&self, caller: AccountId, pause: bool) -> Result<(), AmmError> {
        let mut guard = self.write();
        let record = guard.as_mut().ok_or(AmmError::NotConfigured)?;
        record.authorize(caller, "set_pause")?;
        if pause && !record.paused {
            record.pause_count = record.pause_count.saturating_add(1);
        }
        if record.paused != pause {
            tracing::info!(paused = pause, "platform pause state changed");
        }
        record.paused = pause;
        Ok(())
    }

    /// Replaces the protocol fee rate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotConfigured`] before configuration.
    /// - [`AmmError::Unauthorized`] if `caller` is not the administrator.
    /// - [`AmmError::InvalidFeeRate`] if `fee_rate > 10_000bp`.
    pub fn update_fee_rate(&self, caller: AccountId, fee_rate: BasisPoints) -> Result<(), AmmError> {
        let mut guard = self.write();
        let record = guard.as_mut().ok_or(AmmError::NotConfigured)?;
        record.authorize(caller, "update_fee_rate")?;
        let fee_rate = BasisPoints::validated(fee_rate.get())?;
        tracing::info!(old = %record.fee_rate, new = %fee_rate, "protocol fee rate updated");
        record.fee_rate = fee_rate;
        Ok(())
    }

    /// Fails unless the platform is configured and not paused.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotConfigured`] before configuration.
    /// - [`AmmError::PlatformPaused`] while paused.
    pub fn require_active(&self) -> Result<(), AmmError> {
        self.active_terms().map(|_| ())
    }

    /// Like [`require_active`](Self::require_active), returning the fee
    /// terms read under the same lock.
    ///
    /// # Errors
    ///
    /// Same as [`require_active`](Self::require_active).
    pub fn active_terms(&self) -> Result<SwapTerms, AmmError> {
        let guard = self.read();
        let record = guard.as_ref().ok_or(AmmError::NotConfigured)?;
        if record.paused {
            return Err(AmmError::PlatformPaused);
        }
        Ok(SwapTerms {
            fee_rate: record.fee_rate,
            fee_collector: record.fee_collector,
        })
    }

    /// Returns a copy of the record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotConfigured`] before configuration.
    pub fn snapshot(&self) -> Result<PlatformRecord, AmmError> {
        self.read().as_ref().cloned().ok_or(AmmError::NotConfigured)
    }

    /// Adds a committed swap to the statistics.
    pub(crate) fn record_swap(&self, asset_in: AssetId, amount_in: Amount, fee: Amount) {
        if let Some(record) = self.write().as_mut() {
            record.stats.record(asset_in, amount_in, fee);
        }
    }
}
