//! The platform-wide record: administrator, fee terms, pause flag and
//! statistics.
//!
//! [`PlatformSettings`] is the validated configuration input;
//! [`PlatformConfig`] is the explicit, lock-guarded handle that owns the
//! single [`PlatformRecord`].

mod config;
mod settings;

pub use config::{PlatformConfig, PlatformRecord, PlatformStats, SwapTerms};
pub use settings::PlatformSettings;
