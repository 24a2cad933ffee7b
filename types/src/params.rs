//! DPoS parameters — stake thresholds, block timing, schedule size, rewards.
//!
//! This is the raw, human-tunable record. Everything the consensus engine
//! consumes (scaled amounts, nanosecond intervals, quorum size) is derived
//! from it by `dpos-consensus`; nothing derived is stored here.

use crate::amount::Amount;
use crate::codec::{self, DecodeError, EncodeError};
use crate::error::InvalidConfiguration;
use crate::time::NANOS_PER_MILLI;
use serde::{Deserialize, Serialize};

/// Upper bound on `decimals`, keeping `10^decimals` to a handful of limbs.
pub const MAX_DECIMALS: u64 = 36;

/// The consensus parameter record stored by every node.
///
/// Missing fields in a serde source (e.g. a partial TOML file) take their
/// values from [`DposParams::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DposParams {
    /// Maximum length of a producer URL. Carried and persisted, not enforced here.
    pub max_url_len: u64,

    // ── Stake thresholds (whole tokens, scaled by 10^decimals at use) ────
    pub unit_stake: Amount,
    pub producer_min_quantity: Amount,
    pub voter_min_quantity: Amount,
    pub activated_min_quantity: Amount,

    // ── Block timing ──────────────────────────────────────────────────────
    /// Milliseconds between consecutive blocks. Must be non-zero.
    pub block_interval_ms: u64,

    /// Consecutive blocks each producer makes per turn. Must be non-zero.
    pub block_frequency: u64,

    /// Number of producers in the active schedule. Must be non-zero.
    pub producer_schedule_size: u64,

    pub delay_echo: u64,

    // ── System identifiers ────────────────────────────────────────────────
    pub account_name: String,
    pub system_name: String,
    pub system_url: String,

    // ── Rewards (whole tokens) ────────────────────────────────────────────
    pub extra_block_reward: Amount,
    pub block_reward: Amount,

    /// Base-10 exponent applied to every token amount.
    pub decimals: u64,
}

impl DposParams {
    pub const DEFAULT_ACCOUNT_NAME: &'static str = "sysdpos";
    pub const DEFAULT_SYSTEM_NAME: &'static str = "sysio";
    pub const DEFAULT_SYSTEM_URL: &'static str = "www.dpos.network";

    /// Baseline values. Each call builds a fresh record.
    pub fn baseline() -> Self {
        Self {
            max_url_len: 512,
            unit_stake: Amount::new(1000),
            producer_min_quantity: Amount::new(10),
            voter_min_quantity: Amount::new(1),
            activated_min_quantity: Amount::new(100),
            block_interval_ms: 3000,
            block_frequency: 6,
            producer_schedule_size: 3,
            delay_echo: 2,
            account_name: Self::DEFAULT_ACCOUNT_NAME.to_string(),
            system_name: Self::DEFAULT_SYSTEM_NAME.to_string(),
            system_url: Self::DEFAULT_SYSTEM_URL.to_string(),
            extra_block_reward: Amount::new(1),
            block_reward: Amount::new(5),
            decimals: 18,
        }
    }

    /// Canonical byte encoding, see [`crate::codec`].
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        codec::encode_params(self)
    }

    /// Decode a canonical encoding produced by [`DposParams::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode_params(bytes)
    }

    /// Check that the record can drive the schedule arithmetic.
    ///
    /// Every divisor used by slot, epoch and offset computation must be
    /// non-zero, and the epoch length in nanoseconds must fit in a `u64`.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        let non_zero = [
            ("block_interval_ms", self.block_interval_ms),
            ("block_frequency", self.block_frequency),
            ("producer_schedule_size", self.producer_schedule_size),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(InvalidConfiguration::ZeroValue { field });
            }
        }

        if self.decimals > MAX_DECIMALS {
            return Err(InvalidConfiguration::DecimalsOutOfRange {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }

        let block_interval = self
            .block_interval_ms
            .checked_mul(NANOS_PER_MILLI)
            .ok_or(InvalidConfiguration::IntervalOverflow {
                what: "block interval",
            })?;
        block_interval
            .checked_mul(self.block_frequency)
            .and_then(|turn| turn.checked_mul(self.producer_schedule_size))
            .ok_or(InvalidConfiguration::IntervalOverflow {
                what: "epoch interval",
            })?;

        Ok(())
    }
}

impl Default for DposParams {
    fn default() -> Self {
        Self::baseline()
    }
}
