//! Derived schedule values — scaled amounts, nanosecond intervals, quorum size.
//!
//! A [`DposConfig`] pairs a validated [`DposParams`] with a cache of values
//! computed from it on first use. The record is immutable once wrapped, so
//! each derived value is a pure function of fixed inputs. Every cache slot is
//! a [`OnceLock`]: the first reader to get there computes and commits, and
//! every later reader on any thread sees that one committed value, never a
//! partially written `BigUint`.
//!
//! Replacing the parameters means building a new `DposConfig`; a cache is
//! never carried from one record to another.

use std::sync::OnceLock;

use dpos_types::time::NANOS_PER_MILLI;
use dpos_types::{Amount, DposParams, InvalidConfiguration};
use num_bigint::BigUint;

/// A validated parameter record plus its lazily derived schedule values.
#[derive(Debug)]
pub struct DposConfig {
    params: DposParams,
    cache: ScheduleCache,
}

#[derive(Debug, Default)]
struct ScheduleCache {
    decimals_multiplier: OnceLock<BigUint>,
    unit_stake: OnceLock<Amount>,
    block_reward: OnceLock<Amount>,
    extra_block_reward: OnceLock<Amount>,
    block_interval: OnceLock<u64>,
    epoch_interval: OnceLock<u64>,
    safe_size: OnceLock<u64>,
}

impl DposConfig {
    /// Validate `params` and wrap them with an empty cache.
    ///
    /// This is the activation boundary: a zero block interval, block
    /// frequency or schedule size is rejected here, which keeps every
    /// division in the timing arithmetic well defined.
    pub fn new(params: DposParams) -> Result<Self, InvalidConfiguration> {
        params.validate()?;
        Ok(Self {
            params,
            cache: ScheduleCache::default(),
        })
    }

    /// The raw record, read-only.
    pub fn params(&self) -> &DposParams {
        &self.params
    }

    /// `10^decimals`.
    pub fn decimals_multiplier(&self) -> &BigUint {
        self.cache.decimals_multiplier.get_or_init(|| {
            // validate() bounds decimals by MAX_DECIMALS, well inside u32.
            BigUint::from(10u32).pow(self.params.decimals as u32)
        })
    }

    /// Stake unit in base units.
    pub fn unit_stake_scaled(&self) -> &Amount {
        self.cache
            .unit_stake
            .get_or_init(|| self.params.unit_stake.scaled(self.decimals_multiplier()))
    }

    /// Per-block producer reward in base units.
    pub fn block_reward_scaled(&self) -> &Amount {
        self.cache
            .block_reward
            .get_or_init(|| self.params.block_reward.scaled(self.decimals_multiplier()))
    }

    /// Additional reward in base units.
    pub fn extra_block_reward_scaled(&self) -> &Amount {
        self.cache.extra_block_reward.get_or_init(|| {
            self.params
                .extra_block_reward
                .scaled(self.decimals_multiplier())
        })
    }

    /// Block interval in nanoseconds.
    pub fn block_interval(&self) -> u64 {
        *self
            .cache
            .block_interval
            .get_or_init(|| self.params.block_interval_ms * NANOS_PER_MILLI)
    }

    /// One full rotation of the producer schedule, in nanoseconds.
    pub fn epoch_interval(&self) -> u64 {
        *self.cache.epoch_interval.get_or_init(|| {
            self.block_interval() * self.params.block_frequency * self.params.producer_schedule_size
        })
    }

    /// Minimum number of matching producer observations for finality:
    /// `floor(2N / 3) + 1` for a schedule of `N` producers.
    pub fn consensus_safe_size(&self) -> u64 {
        *self
            .cache
            .safe_size
            .get_or_init(|| self.params.producer_schedule_size * 2 / 3 + 1)
    }

    /// Number of faulty producers the schedule tolerates: `floor((N - 1) / 3)`.
    pub fn max_faulty_producers(&self) -> u64 {
        (self.params.producer_schedule_size - 1) / 3
    }

    /// Whether `matching` agreeing observations reach the safe quorum.
    pub fn has_quorum(&self, matching: u64) -> bool {
        matching >= self.consensus_safe_size()
    }
}
