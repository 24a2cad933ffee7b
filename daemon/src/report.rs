//! Plain-text reports printed by the CLI.

use std::fmt::Write;

use dpos_consensus::DposConfig;
use dpos_types::Timestamp;
use dpos_utils::format_interval;

/// Derived schedule values for a configuration.
pub fn schedule_summary(config: &DposConfig) -> String {
    let params = config.params();
    let mut out = String::new();
    let _ = writeln!(out, "# derived schedule");
    let _ = writeln!(out, "block_interval      = {}", format_interval(config.block_interval()));
    let _ = writeln!(
        out,
        "producer_turn       = {} ({} blocks)",
        format_interval(config.block_interval() * params.block_frequency),
        params.block_frequency
    );
    let _ = writeln!(out, "epoch_interval      = {}", format_interval(config.epoch_interval()));
    let _ = writeln!(
        out,
        "consensus_safe_size = {} of {} (tolerates {} faulty)",
        config.consensus_safe_size(),
        params.producer_schedule_size,
        config.max_faulty_producers()
    );
    let _ = writeln!(out, "unit_stake_scaled   = {}", config.unit_stake_scaled());
    let _ = writeln!(out, "block_reward_scaled = {}", config.block_reward_scaled());
    let _ = writeln!(out, "extra_reward_scaled = {}", config.extra_block_reward_scaled());
    out
}

/// Slot, epoch and producer position for one timestamp.
pub fn timing_report(config: &DposConfig, at: Timestamp) -> String {
    let epoch = config.epoch(at);
    let mut out = String::new();
    let _ = writeln!(out, "timestamp_ms = {}", at.as_millis());
    let _ = writeln!(out, "slot_ms      = {}", config.slot(at).as_millis());
    let _ = writeln!(out, "next_slot_ms = {}", config.next_slot(at).as_millis());
    let _ = writeln!(out, "epoch        = {}", epoch);
    let _ = writeln!(out, "epoch_start  = {}", config.epoch_start(epoch).as_millis());
    let _ = writeln!(out, "offset       = {}", config.offset(at));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpos_types::DposParams;

    #[test]
    fn summary_for_defaults() {
        let config = DposConfig::new(DposParams::default()).unwrap();
        let summary = schedule_summary(&config);
        assert!(summary.contains("epoch_interval      = 54s"));
        assert!(summary.contains("producer_turn       = 18s (6 blocks)"));
        assert!(summary.contains("consensus_safe_size = 3 of 3 (tolerates 0 faulty)"));
        assert!(summary.contains("block_reward_scaled = 5000000000000000000"));
    }

    #[test]
    fn timing_for_second_producer_turn() {
        let config = DposConfig::new(DposParams::default()).unwrap();
        let report = timing_report(&config, Timestamp::from_millis(20_800));
        assert!(report.contains("slot_ms      = 21000"));
        assert!(report.contains("next_slot_ms = 24000"));
        assert!(report.contains("epoch        = 0"));
        assert!(report.contains("offset       = 1"));
    }
}
