//! Node startup and administrative reload against real and nullable stores.

use std::sync::Arc;
use std::thread;

use dpos_consensus::{read_params, write_params, ActiveConfig, DposError, PersistenceError, DPOS_PARAMS_KEY};
use dpos_nullables::{NullClock, NullKvStore};
use dpos_store_lmdb::LmdbKvStore;
use dpos_types::{Amount, DposParams, Timestamp};

fn custom_params() -> DposParams {
    DposParams {
        unit_stake: "340282366920938463463374607431768211456".parse().unwrap(),
        block_interval_ms: 500,
        block_frequency: 12,
        producer_schedule_size: 21,
        system_url: "https://producers.example".to_string(),
        decimals: 8,
        ..DposParams::default()
    }
}

#[test]
fn lmdb_round_trip_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = LmdbKvStore::open(dir.path()).unwrap();
        write_params(&store, DPOS_PARAMS_KEY, &custom_params()).unwrap();
    }

    let store = LmdbKvStore::open(dir.path()).unwrap();
    assert_eq!(read_params(&store, DPOS_PARAMS_KEY).unwrap(), custom_params());

    let active = ActiveConfig::load(&store, DPOS_PARAMS_KEY).unwrap();
    let config = active.current();
    assert_eq!(config.consensus_safe_size(), 15);
    assert_eq!(config.block_reward_scaled(), &Amount::new(500_000_000));
}

#[test]
fn lmdb_missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LmdbKvStore::open(dir.path()).unwrap();
    assert!(matches!(
        read_params(&store, b"never_written"),
        Err(PersistenceError::NotFound { key }) if key == "never_written"
    ));
}

#[test]
fn startup_with_corrupt_record_is_fatal() {
    let store = NullKvStore::new();
    let mut bytes = custom_params().encode().unwrap();
    bytes.truncate(bytes.len() / 2);
    store.insert_raw(DPOS_PARAMS_KEY, bytes);

    let err = ActiveConfig::load(&store, DPOS_PARAMS_KEY).err().unwrap();
    assert!(matches!(err, DposError::Persistence(PersistenceError::Decode { .. })));
}

#[test]
fn producer_rotation_follows_the_clock() {
    let store = NullKvStore::new();
    let active = ActiveConfig::load_or_init(&store, DPOS_PARAMS_KEY, DposParams::default()).unwrap();
    let config = active.current();
    let clock = NullClock::new(Timestamp::EPOCH);

    // Default schedule: 3 producers, 6 blocks of 3s each per turn.
    let mut turns = Vec::new();
    for _ in 0..(3 * 6 * 2) {
        let slot = config.slot(clock.now());
        turns.push((config.epoch(slot), config.offset(slot)));
        clock.advance_millis(3000);
    }

    let expected: Vec<(u64, u64)> = (0..2u64)
        .flat_map(|epoch| (0..3u64).flat_map(move |offset| std::iter::repeat((epoch, offset)).take(6)))
        .collect();
    assert_eq!(turns, expected);
}

#[test]
fn readers_keep_a_consistent_snapshot_across_reload() {
    let store = Arc::new(NullKvStore::new());
    let active = Arc::new(ActiveConfig::load_or_init(&store, DPOS_PARAMS_KEY, DposParams::default()).unwrap());

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let active = Arc::clone(&active);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    let config = active.current();
                    let params = config.params();
                    // Derived values always match the record they came from.
                    assert_eq!(
                        config.epoch_interval(),
                        params.block_interval_ms * 1_000_000 * params.block_frequency * params.producer_schedule_size
                    );
                    assert_eq!(config.consensus_safe_size(), params.producer_schedule_size * 2 / 3 + 1);
                }
            })
        })
        .collect();

    for size in [4, 7, 10, 21] {
        active
            .persist_and_activate(&store, DPOS_PARAMS_KEY, DposParams {
                producer_schedule_size: size,
                ..DposParams::default()
            })
            .unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(active.current().params().producer_schedule_size, 21);
}
