use proptest::prelude::*;

use dpos_types::{Amount, DposParams, Timestamp};

fn amount() -> impl Strategy<Value = Amount> {
    prop::collection::vec(any::<u8>(), 0..40).prop_map(|bytes| Amount::from_bytes_be(&bytes))
}

fn params() -> impl Strategy<Value = DposParams> {
    (
        (any::<u64>(), amount(), amount(), amount(), amount()),
        (any::<u64>(), any::<u64>(), any::<u64>(), any::<u64>()),
        ("[a-z0-9]{0,12}", "[a-z0-9]{0,12}", "\\PC{0,40}"),
        (amount(), amount(), any::<u64>()),
    )
        .prop_map(
            |(
                (max_url_len, unit_stake, producer_min_quantity, voter_min_quantity, activated_min_quantity),
                (block_interval_ms, block_frequency, producer_schedule_size, delay_echo),
                (account_name, system_name, system_url),
                (extra_block_reward, block_reward, decimals),
            )| DposParams {
                max_url_len,
                unit_stake,
                producer_min_quantity,
                voter_min_quantity,
                activated_min_quantity,
                block_interval_ms,
                block_frequency,
                producer_schedule_size,
                delay_echo,
                account_name,
                system_name,
                system_url,
                extra_block_reward,
                block_reward,
                decimals,
            },
        )
}

proptest! {
    /// Every raw field survives encode -> decode, including records that
    /// would fail validation.
    #[test]
    fn params_codec_roundtrip(params in params()) {
        let bytes = params.encode().unwrap();
        let decoded = DposParams::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, params);
    }

    /// Dropping any suffix of a valid encoding is a decode error, never a
    /// silently shorter record.
    #[test]
    fn truncated_encoding_never_decodes(params in params(), cut in 1usize..64) {
        let bytes = params.encode().unwrap();
        let keep = bytes.len().saturating_sub(cut);
        prop_assert!(DposParams::decode(&bytes[..keep]).is_err());
    }

    /// Amount bytes: to_bytes_be -> from_bytes_be is the identity.
    #[test]
    fn amount_bytes_roundtrip(amount in amount()) {
        prop_assert_eq!(Amount::from_bytes_be(&amount.to_bytes_be()), amount);
    }

    /// Timestamp ordering matches the underlying nanoseconds.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        let ta = Timestamp::from_nanos(a);
        let tb = Timestamp::from_nanos(b);
        prop_assert_eq!(ta <= tb, a <= b);
    }
}
