//! Property-based tests for counter encoding and signal routing.

#![cfg(test)]

use alim6117_protocol::{
    COUNTER_PERIOD_TICKS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, TimeoutSignal, counter_ticks,
    decode_counter, encode_counter, select_signal,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_decode_inverts_encode_across_the_timeout_range(
        seconds in MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS,
    ) {
        let ticks = counter_ticks(seconds);
        prop_assert_eq!(decode_counter(encode_counter(seconds)), ticks);
    }

    #[test]
    fn prop_encoded_bytes_match_shift_and_mask(
        seconds in MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS,
    ) {
        let ticks = counter_ticks(seconds);
        let [high, mid, low] = encode_counter(seconds);
        prop_assert_eq!(u32::from(high), (ticks >> 16) & 0xff);
        prop_assert_eq!(u32::from(mid), (ticks >> 8) & 0xff);
        prop_assert_eq!(u32::from(low), ticks & 0xff);
    }

    #[test]
    fn prop_encode_is_modular_in_the_counter_period(
        seconds in any::<u32>(),
    ) {
        prop_assert_eq!(encode_counter(seconds), encode_counter(seconds % 512));
    }

    #[test]
    fn prop_decode_always_lands_in_one_full_period(
        bytes in any::<[u8; 3]>(),
    ) {
        let ticks = decode_counter(bytes);
        prop_assert!(ticks >= 1);
        prop_assert!(ticks <= COUNTER_PERIOD_TICKS);
    }

    #[test]
    fn prop_signal_selection_is_idempotent(
        current in any::<u8>(),
        signal in prop::sample::select(TimeoutSignal::ALL.to_vec()),
    ) {
        let once = select_signal(current, signal);
        prop_assert_eq!(select_signal(once, signal), once);
    }

    #[test]
    fn prop_selected_register_parses_back_to_the_signal(
        signal in prop::sample::select(TimeoutSignal::ALL.to_vec()),
    ) {
        let written = select_signal(0x00, signal);
        prop_assert_eq!(TimeoutSignal::from_raw_bits(written), Some(signal));
    }

    #[test]
    fn prop_low_nibble_noise_never_parses(
        bits in any::<u8>(),
    ) {
        prop_assume!(bits & 0x0f != 0);
        prop_assert_eq!(TimeoutSignal::from_raw_bits(bits), None);
    }
}
