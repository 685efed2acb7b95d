//! Property tests for the cipher invariants.

use caesarcrypt::{
    analyze, brute_force, build_mapping, decode, derive_shift, encode, ShiftValue,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_any_integer_shift(text in any::<String>(), shift in any::<i64>()) {
        prop_assert_eq!(decode(&encode(&text, shift), shift), text);
    }

    #[test]
    fn roundtrip_fractional_shift(text in "[ -~]{0,64}", shift in -100.0f64..100.0) {
        prop_assert_eq!(decode(&encode(&text, shift), shift), text);
    }

    #[test]
    fn identity_shift(text in any::<String>()) {
        prop_assert_eq!(encode(&text, 0), text);
    }

    #[test]
    fn period_26_for_non_negative(text in "[ -~]{0,64}", shift in 0i64..10_000) {
        let base = encode(&text, shift);
        prop_assert_eq!(&encode(&text, shift + 26), &base);
        if shift >= 26 {
            prop_assert_eq!(&encode(&text, shift - 26), &base);
        }
    }

    #[test]
    fn negative_shift_is_identity(text in any::<String>(), shift in i64::MIN..0) {
        prop_assert_eq!(encode(&text, shift), text);
    }

    #[test]
    fn non_letters_untouched(text in "[^A-Za-z]{0,64}", shift in 0u8..26) {
        prop_assert_eq!(encode(&text, shift), text);
    }

    #[test]
    fn preserves_char_count_and_case(text in "[A-Za-z0-9 ]{0,64}", shift in 0u8..26) {
        let out = encode(&text, shift);
        prop_assert_eq!(out.chars().count(), text.chars().count());
        for (a, b) in text.chars().zip(out.chars()) {
            prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            prop_assert_eq!(a.is_ascii_lowercase(), b.is_ascii_lowercase());
        }
    }

    #[test]
    fn derived_shift_in_range_and_stable(passphrase in any::<String>()) {
        let first = derive_shift(&passphrase);
        prop_assert!(first.get() <= 25);
        prop_assert_eq!(first, derive_shift(&passphrase));
    }

    #[test]
    fn mapping_has_52_same_case_letters(shift in 0i64..26) {
        let mapping = build_mapping(shift);
        prop_assert_eq!(mapping.len(), 52);
        for (plain, cipher) in mapping.iter() {
            prop_assert!(cipher.is_ascii_alphabetic());
            prop_assert_eq!(plain.is_ascii_uppercase(), cipher.is_ascii_uppercase());
        }
    }

    #[test]
    fn brute_force_recovers_plaintext(text in "[A-Za-z ]{1,80}", shift in 0u8..26) {
        let candidates = brute_force(&encode(&text, shift));
        prop_assert_eq!(candidates.len(), 26);
        let shifts: Vec<u8> = candidates.iter().map(|c| c.shift.get()).collect();
        prop_assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
        prop_assert_eq!(&candidates[usize::from(shift)].text, &text);
    }

    #[test]
    fn analysis_classes_never_exceed_total(text in any::<String>()) {
        let stats = analyze(&text);
        prop_assert!(
            stats.letters + stats.spaces + stats.numbers + stats.punctuation <= stats.total_chars
        );
    }

    #[test]
    fn shift_value_inverse_cancels(shift in 0u8..26) {
        let value = ShiftValue::new(shift).unwrap();
        prop_assert_eq!((value.get() + value.inverse().get()) % 26, 0);
    }
}
