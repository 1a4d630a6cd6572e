//! Base-strength string comparison for Dutch display ordering.
//!
//! Backed by the ICU4X collator with the `nl` locale at primary strength:
//! case and accents are ignored (`"Zaag"` sorts after `"accu"`, `"één"`
//! equals `"een"`), and punctuation, digits and letters follow CLDR order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use tracing::warn;

fn dutch_primary() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(&locale!("nl").into(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Dutch collator unavailable, falling back to lowercase order: {}", e);
            None
        }
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = dutch_primary();
}

/// Compare two strings ignoring case and diacritics.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_does_not_affect_order() {
        assert_eq!(compare_base("accu", "Zaag"), Ordering::Less);
        assert_eq!(compare_base("Zaag", "accu"), Ordering::Greater);
        assert_eq!(compare_base("ZAAG", "zaag"), Ordering::Equal);
    }

    #[test]
    fn diacritics_are_ignored() {
        assert_eq!(compare_base("één", "een"), Ordering::Equal);
        assert_eq!(compare_base("ölie", "Olie"), Ordering::Equal);
        assert_eq!(compare_base("Übel", "uur"), Ordering::Less);
        assert_eq!(compare_base("café", "cafe"), Ordering::Equal);
    }

    #[test]
    fn stroke_letters_sort_with_their_base_letter() {
        assert_eq!(compare_base("ølie", "pan"), Ordering::Less);
        assert_eq!(compare_base("Łat", "Mes"), Ordering::Less);
        assert_eq!(compare_base("æsthetic", "bank"), Ordering::Less);
    }

    #[test]
    fn ligatures_and_sharp_s_fold() {
        assert_eq!(compare_base("ĳzerzaag", "ijzerzaag"), Ordering::Equal);
        assert_eq!(compare_base("Straße", "strasse"), Ordering::Equal);
    }

    #[test]
    fn punctuation_follows_collation_order() {
        assert_eq!(compare_base("Zaag, klein", "Zaag-blad"), Ordering::Greater);
        assert_eq!(compare_base("a_b", "a-b"), Ordering::Less);
        assert_eq!(compare_base("&tape", "$tape"), Ordering::Less);
    }

    #[test]
    fn punctuation_before_digits_before_letters() {
        assert_eq!(compare_base("-zaag", "1zaag"), Ordering::Less);
        assert_eq!(compare_base("2e hamer", "hamer"), Ordering::Less);
        assert_eq!(compare_base("zaag 2", "zaagblad"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_base("boor", "boormachine"), Ordering::Less);
    }
}
