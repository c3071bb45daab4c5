//! Property-based tests for phone normalization and chat-list ordering

use chrono::DateTime;
use proptest::prelude::*;

use onechat::shared::messaging::contact::{normalize_phone, PHONE_SUFFIX_DIGITS};
use onechat::shared::messaging::conversation::sort_newest_first;
use onechat::shared::ChatSummary;

fn summary(user_id: i64, micros: i64) -> ChatSummary {
    ChatSummary {
        user_id,
        name: format!("user{user_id}"),
        phone: None,
        last_message: String::new(),
        last_time: DateTime::from_timestamp_micros(micros).unwrap_or_default(),
        unread_count: 0,
    }
}

proptest! {
    #[test]
    fn prop_normalized_phone_is_digit_suffix(phone in ".{0,40}") {
        let normalized = normalize_phone(&phone);
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        prop_assert!(normalized.len() <= PHONE_SUFFIX_DIGITS);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(digits.ends_with(&normalized));
        prop_assert_eq!(normalized.len(), digits.len().min(PHONE_SUFFIX_DIGITS));
    }

    #[test]
    fn prop_normalization_ignores_formatting(digits in "[0-9]{1,15}", sep in "[ ()+.-]{0,3}") {
        let formatted: String = digits
            .chars()
            .flat_map(|c| std::iter::once(c).chain(sep.chars()))
            .collect();
        prop_assert_eq!(normalize_phone(&formatted), normalize_phone(&digits));
    }

    #[test]
    fn prop_normalization_is_idempotent(phone in "[0-9 +()-]{0,25}") {
        let once = normalize_phone(&phone);
        prop_assert_eq!(normalize_phone(&once), once);
    }

    #[test]
    fn prop_chat_list_sorted_newest_first(times in prop::collection::vec(0i64..4_000_000_000_000_000, 0..30)) {
        let mut chats: Vec<ChatSummary> = times
            .iter()
            .enumerate()
            .map(|(i, &t)| summary(i as i64 + 1, t))
            .collect();
        sort_newest_first(&mut chats);

        prop_assert_eq!(chats.len(), times.len());
        for pair in chats.windows(2) {
            prop_assert!(pair[0].last_time >= pair[1].last_time);
        }
    }
}

#[test]
fn test_short_numbers_keep_all_digits() {
    assert_eq!(normalize_phone("555-1234"), "5551234");
    assert_eq!(normalize_phone("no digits"), "");
}
