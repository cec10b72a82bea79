//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the default TTL policy and the in-memory store
//! bounds.

use chrono::{NaiveTime, Timelike};
use proptest::prelude::*;

use crate::cache::ttl::{seconds_until_next_reset, RESET_HOUR};
use crate::cache::MemoryStore;

// == Strategies ==
fn time_of_day_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

fn valid_key_strategy() -> impl Strategy<Value = String> {
    "hero_[0-9]{1,4}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Adding the TTL to the current time always lands exactly on 04:00:00.
    #[test]
    fn prop_default_ttl_lands_on_reset_hour(now in time_of_day_strategy()) {
        let ttl = seconds_until_next_reset(&now);

        prop_assert!(ttl >= 1 && ttl <= 86_400);

        let expiry = (u64::from(now.num_seconds_from_midnight()) + ttl) % 86_400;
        prop_assert_eq!(expiry, u64::from(RESET_HOUR) * 3600);
    }

    // The TTL never spans more than one reset boundary.
    #[test]
    fn prop_default_ttl_is_next_not_later_boundary(now in time_of_day_strategy()) {
        let ttl = seconds_until_next_reset(&now);
        let elapsed = u64::from(now.num_seconds_from_midnight());
        let reset = u64::from(RESET_HOUR) * 3600;

        if elapsed < reset {
            prop_assert!(ttl <= reset);
        } else {
            prop_assert!(ttl > 86_400 - elapsed);
        }
    }

    // The in-memory store never exceeds its capacity.
    #[test]
    fn prop_store_respects_capacity(
        capacity in 1usize..20,
        keys in prop::collection::vec(valid_key_strategy(), 1..100),
    ) {
        let mut store = MemoryStore::new(capacity);

        for key in keys {
            store.set(key.clone(), "v".to_string(), 300).unwrap();
            prop_assert!(store.len() <= capacity);
            let got = store.get(&key);
            prop_assert_eq!(got.as_deref(), Some("v"));
        }
    }
}
