//! Statistical and property checks on generated identifiers.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use seedid::adapters::live::{LiveClock, LiveRandom, LiveTimer};
use seedid::identifier::{matches_v4_shape, HYPHENS, LENGTH};
use seedid::ports::{Clock, HighResTimer, RandomSource};
use seedid::generate;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FixedTimer(f64);

impl HighResTimer for FixedTimer {
    fn elapsed_millis(&self) -> f64 {
        self.0
    }
}

/// Serves a pre-drawn sequence, wrapping around when exhausted.
struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: Mutex<usize>,
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 {
        let mut cursor = self.cursor.lock().unwrap();
        let value = self.draws[*cursor % self.draws.len()];
        *cursor += 1;
        value
    }
}

#[test]
fn ten_thousand_live_ids_are_unique_and_well_formed() {
    let timer = LiveTimer::new();
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let id = generate(&LiveRandom, &LiveClock, Some(&timer));
        assert!(matches_v4_shape(id.as_str()), "got {id}");
        assert!(seen.insert(id), "duplicate identifier");
    }
}

#[test]
fn ten_thousand_ids_without_timer_are_unique() {
    let ids: HashSet<_> = (0..10_000).map(|_| generate(&LiveRandom, &LiveClock, None)).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn free_digits_are_roughly_uniform() {
    const SAMPLES: usize = 20_000;
    let timer = LiveTimer::new();
    let mut counts = [0usize; 16];
    let mut total = 0usize;
    for _ in 0..SAMPLES {
        let id = generate(&LiveRandom, &LiveClock, Some(&timer));
        for (i, c) in id.as_str().char_indices() {
            // Skip hyphens and the fixed version/variant slots.
            if HYPHENS.contains(&i) || i == 14 || i == 19 {
                continue;
            }
            counts[c.to_digit(16).unwrap() as usize] += 1;
            total += 1;
        }
    }
    let expected = total / 16;
    for (digit, &count) in counts.iter().enumerate() {
        let deviation = count.abs_diff(expected) as f64 / expected as f64;
        assert!(deviation < 0.05, "digit {digit:x} seen {count} times, expected ~{expected}");
    }
}

#[test]
fn variant_digit_covers_all_four_values() {
    let variants: HashSet<char> = (0..2_000)
        .map(|_| generate(&LiveRandom, &LiveClock, None).as_str().as_bytes()[19] as char)
        .collect();
    assert_eq!(variants, HashSet::from(['8', '9', 'a', 'b']));
}

#[test]
fn shape_is_stable_across_calls() {
    let first = generate(&LiveRandom, &LiveClock, None);
    let second = generate(&LiveRandom, &LiveClock, None);
    assert_ne!(first, second);
    assert_eq!(first.as_str().len(), LENGTH);
    assert_eq!(second.as_str().len(), LENGTH);
    for i in HYPHENS {
        assert_eq!(first.as_str().as_bytes()[i], b'-');
        assert_eq!(second.as_str().as_bytes()[i], b'-');
    }
}

proptest! {
    #[test]
    fn any_seed_and_draws_yield_conforming_ids(
        millis in -62_135_596_800_000i64..253_402_300_799_000i64,
        timer in proptest::option::of(0.0f64..1.0e9),
        draws in proptest::collection::vec(0.0f64..1.0, 1..64),
    ) {
        let clock = FixedClock(Utc.timestamp_millis_opt(millis).unwrap());
        let random = ScriptedRandom { draws, cursor: Mutex::new(0) };
        let timer = timer.map(FixedTimer);
        let id = generate(&random, &clock, timer.as_ref().map(|t| t as &dyn HighResTimer));
        prop_assert!(matches_v4_shape(id.as_str()), "got {}", id);
    }

    #[test]
    fn same_inputs_give_same_id(
        millis in 0i64..4_102_444_800_000i64,
        r in 0.0f64..1.0,
    ) {
        let clock = FixedClock(Utc.timestamp_millis_opt(millis).unwrap());
        let a = generate(&ScriptedRandom { draws: vec![r], cursor: Mutex::new(0) }, &clock, None);
        let b = generate(&ScriptedRandom { draws: vec![r], cursor: Mutex::new(0) }, &clock, None);
        prop_assert_eq!(a, b);
    }
}
