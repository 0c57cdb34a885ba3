//! Behaviour of `RecurrenceIterator` across rules, bounds and reconfiguration.
//!
//! Covers:
//! - Laziness and caching
//! - Count, until and max-occurrence bounds, including changes mid-iteration
//! - Skipped dates
//! - Backwards iteration
//! - Error propagation

use jiff::civil::{date, DateTime};
use recurrence::{
    DailyInterval, Direction, EndCondition, HourlyInterval, MonthlyInterval, RecurrenceIterator,
    WeeklyInterval, Weekday,
};

fn midnight(y: i16, m: i8, d: i8) -> DateTime {
    date(y, m, d).at(0, 0, 0, 0)
}

fn daily(start: DateTime, end: impl Into<EndCondition>) -> RecurrenceIterator {
    RecurrenceIterator::new(start, DailyInterval::new(1).unwrap(), end).unwrap()
}

// =============================================================================
// Basic sequences
// =============================================================================

#[test]
fn ten_daily_occurrences() {
    let mut it = daily(midnight(2012, 10, 10), 10u32);
    let all = it.to_vec().unwrap();
    let expected: Vec<DateTime> = (11..=20).map(|d| midnight(2012, 10, d)).collect();
    assert_eq!(all, expected);
}

#[test]
fn count_before_iteration_matches_iteration() {
    let mut it = daily(midnight(2012, 10, 10), 10u32);
    assert_eq!(it.count().unwrap(), 10);
    assert_eq!(it.produced_count(), 10);

    let all = it.to_vec().unwrap();
    assert_eq!(all.len(), 10);
    assert_eq!(all.as_slice(), it.occurrences().as_slice());
    // Replaying the cache generates nothing new.
    assert_eq!(it.produced_count(), 10);
}

#[test]
fn start_is_never_an_occurrence() {
    let start = midnight(2012, 10, 10);
    let mut it = daily(start, 5u32);
    assert!(it.to_vec().unwrap().iter().all(|&d| d != start));
}

#[test]
fn weekly_sequence() {
    let rule = WeeklyInterval::every(Weekday::Monday).and_every(Weekday::Thursday);
    let mut it = RecurrenceIterator::new(date(2012, 4, 19).at(12, 0, 0, 0), rule, 4u32).unwrap();
    let dates: Vec<_> = it.iter().map(|d| d.unwrap().date()).collect();
    assert_eq!(
        dates,
        vec![date(2012, 4, 23), date(2012, 4, 26), date(2012, 4, 30), date(2012, 5, 3)]
    );
}

#[test]
fn monthly_sequence_keeps_day_of_month() {
    let mut it =
        RecurrenceIterator::new(midnight(2012, 1, 30), MonthlyInterval::every_month(), 3u32)
            .unwrap();
    assert_eq!(
        it.to_vec().unwrap(),
        vec![midnight(2012, 2, 29), midnight(2012, 3, 30), midnight(2012, 4, 30)]
    );
}

#[test]
fn hourly_until_is_inclusive() {
    let until = date(2012, 10, 10).at(6, 0, 0, 0);
    let mut it = RecurrenceIterator::new(
        midnight(2012, 10, 10),
        HourlyInterval::new(1.5).unwrap(),
        until,
    )
    .unwrap();
    let times: Vec<_> = it.iter().map(|d| d.unwrap().time()).collect();
    assert_eq!(times.len(), 4);
    assert_eq!(times.last().map(|t| (t.hour(), t.minute())), Some((6, 0)));
}

#[test]
fn accepts_string_and_epoch_inputs() {
    let mut it = RecurrenceIterator::new(
        "2012-12-12",
        DailyInterval::new(1).unwrap(),
        EndCondition::until(1_355_529_600i64).unwrap(),
    )
    .unwrap();
    assert_eq!(it.start(), midnight(2012, 12, 12));
    // 1_355_529_600 is 2012-12-15 00:00 UTC.
    assert_eq!(it.count().unwrap(), 3);
}

// =============================================================================
// Laziness and cursor
// =============================================================================

#[test]
fn iteration_is_lazy() {
    let mut it = daily(midnight(2012, 10, 10), 100u32);
    let first: Vec<_> = it.iter().take(3).collect::<Result<_, _>>().unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(it.produced_count(), 3);
}

#[test]
fn iteration_moves_the_cursor() {
    let mut it = daily(midnight(2012, 10, 10), 5u32);
    let _ = it.iter().take(2).count();
    assert_eq!(it.key(), Some(1));
    assert_eq!(it.current(), Some(midnight(2012, 10, 12)));
}

#[test]
fn cursor_walk_stops_at_bound() {
    let mut it = daily(midnight(2012, 10, 10), 3u32);
    let mut seen = Vec::new();
    it.rewind().unwrap();
    while it.valid() {
        seen.push(it.current().unwrap());
        it.advance().unwrap();
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(it.key(), Some(3));
}

#[test]
fn get_past_bound_is_none() {
    let mut it = daily(midnight(2012, 10, 10), 3u32);
    assert_eq!(it.get(2).unwrap(), Some(midnight(2012, 10, 13)));
    assert_eq!(it.get(3).unwrap(), None);
    assert_eq!(it.occurrences().len(), 3);
}

// =============================================================================
// Skipping
// =============================================================================

#[test]
fn skipped_dates_are_left_out() {
    let start = date(2014, 6, 12).at(12, 3, 30, 0);
    let mut it = daily(start, 6u32);
    it.skip([date(2014, 6, 14).at(12, 3, 30, 0)]).unwrap();

    let days: Vec<i8> = it.iter().map(|d| d.unwrap().day()).collect();
    assert_eq!(days, vec![13, 15, 16, 17, 18, 19]);
}

#[test]
fn skip_accepts_strings_and_timestamps() {
    let mut it = daily(midnight(2012, 12, 10), 3u32);
    it.skip(["2012-12-11T00:00:00"]).unwrap();
    it.skip([1_355_270_400i64]).unwrap();
    let skipped: Vec<_> = it.skipped().collect();
    assert_eq!(skipped, vec![midnight(2012, 12, 11), midnight(2012, 12, 12)]);
    assert_eq!(
        it.to_vec().unwrap(),
        vec![midnight(2012, 12, 13), midnight(2012, 12, 14), midnight(2012, 12, 15)]
    );
}

#[test]
fn skipping_everything_before_until_yields_nothing() {
    let mut it = daily(midnight(2012, 10, 10), midnight(2012, 10, 12));
    it.skip([midnight(2012, 10, 11), midnight(2012, 10, 12)]).unwrap();
    assert_eq!(it.count().unwrap(), 0);
    assert_eq!(it.get(0).unwrap(), None);
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn raising_count_resumes_generation() {
    let mut it = daily(midnight(2012, 10, 10), 9u32);
    let first = it.to_vec().unwrap();
    assert_eq!(first.len(), 9);

    it.set_end_condition(25u32).unwrap();
    let all = it.to_vec().unwrap();
    assert_eq!(all.len(), 25);
    assert_eq!(&all[..9], first.as_slice());
    assert_eq!(all[24], midnight(2012, 11, 4));
}

#[test]
fn lowering_then_raising_max_occurrences() {
    let mut it = daily(midnight(2012, 10, 10), 20u32);
    assert_eq!(it.count().unwrap(), 20);

    it.set_max_occurrences(10).unwrap();
    assert_eq!(it.count().unwrap(), 10);
    assert_eq!(it.get(15).unwrap(), None);
    assert_eq!(it.to_vec().unwrap().len(), 10);

    it.set_max_occurrences(100).unwrap();
    assert_eq!(it.count().unwrap(), 20);
    assert_eq!(it.get(15).unwrap(), Some(midnight(2012, 10, 26)));
    // The cached tail was reused, not regenerated.
    assert_eq!(it.produced_count(), 20);
}

#[test]
fn lowering_max_invalidates_cursor_beyond_it() {
    let mut it = daily(midnight(2012, 10, 10), 20u32);
    for _ in 0..15 {
        it.advance().unwrap();
    }
    assert!(it.valid());
    it.set_max_occurrences(10).unwrap();
    assert!(!it.valid());
    assert_eq!(it.current(), None);
}

#[test]
fn count_outside_range_is_rejected() {
    let rule = DailyInterval::new(1).unwrap();
    let start = midnight(2012, 10, 10);
    for count in [0u32, 101] {
        let err = RecurrenceIterator::new(start, rule, count).unwrap_err();
        assert!(err.is_invalid_argument(), "{count}");
    }

    let mut it = daily(start, 10u32);
    it.set_max_occurrences(200).unwrap();
    it.set_end_condition(150u32).unwrap();
    assert_eq!(it.count().unwrap(), 150);
    assert!(it.set_max_occurrences(0).is_err());
}

#[test]
fn until_must_follow_start() {
    let start = midnight(2012, 10, 10);
    let rule = DailyInterval::new(1).unwrap();
    for until in ["2012-10-01", "2012-10-10"] {
        let end = EndCondition::until(until).unwrap();
        let err = RecurrenceIterator::new(start, rule, end).unwrap_err();
        assert!(err.is_invalid_argument(), "{until}");
    }
}

#[test]
fn moving_start_past_until_is_rejected() {
    let mut it = daily(midnight(2012, 10, 10), midnight(2012, 12, 1));
    assert!(it.set_start("2013-01-01").is_err());
    assert_eq!(it.start(), midnight(2012, 10, 10));
}

#[test]
fn invalid_until_string_is_rejected() {
    assert!(EndCondition::until("not a date").unwrap_err().is_invalid_argument());
}

// =============================================================================
// Reconfiguration
// =============================================================================

#[test]
fn moving_start_clears_cache() {
    let mut it = daily(midnight(2012, 10, 10), 5u32);
    it.count().unwrap();
    it.set_start("2013-01-01").unwrap();
    assert_eq!(it.produced_count(), 0);
    assert_eq!(it.get(0).unwrap(), Some(midnight(2013, 1, 2)));
}

#[test]
fn moving_start_repins_monthly_day() {
    let mut it =
        RecurrenceIterator::new(midnight(2012, 1, 30), MonthlyInterval::every_month(), 3u32)
            .unwrap();
    assert_eq!(it.get(0).unwrap(), Some(midnight(2012, 2, 29)));
    assert_eq!(it.rule().to_string(), "day 30 of every month");

    it.set_start("2013-01-15").unwrap();
    assert_eq!(it.rule().to_string(), "every month");
    assert_eq!(
        it.to_vec().unwrap(),
        vec![midnight(2013, 2, 15), midnight(2013, 3, 15), midnight(2013, 4, 15)]
    );
}

#[test]
fn reset_repins_monthly_day() {
    let mut it =
        RecurrenceIterator::new(midnight(2012, 1, 31), MonthlyInterval::every_month(), 2u32)
            .unwrap();
    it.count().unwrap();
    it.reset();
    assert_eq!(
        it.to_vec().unwrap(),
        vec![midnight(2012, 2, 29), midnight(2012, 3, 31)]
    );
}

#[test]
fn swapping_rule_mid_iteration() {
    let mut it = daily(midnight(2012, 10, 10), 5u32);
    assert_eq!(it.get(1).unwrap(), Some(midnight(2012, 10, 12)));

    it.set_rule(DailyInterval::new(7).unwrap()).unwrap();
    assert_eq!(
        it.to_vec().unwrap(),
        vec![
            midnight(2012, 10, 11),
            midnight(2012, 10, 12),
            midnight(2012, 10, 19),
            midnight(2012, 10, 26),
            midnight(2012, 11, 2),
        ]
    );
}

#[test]
fn invalid_rule_is_rejected_without_change() {
    let mut it = daily(midnight(2012, 10, 10), 5u32);
    let mut monthly = MonthlyInterval::every_month();
    monthly.set_days(Weekday::Monday);
    assert!(it.set_rule(monthly).unwrap_err().is_invalid_argument());
    assert_eq!(it.rule().to_string(), "every day");
}

// =============================================================================
// Backwards
// =============================================================================

#[test]
fn backwards_count() {
    let mut it = RecurrenceIterator::with_direction(
        midnight(2012, 10, 10),
        DailyInterval::new(1).unwrap(),
        3u32,
        Direction::Backwards,
    )
    .unwrap();
    assert_eq!(
        it.to_vec().unwrap(),
        vec![midnight(2012, 10, 9), midnight(2012, 10, 8), midnight(2012, 10, 7)]
    );
}

#[test]
fn backwards_until() {
    let mut it = RecurrenceIterator::with_direction(
        midnight(2012, 10, 10),
        DailyInterval::new(1).unwrap(),
        midnight(2012, 10, 5),
        Direction::Backwards,
    )
    .unwrap();
    let all = it.to_vec().unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all.last(), Some(&midnight(2012, 10, 5)));
}

#[test]
fn direction_change_revalidates_until() {
    let mut it = daily(midnight(2012, 10, 10), midnight(2012, 10, 20));
    let err = it.set_direction(Direction::Backwards).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(it.direction(), Direction::Forwards);
}

#[test]
fn backwards_monthly_last_friday() {
    let rule = MonthlyInterval::every(recurrence::Ordinal::Last, Weekday::Friday);
    let mut it = RecurrenceIterator::with_direction(
        date(2012, 7, 1).at(9, 0, 0, 0),
        rule,
        3u32,
        Direction::Backwards,
    )
    .unwrap();
    let dates: Vec<_> = it.iter().map(|d| d.unwrap().date()).collect();
    assert_eq!(dates, vec![date(2012, 6, 29), date(2012, 5, 25), date(2012, 4, 27)]);
}

// =============================================================================
// Error propagation
// =============================================================================

#[test]
fn calendar_overflow_surfaces_once() {
    let mut it = daily(midnight(9999, 12, 30), 5u32);
    let mut iter = it.iter();
    assert_eq!(iter.next().unwrap().unwrap(), midnight(9999, 12, 31));
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}
