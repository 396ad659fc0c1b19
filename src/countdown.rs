use crate::holidays::{self, HOLIDAYS};
use chrono::{Months, NaiveDate};

/// Days until the next new year, taken once for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub today: NaiveDate,
    pub target: NaiveDate,
    pub days_left: i64,
    /// False when `target` was extrapolated past the end of the table.
    pub from_table: bool,
}

impl Countdown {
    pub fn at(today: NaiveDate) -> Self {
        let (target, from_table) = match table_holiday(today) {
            Some(date) => (date, true),
            None => (fallback_holiday(), false),
        };

        Self {
            today,
            target,
            days_left: days_between(today, target),
            from_table,
        }
    }

    pub fn is_today(&self) -> bool {
        self.days_left == 0
    }
}

/// First holiday on or after `today`.
///
/// Past the end of the table this returns the last entry moved forward one
/// year with the same month and day. That is an approximation, not the real
/// lunar date.
pub fn next_holiday(today: NaiveDate) -> NaiveDate {
    table_holiday(today).unwrap_or_else(fallback_holiday)
}

/// Signed count of calendar days from `a` to `b`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

fn table_holiday(today: NaiveDate) -> Option<NaiveDate> {
    HOLIDAYS
        .iter()
        .map(|entry| entry.to_date())
        .find(|date| *date >= today)
}

/// Extrapolated date used once `today` is past every table entry.
pub fn fallback_holiday() -> NaiveDate {
    let last = holidays::last().to_date();
    last.checked_add_months(Months::new(12)).unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_table_returns_first_entry() {
        assert_eq!(next_holiday(date(2024, 3, 1)), date(2025, 1, 29));
        assert_eq!(next_holiday(date(1999, 12, 31)), date(2025, 1, 29));
    }

    #[test]
    fn holiday_itself_is_inclusive() {
        for entry in HOLIDAYS {
            assert_eq!(next_holiday(entry.to_date()), entry.to_date());
        }
    }

    #[test]
    fn day_after_holiday_moves_to_next_year() {
        assert_eq!(next_holiday(date(2025, 1, 30)), date(2026, 2, 17));
    }

    #[test]
    fn past_table_falls_back_one_year_after_last() {
        let countdown = Countdown::at(date(2036, 6, 1));
        assert_eq!(countdown.target, date(2037, 1, 28));
        assert!(!countdown.from_table);
        assert_eq!(countdown.days_left, 241);
        assert_eq!(next_holiday(date(2040, 1, 1)), date(2037, 1, 28));
    }

    #[test]
    fn new_year_day_2025() {
        let countdown = Countdown::at(date(2025, 1, 1));
        assert_eq!(countdown.target, date(2025, 1, 29));
        assert_eq!(countdown.days_left, 28);
        assert!(countdown.from_table);
        assert!(!countdown.is_today());
    }

    #[test]
    fn on_the_day_counts_zero() {
        let countdown = Countdown::at(date(2025, 1, 29));
        assert_eq!(countdown.days_left, 0);
        assert!(countdown.is_today());
    }

    #[test]
    fn days_between_is_zero_on_same_day_and_antisymmetric() {
        let pairs = [
            (date(2025, 1, 1), date(2025, 1, 29)),
            (date(2024, 3, 9), date(2024, 3, 11)),
            (date(2024, 10, 26), date(2024, 11, 4)),
            (date(2030, 2, 3), date(2028, 2, 29)),
        ];
        for (a, b) in pairs {
            assert_eq!(days_between(a, a), 0);
            assert_eq!(days_between(a, b), -days_between(b, a));
        }
    }

    #[test]
    fn days_between_spans_dst_change_exactly() {
        assert_eq!(days_between(date(2024, 3, 9), date(2024, 3, 11)), 2);
        assert_eq!(days_between(date(2024, 10, 26), date(2024, 10, 28)), 2);
    }
}
