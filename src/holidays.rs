use chrono::NaiveDate;

/// A Chinese New Year date on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HolidayDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HolidayDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Known new year dates, one per year, ascending. Extend when the range runs out.
pub const HOLIDAYS: [HolidayDate; 12] = [
    HolidayDate::new(2025, 1, 29),
    HolidayDate::new(2026, 2, 17),
    HolidayDate::new(2027, 2, 6),
    HolidayDate::new(2028, 1, 26),
    HolidayDate::new(2029, 2, 13),
    HolidayDate::new(2030, 2, 3),
    HolidayDate::new(2031, 1, 23),
    HolidayDate::new(2032, 2, 11),
    HolidayDate::new(2033, 1, 31),
    HolidayDate::new(2034, 2, 19),
    HolidayDate::new(2035, 2, 8),
    HolidayDate::new(2036, 1, 28),
];

pub fn first() -> HolidayDate {
    HOLIDAYS[0]
}

pub fn last() -> HolidayDate {
    HOLIDAYS[HOLIDAYS.len() - 1]
}
