use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub clock: Clock,
}

impl AppState {
    pub fn new(today: Option<NaiveDate>) -> Self {
        Self {
            clock: today.map(Clock::Fixed).unwrap_or(Clock::System),
        }
    }
}
