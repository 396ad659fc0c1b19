pub mod app;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod holidays;
pub mod models;
pub mod platform;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use countdown::{Countdown, days_between, next_holiday};
pub use state::AppState;
