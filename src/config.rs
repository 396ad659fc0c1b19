use chrono::NaiveDate;
use std::{env, net::SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Pins "today" instead of reading the system clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(env::var("PORT").ok(), env::var("APP_TODAY").ok())
    }

    pub fn from_values(port: Option<String>, today: Option<String>) -> Self {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let today = today.and_then(|value| match value.trim().parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(err) => {
                warn!("ignoring APP_TODAY={value}: {err}");
                None
            }
        });

        Self { port, today }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.today, None);
    }

    #[test]
    fn parses_port_and_pinned_day() {
        let config = Config::from_values(Some("3000".into()), Some("2025-01-01".into()));
        assert_eq!(config.port, 3000);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(config.addr().port(), 3000);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_values(Some("http".into()), Some("tomorrow".into()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.today, None);
    }
}
