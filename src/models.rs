use crate::export::ExportAction;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CountdownQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CountdownResponse {
    pub today: String,
    pub target: String,
    pub days_left: i64,
    pub from_table: bool,
    pub platform: Platform,
    pub action: ExportAction,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    pub holidays: Vec<String>,
    /// Date used once the table is exhausted.
    pub fallback: String,
}
