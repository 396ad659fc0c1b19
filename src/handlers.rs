use crate::countdown::{Countdown, fallback_holiday};
use crate::errors::AppError;
use crate::export::{ExportAction, ExportPlan, download_filename};
use crate::holidays::HOLIDAYS;
use crate::models::{CountdownQuery, CountdownResponse, HolidaysResponse};
use crate::platform::Platform;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let countdown = Countdown::at(state.clock.today());
    let platform = Platform::from_headers(&headers);
    debug!(?platform, days_left = countdown.days_left, "rendering card");

    let plan = ExportPlan::new(platform, countdown.days_left);
    Ok(Html(render_index(&countdown, &plan)?))
}

pub async fn get_countdown(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CountdownQuery>,
) -> Result<Json<CountdownResponse>, AppError> {
    let today = match query.date.as_deref() {
        Some(raw) => parse_day(raw)?,
        None => state.clock.today(),
    };

    let platform = Platform::from_headers(&headers);
    Ok(Json(to_response(Countdown::at(today), platform)))
}

pub async fn get_holidays() -> Json<HolidaysResponse> {
    Json(HolidaysResponse {
        holidays: HOLIDAYS.iter().map(|entry| entry.to_date().to_string()).collect(),
        fallback: fallback_holiday().to_string(),
    })
}

pub async fn healthz() -> &'static str {
    "ok"
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    raw.trim().parse::<NaiveDate>().map_err(|err| {
        warn!("rejected date query {raw:?}: {err}");
        AppError::from(err)
    })
}

fn to_response(countdown: Countdown, platform: Platform) -> CountdownResponse {
    CountdownResponse {
        today: countdown.today.to_string(),
        target: countdown.target.to_string(),
        days_left: countdown.days_left,
        from_table: countdown.from_table,
        platform,
        action: ExportAction::for_platform(platform),
        filename: download_filename(countdown.days_left),
    }
}
