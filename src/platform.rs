use axum::http::{HeaderMap, header::USER_AGENT};
use serde::Serialize;

const MOBILE_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Desktop,
}

impl Platform {
    pub fn detect(user_agent: &str) -> Self {
        if is_mobile(user_agent) {
            Platform::Mobile
        } else {
            Platform::Desktop
        }
    }

    /// Missing or unreadable `User-Agent` headers count as desktop.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(Self::detect)
            .unwrap_or(Platform::Desktop)
    }
}

pub fn is_mobile(user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| agent.contains(marker))
}
