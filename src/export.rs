use crate::platform::Platform;
use serde::Serialize;

/// Render density for the card capture.
pub const CAPTURE_SCALE: u32 = 2;
/// Fill behind the card so transparent corners come out dark.
pub const CAPTURE_BACKGROUND: &str = "#1a1a2e";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    Copy,
    Download,
}

impl ExportAction {
    /// Desktop browsers copy to the clipboard, mobile browsers download.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Desktop => ExportAction::Copy,
            Platform::Mobile => ExportAction::Download,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ExportAction::Copy => "已复制到剪贴板",
            ExportAction::Download => "图片已保存",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            ExportAction::Copy => "复制失败，请重试",
            ExportAction::Download => "保存失败，请重试",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ExportAction::Copy => "点击卡片复制图片",
            ExportAction::Download => "点击卡片保存图片",
        }
    }
}

pub fn download_filename(days_left: i64) -> String {
    format!("过年倒计时-{days_left}天.png")
}

/// Everything the page script needs to capture and deliver the card.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPlan {
    pub action: ExportAction,
    pub filename: String,
    pub scale: u32,
    pub background: &'static str,
    pub messages: ExportMessages,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportMessages {
    pub copy_ok: &'static str,
    pub copy_failed: &'static str,
    pub download_ok: &'static str,
    pub download_failed: &'static str,
}

impl ExportPlan {
    pub fn new(platform: Platform, days_left: i64) -> Self {
        Self {
            action: ExportAction::for_platform(platform),
            filename: download_filename(days_left),
            scale: CAPTURE_SCALE,
            background: CAPTURE_BACKGROUND,
            messages: ExportMessages {
                copy_ok: ExportAction::Copy.success_message(),
                copy_failed: ExportAction::Copy.failure_message(),
                download_ok: ExportAction::Download.success_message(),
                download_failed: ExportAction::Download.failure_message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_follows_platform() {
        assert_eq!(ExportAction::for_platform(Platform::Desktop), ExportAction::Copy);
        assert_eq!(ExportAction::for_platform(Platform::Mobile), ExportAction::Download);
    }

    #[test]
    fn filename_carries_day_count() {
        assert_eq!(download_filename(28), "过年倒计时-28天.png");
        assert_eq!(download_filename(0), "过年倒计时-0天.png");
    }

    #[test]
    fn plan_serializes_for_the_page() {
        let plan = ExportPlan::new(Platform::Mobile, 5);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["action"], "download");
        assert_eq!(json["filename"], "过年倒计时-5天.png");
        assert_eq!(json["scale"], 2);
        assert_eq!(json["messages"]["copy_failed"], "复制失败，请重试");
    }
}
