use crate::countdown::Countdown;
use crate::export::ExportPlan;

pub fn page_title(countdown: &Countdown) -> String {
    if countdown.is_today() {
        "今天过年".to_string()
    } else {
        format!("还有 {} 天过年", countdown.days_left)
    }
}

pub fn render_index(countdown: &Countdown, plan: &ExportPlan) -> Result<String, serde_json::Error> {
    let (headline_zh, headline_en) = if countdown.is_today() {
        (
            "今天就是春节".to_string(),
            "Today is Chinese New Year".to_string(),
        )
    } else {
        (
            format!("距离过年还有 {} 天", countdown.days_left),
            format!("{} days until Chinese New Year", countdown.days_left),
        )
    };

    let note = if countdown.from_table {
        ""
    } else {
        "日期为估算 · estimated date"
    };

    // Keep the JSON from closing the surrounding <script> element.
    let plan_json = serde_json::to_string(plan)?.replace("</", "<\\/");

    Ok(INDEX_HTML
        .replace("{{TITLE}}", &page_title(countdown))
        .replace("{{DAYS}}", &countdown.days_left.to_string())
        .replace("{{HEADLINE_ZH}}", &headline_zh)
        .replace("{{HEADLINE_EN}}", &headline_en)
        .replace("{{TARGET}}", &countdown.target.format("%Y-%m-%d").to_string())
        .replace("{{NOTE}}", note)
        .replace("{{HINT}}", plan.action.hint())
        .replace("{{PLAN}}", &plan_json))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <script src="https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js" defer></script>
  <style>
    :root {
      --bg: #1a1a2e;
      --red: #c0392b;
      --red-deep: #8e1b10;
      --gold: #f5c542;
      --ink: #fff7e6;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "PingFang SC", "Noto Sans SC", "Microsoft YaHei", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px;
    }

    .card {
      width: min(420px, 100%);
      border-radius: 24px;
      padding: 40px 28px;
      background: linear-gradient(160deg, var(--red), var(--red-deep));
      border: 2px solid rgba(245, 197, 66, 0.5);
      box-shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
      text-align: center;
      cursor: pointer;
      user-select: none;
    }

    .days {
      font-size: clamp(4rem, 18vw, 6.5rem);
      font-weight: 700;
      line-height: 1;
      color: var(--gold);
      margin: 12px 0;
    }

    .headline {
      margin: 0;
      font-size: 1.4rem;
    }

    .headline-en {
      margin: 6px 0 0;
      font-size: 0.95rem;
      opacity: 0.8;
    }

    .target {
      margin: 20px 0 0;
      font-size: 0.85rem;
      letter-spacing: 0.08em;
      opacity: 0.75;
    }

    .note {
      margin: 4px 0 0;
      font-size: 0.75rem;
      opacity: 0.6;
    }

    .hint {
      margin-top: 18px;
      font-size: 0.85rem;
      opacity: 0.6;
    }

    .toast {
      position: fixed;
      left: 50%;
      bottom: 40px;
      transform: translateX(-50%);
      padding: 10px 18px;
      border-radius: 999px;
      background: rgba(0, 0, 0, 0.8);
      color: white;
      font-size: 0.9rem;
      visibility: hidden;
    }

    .toast.visible {
      visibility: visible;
    }
  </style>
</head>
<body>
  <main>
    <section class="card" id="card" role="button" tabindex="0">
      <p class="headline">{{HEADLINE_ZH}}</p>
      <div class="days">{{DAYS}}</div>
      <p class="headline-en">{{HEADLINE_EN}}</p>
      <p class="target">春节 · {{TARGET}}</p>
      <p class="note">{{NOTE}}</p>
    </section>
    <p class="hint">{{HINT}}</p>
  </main>
  <div class="toast" id="toast" role="status"></div>

  <script type="application/json" id="export-plan">{{PLAN}}</script>
  <script>
    const plan = JSON.parse(document.getElementById('export-plan').textContent);
    const toastEl = document.getElementById('toast');
    let hideTimer = null;

    const showToast = (message) => {
      if (hideTimer !== null) {
        clearTimeout(hideTimer);
      }
      toastEl.textContent = message;
      toastEl.classList.add('visible');
      hideTimer = setTimeout(() => {
        toastEl.classList.remove('visible');
        hideTimer = null;
      }, 2000);
    };

    const captureCard = async (node) => {
      if (!node || typeof html2canvas !== 'function') {
        return null;
      }
      return html2canvas(node, {
        scale: plan.scale,
        backgroundColor: plan.background,
        useCORS: true
      });
    };

    const toPng = (canvas) =>
      new Promise((resolve) => canvas.toBlob((blob) => resolve(blob), 'image/png'));

    const capturePng = async () => {
      const canvas = await captureCard(document.getElementById('card'));
      if (!canvas) {
        throw new Error('capture failed');
      }
      const blob = await toPng(canvas);
      if (!blob) {
        throw new Error('encoding failed');
      }
      return blob;
    };

    const canCopyImages = () =>
      Boolean(navigator.clipboard && navigator.clipboard.write && window.ClipboardItem);

    const copyToClipboard = async () => {
      try {
        const blob = await capturePng();
        await navigator.clipboard.write([new ClipboardItem({ 'image/png': blob })]);
        showToast(plan.messages.copy_ok);
      } catch (err) {
        showToast(plan.messages.copy_failed);
      }
    };

    const downloadImage = async () => {
      try {
        const blob = await capturePng();
        const url = URL.createObjectURL(blob);
        const link = document.createElement('a');
        link.href = url;
        link.download = plan.filename;
        document.body.appendChild(link);
        link.click();
        link.remove();
        setTimeout(() => URL.revokeObjectURL(url), 0);
        showToast(plan.messages.download_ok);
      } catch (err) {
        showToast(plan.messages.download_failed);
      }
    };

    const exportCard = () => {
      if (plan.action === 'copy' && canCopyImages()) {
        return copyToClipboard();
      }
      return downloadImage();
    };

    const card = document.getElementById('card');
    card.addEventListener('click', () => {
      exportCard();
    });
    card.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' || event.key === ' ') {
        event.preventDefault();
        exportCard();
      }
    });
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use chrono::NaiveDate;

    fn countdown(y: i32, m: u32, d: u32) -> Countdown {
        Countdown::at(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn title_mirrors_day_count() {
        let countdown = countdown(2025, 1, 1);
        let plan = ExportPlan::new(Platform::Desktop, countdown.days_left);
        let html = render_index(&countdown, &plan).unwrap();

        assert!(html.contains("<title>还有 28 天过年</title>"));
        assert!(html.contains("距离过年还有 28 天"));
        assert!(html.contains("28 days until Chinese New Year"));
        assert!(html.contains("2025-01-29"));
        assert!(html.contains("点击卡片复制图片"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn holiday_day_reads_today() {
        let countdown = countdown(2025, 1, 29);
        assert_eq!(page_title(&countdown), "今天过年");
    }

    #[test]
    fn embeds_plan_for_mobile_download() {
        let countdown = countdown(2036, 6, 1);
        let plan = ExportPlan::new(Platform::Mobile, countdown.days_left);
        let html = render_index(&countdown, &plan).unwrap();

        assert!(html.contains(r#""action":"download""#));
        assert!(html.contains("过年倒计时-241天.png"));
        assert!(html.contains("estimated date"));
    }
}
