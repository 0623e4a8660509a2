//! Message builders for inquiry notifications.

use chrono::{DateTime, SecondsFormat, TimeDelta, Timelike, Utc};

use rocketcall_core::Inquiry;

use super::types::{Embed, EmbedField, EmbedFooter, WebhookMessage};

const TITLE: &str = "📞 새로운 상담 문의가 접수되었습니다!";
/// Discord blurple.
const COLOR: u32 = 0x0058_65F2;
const EMPTY_MESSAGE: &str = "(내용 없음)";
const KST_OFFSET_HOURS: i64 = 9;

/// The parts of an inquiry that go into a notification.
#[derive(Debug, Clone)]
pub struct InquiryNotice {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Inquiry> for InquiryNotice {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            name: inquiry.name.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            submitted_at: inquiry.created_at,
        }
    }
}

/// Build the "new inquiry" card: name and phone inline, then the message
/// (or a placeholder) and the submission time in Korea Standard Time.
#[must_use]
pub fn build_inquiry_message(notice: &InquiryNotice, site_name: &str) -> WebhookMessage {
    let message = if notice.message.trim().is_empty() {
        EMPTY_MESSAGE.to_string()
    } else {
        notice.message.clone()
    };

    WebhookMessage {
        embeds: vec![Embed {
            title: TITLE.to_string(),
            color: COLOR,
            fields: vec![
                EmbedField::inline("👤 이름", &notice.name),
                EmbedField::inline("📱 전화번호", &notice.phone),
                EmbedField::new("💬 문의 내용", message),
                EmbedField::new("🕐 접수 시간", format_kst(notice.submitted_at)),
            ],
            footer: EmbedFooter {
                text: site_name.to_string(),
            },
            timestamp: notice
                .submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }],
    }
}

/// Format a UTC instant as Korean 12-hour KST wall time,
/// `YYYY. MM. DD. 오전|오후 hh:MM:SS`.
#[must_use]
pub fn format_kst(at: DateTime<Utc>) -> String {
    let kst = at.naive_utc() + TimeDelta::hours(KST_OFFSET_HOURS);
    let meridiem = if kst.hour() < 12 { "오전" } else { "오후" };
    format!(
        "{} {meridiem} {}",
        kst.format("%Y. %m. %d."),
        kst.format("%I:%M:%S")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn notice(message: &str) -> InquiryNotice {
        InquiryNotice {
            name: "Kim".to_string(),
            phone: "010-1234-5678".to_string(),
            message: message.to_string(),
            submitted_at: "2026-03-01T15:30:05Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_format_kst_crosses_midnight() {
        let at = "2026-03-01T15:30:05Z".parse().unwrap();
        assert_eq!(format_kst(at), "2026. 03. 02. 오전 12:30:05");
    }

    #[test]
    fn test_format_kst_afternoon() {
        let at = "2026-03-02T05:07:09Z".parse().unwrap();
        assert_eq!(format_kst(at), "2026. 03. 02. 오후 02:07:09");

        let noon = "2026-03-02T03:00:00Z".parse().unwrap();
        assert_eq!(format_kst(noon), "2026. 03. 02. 오후 12:00:00");
    }

    #[test]
    fn test_message_shape() {
        let payload = build_inquiry_message(&notice("시승 문의"), "로켓콜-자동차");
        let json = serde_json::to_value(&payload).unwrap();
        let embed = &json["embeds"][0];

        assert_eq!(embed["title"], TITLE);
        assert_eq!(embed["color"], 0x0058_65F2);
        assert_eq!(embed["footer"]["text"], "로켓콜-자동차");
        assert_eq!(embed["timestamp"], "2026-03-01T15:30:05.000Z");

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0]["name"], "👤 이름");
        assert_eq!(fields[0]["value"], "Kim");
        assert_eq!(fields[0]["inline"], true);
        assert_eq!(fields[1]["value"], "010-1234-5678");
        assert_eq!(fields[1]["inline"], true);
        assert_eq!(fields[2]["value"], "시승 문의");
        assert_eq!(fields[2]["inline"], false);
        assert_eq!(fields[3]["value"], "2026. 03. 02. 오전 12:30:05");
    }

    #[test]
    fn test_empty_message_uses_placeholder() {
        let payload = build_inquiry_message(&notice(""), "x");
        assert_eq!(payload.embeds[0].fields[2].value, EMPTY_MESSAGE);
    }

    #[test]
    fn test_long_message_fits_discord_limit() {
        let long = "차".repeat(3000);
        let payload = build_inquiry_message(&notice(&long), "x");
        let value = &payload.embeds[0].fields[2].value;

        assert_eq!(value.chars().count(), 1024);
        assert!(value.starts_with("차차차"));
        assert!(value.ends_with('…'));
    }
}
