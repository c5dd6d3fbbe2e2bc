//! Pure mapping from an incident notification to a chat message.

use crate::models::{ChatMessage, Embed, EmbedField, IncidentNotification};
use chrono::{Local, TimeZone};

/// Green for resolved incidents.
pub const COLOR_GREEN: u32 = 3066993;
/// Red for open incidents.
pub const COLOR_RED: u32 = 15158332;
/// Grey for unknown states.
pub const COLOR_GREY: u32 = 9807270;

/// Placeholder for absent optional values.
const PLACEHOLDER: &str = "-";

/// Map a notification to the outgoing chat message.
///
/// Deterministic, no I/O. Always produces exactly one embed with five
/// fields in fixed order.
pub fn to_chat_message(notification: &IncidentNotification) -> ChatMessage {
    let incident = &notification.incident;

    let color = match incident.state.as_str() {
        "open" => COLOR_RED,
        "closed" => COLOR_GREEN,
        _ => COLOR_GREY,
    };

    ChatMessage {
        embeds: vec![Embed {
            title: incident.summary.clone(),
            url: incident.url.clone(),
            description: String::new(),
            color,
            fields: vec![
                EmbedField::block("Incident ID", incident.incident_id.clone()),
                EmbedField::inline("Policy", or_placeholder(&incident.policy_name)),
                EmbedField::inline("Condition", or_placeholder(&incident.condition_name)),
                EmbedField::block("Started At", format_epoch(incident.started_at)),
                EmbedField::block("Ended At", format_epoch(incident.ended_at)),
            ],
        }],
    }
}

/// Local-timezone rendering of epoch seconds; 0, negative, or
/// out-of-range values render as the placeholder.
fn format_epoch(secs: i64) -> String {
    if secs <= 0 {
        return PLACEHOLDER.to_string();
    }
    match Local.timestamp_opt(secs, 0).single() {
        Some(ts) => ts.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Incident;

    fn notification(state: &str) -> IncidentNotification {
        IncidentNotification {
            incident: Incident {
                incident_id: "inc-123".to_string(),
                resource_id: "res-1".to_string(),
                resource_name: "api-server".to_string(),
                state: state.to_string(),
                started_at: 1700000000,
                ended_at: 0,
                policy_name: "cpu-high".to_string(),
                condition_name: "cpu > 90%".to_string(),
                url: "https://console.example.com/incidents/inc-123".to_string(),
                summary: "CPU usage above threshold".to_string(),
            },
            version: "1.2".to_string(),
        }
    }

    #[test]
    fn open_incident_is_red() {
        let message = to_chat_message(&notification("open"));
        assert_eq!(message.embeds[0].color, COLOR_RED);
    }

    #[test]
    fn closed_incident_is_green() {
        let message = to_chat_message(&notification("closed"));
        assert_eq!(message.embeds[0].color, COLOR_GREEN);
    }

    #[test]
    fn unknown_state_is_grey() {
        let message = to_chat_message(&notification("acknowledged"));
        assert_eq!(message.embeds[0].color, COLOR_GREY);

        let message = to_chat_message(&notification(""));
        assert_eq!(message.embeds[0].color, COLOR_GREY);
    }

    #[test]
    fn produces_one_embed_with_five_fields_in_order() {
        let message = to_chat_message(&notification("open"));
        assert_eq!(message.embeds.len(), 1);

        let embed = &message.embeds[0];
        assert_eq!(embed.title, "CPU usage above threshold");
        assert_eq!(embed.url, "https://console.example.com/incidents/inc-123");

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Incident ID", "Policy", "Condition", "Started At", "Ended At"]
        );
        let inline: Vec<bool> = embed.fields.iter().map(|f| f.inline).collect();
        assert_eq!(inline, vec![false, true, true, false, false]);
    }

    #[test]
    fn zero_timestamps_render_placeholder() {
        let mut n = notification("open");
        n.incident.started_at = 0;
        n.incident.ended_at = 0;
        let embed = &to_chat_message(&n).embeds[0];
        assert_eq!(embed.fields[3].value, "-");
        assert_eq!(embed.fields[4].value, "-");
    }

    #[test]
    fn positive_timestamp_renders_a_date() {
        let message = to_chat_message(&notification("open"));
        let started = &message.embeds[0].fields[3].value;
        assert_ne!(started, "-");
        assert!(started.starts_with("2023-11-"));
    }

    #[test]
    fn missing_policy_and_condition_render_placeholder() {
        let mut n = notification("open");
        n.incident.policy_name = String::new();
        n.incident.condition_name = String::new();
        let embed = &to_chat_message(&n).embeds[0];
        assert_eq!(embed.fields[1].value, "-");
        assert_eq!(embed.fields[2].value, "-");
    }

    #[test]
    fn present_policy_is_echoed_verbatim() {
        let embed = &to_chat_message(&notification("open")).embeds[0];
        assert_eq!(embed.fields[1].value, "cpu-high");
        assert_eq!(embed.fields[2].value, "cpu > 90%");
    }

    #[test]
    fn transform_is_deterministic() {
        let n = notification("open");
        let a = serde_json::to_vec(&to_chat_message(&n)).unwrap();
        let b = serde_json::to_vec(&to_chat_message(&n)).unwrap();
        assert_eq!(a, b);
    }
}
