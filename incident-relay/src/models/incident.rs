use serde::Deserialize;

/// Inbound webhook payload: one incident plus the schema version of the
/// sending alerting system. Unknown fields are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentNotification {
    #[serde(default)]
    pub incident: Incident,
    #[serde(default)]
    pub version: String,
}

/// An alerting-system event record describing a resource entering or
/// leaving an abnormal state.
///
/// Every field defaults to empty/zero when absent; presence is the only
/// validation performed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Incident {
    #[serde(default)]
    pub incident_id: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub resource_name: String,
    /// Expected values: `"open"`, `"closed"`; anything else is unknown.
    #[serde(default)]
    pub state: String,
    /// Epoch seconds; 0 or absent means unknown.
    #[serde(default)]
    pub started_at: i64,
    /// Epoch seconds; 0 or absent means still open or unknown.
    #[serde(default)]
    pub ended_at: i64,
    #[serde(default)]
    pub policy_name: String,
    #[serde(default)]
    pub condition_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
}
