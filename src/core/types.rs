use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Raw alert state as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertState {
    Ok,
    Alerting,
    Pending,
    Paused,
    NoData,
    ExecutionError,
    /// A state code this crate does not know about, kept verbatim.
    Unknown(String),
}

impl AlertState {
    pub const KNOWN: [AlertState; 6] = [
        AlertState::Ok,
        AlertState::Alerting,
        AlertState::Pending,
        AlertState::Paused,
        AlertState::NoData,
        AlertState::ExecutionError,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AlertState::Ok => "ok",
            AlertState::Alerting => "alerting",
            AlertState::Pending => "pending",
            AlertState::Paused => "paused",
            AlertState::NoData => "no_data",
            AlertState::ExecutionError => "execution_error",
            AlertState::Unknown(code) => code,
        }
    }

    /// Parses a state code; anything unrecognized becomes [`AlertState::Unknown`].
    pub fn from_code(code: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|state| state.as_str() == code)
            .unwrap_or_else(|| AlertState::Unknown(code.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AlertState::Unknown(_))
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AlertState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlertState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(AlertState::from_code(&code))
    }
}

/// What a rule does when its query returns no data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NoDataState {
    Alerting,
    NoData,
    KeepState,
    Ok,
}

/// What a rule does when evaluation fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionErrorState {
    Alerting,
    KeepState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvalMatch {
    pub metric: String,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Result of the last rule evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvalData {
    #[serde(default)]
    pub no_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_matches: Option<Vec<EvalMatch>>,
}

/// Text, icon and CSS class shown for an alert state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateDisplay {
    pub text: String,
    pub icon_class: String,
    pub state_class: String,
}

impl StateDisplay {
    pub fn new(
        text: impl Into<String>,
        icon_class: impl Into<String>,
        state_class: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            icon_class: icon_class.into(),
            state_class: state_class.into(),
        }
    }
}

/// Notification channel record. Only a few fields are typed, the rest is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
    pub id: i64,
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Canonical, display-ready alert rule held in the store.
///
/// Values are only built by [`crate::format::Normalizer`], so the derived `state_*` and
/// `info` fields always agree with `state` and `new_state_date`. It is serialized for
/// consumers but never deserialized.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleViewModel {
    pub id: i64,
    pub dashboard_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_slug: Option<String>,
    pub panel_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub url: String,
    pub org_id: i64,
    #[serde(rename = "for")]
    pub for_duration: i64,
    pub frequency: i64,
    pub no_data_state: Option<NoDataState>,
    pub execution_error_state: Option<ExecutionErrorState>,
    pub state: AlertState,
    pub new_state_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_data: Option<EvalData>,
    pub state_text: String,
    pub state_icon: String,
    pub state_class: String,
    pub state_age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}
