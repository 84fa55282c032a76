//! Wire shapes of an alert rule, as returned by the list and detail endpoints

use crate::core::errors::{AlertStateResult, ParseError};
use crate::core::{AlertState, EvalData, ExecutionErrorState, NoDataState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert rule as returned by the rules listing (lower camelCase keys).
///
/// The listing omits organization, scheduling and no-data / error behaviour fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleDto {
    pub id: i64,
    pub dashboard_id: i64,
    #[serde(default)]
    pub dashboard_uid: Option<String>,
    #[serde(default)]
    pub dashboard_slug: Option<String>,
    pub panel_id: i64,
    pub name: String,
    pub state: AlertState,
    pub new_state_date: DateTime<Utc>,
    #[serde(default)]
    pub eval_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eval_data: Option<EvalData>,
    #[serde(default)]
    pub execution_error: String,
    pub url: String,
}

impl AlertRuleDto {
    /// Decode a listing payload (a JSON array of rules).
    pub fn list_from_json(payload: &str) -> AlertStateResult<Vec<Self>> {
        let rules = serde_json::from_str(payload)
            .map_err(|e| ParseError::json("alert rule list", e))?;
        Ok(rules)
    }
}

/// Alert rule as returned by the single-rule endpoint (PascalCase keys).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AlertRulePascalCaseDto {
    pub id: i64,
    pub dashboard_id: i64,
    #[serde(default)]
    pub dashboard_uid: Option<String>,
    #[serde(default)]
    pub dashboard_slug: Option<String>,
    pub panel_id: i64,
    pub org_id: i64,
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
    pub state: AlertState,
    pub new_state_date: DateTime<Utc>,
    #[serde(default)]
    pub eval_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eval_data: Option<EvalData>,
    #[serde(default)]
    pub execution_error: Option<String>,
    pub url: String,
    #[serde(rename = "For")]
    pub for_duration: i64,
    pub frequency: i64,
    pub no_data_state: NoDataState,
    pub execution_error_state: ExecutionErrorState,
}

impl AlertRulePascalCaseDto {
    /// Decode a single-rule payload.
    pub fn from_json(payload: &str) -> AlertStateResult<Self> {
        let rule =
            serde_json::from_str(payload).map_err(|e| ParseError::json("alert rule", e))?;
        Ok(rule)
    }
}

/// Either wire shape, tagged by the endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertRuleSource {
    List(AlertRuleDto),
    Detail(AlertRulePascalCaseDto),
}

impl From<AlertRuleDto> for AlertRuleSource {
    fn from(dto: AlertRuleDto) -> Self {
        AlertRuleSource::List(dto)
    }
}

impl From<AlertRulePascalCaseDto> for AlertRuleSource {
    fn from(dto: AlertRulePascalCaseDto) -> Self {
        AlertRuleSource::Detail(dto)
    }
}
