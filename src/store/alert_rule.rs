//! Single alert rule slice backing the rule detail view

use crate::core::{AlertRuleViewModel, DisplayResolver, NotificationChannel, RelativeTimeFormatter};
use crate::format::{AlertRulePascalCaseDto, Normalizer};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleState {
    /// `None` until the first rule has been loaded
    pub alert_rule: Option<AlertRuleViewModel>,
    pub search_query: String,
    pub notification_channels: Vec<NotificationChannel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertRuleAction {
    AlertRuleLoaded(AlertRulePascalCaseDto),
}

impl AlertRuleAction {
    pub fn name(&self) -> &'static str {
        match self {
            AlertRuleAction::AlertRuleLoaded(_) => "alertRule/alertRuleLoaded",
        }
    }
}

/// Compute the next detail state. A loaded rule fully replaces the previous one.
pub fn alert_rule_reducer<R, T>(
    state: &AlertRuleState,
    action: AlertRuleAction,
    normalizer: &Normalizer<R, T>,
) -> AlertRuleState
where
    R: DisplayResolver,
    T: RelativeTimeFormatter,
{
    match action {
        AlertRuleAction::AlertRuleLoaded(dto) => {
            let rule = normalizer.normalize_detail(&dto, &dto.state);
            tracing::debug!(rule_id = rule.id, state = %rule.state, "Loaded alert rule");

            AlertRuleState {
                alert_rule: Some(rule),
                ..state.clone()
            }
        }
    }
}
