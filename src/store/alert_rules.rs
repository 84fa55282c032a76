//! Alert rule list slice: normalized rule summaries, search query, loading flag and channels

use crate::core::{AlertRuleViewModel, DisplayResolver, NotificationChannel, RelativeTimeFormatter};
use crate::format::{AlertRuleDto, Normalizer};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRulesState {
    /// Normalized rules in the order the listing returned them
    pub items: Vec<AlertRuleViewModel>,
    /// Filter text for the presentation layer; the reducer never applies it
    pub search_query: String,
    pub is_loading: bool,
    pub notification_channels: Vec<NotificationChannel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertRulesAction {
    LoadAlertRules,
    LoadedAlertRules(Vec<AlertRuleDto>),
    SetSearchQuery(String),
    SetNotificationChannels(Vec<NotificationChannel>),
}

impl AlertRulesAction {
    pub fn name(&self) -> &'static str {
        match self {
            AlertRulesAction::LoadAlertRules => "alertRules/loadAlertRules",
            AlertRulesAction::LoadedAlertRules(_) => "alertRules/loadedAlertRules",
            AlertRulesAction::SetSearchQuery(_) => "alertRules/setSearchQuery",
            AlertRulesAction::SetNotificationChannels(_) => "alertRules/setNotificationChannels",
        }
    }
}

/// Compute the next list state. `state` is left untouched.
///
/// There is no failure transition: if a fetch never completes, `is_loading` stays set.
pub fn alert_rules_reducer<R, T>(
    state: &AlertRulesState,
    action: AlertRulesAction,
    normalizer: &Normalizer<R, T>,
) -> AlertRulesState
where
    R: DisplayResolver,
    T: RelativeTimeFormatter,
{
    match action {
        AlertRulesAction::LoadAlertRules => AlertRulesState {
            is_loading: true,
            ..state.clone()
        },
        AlertRulesAction::LoadedAlertRules(rules) => {
            let items: Vec<AlertRuleViewModel> = rules
                .iter()
                .map(|rule| normalizer.normalize_list(rule, &rule.state))
                .collect();

            tracing::debug!(count = items.len(), "Loaded alert rules");

            AlertRulesState {
                items,
                is_loading: false,
                search_query: state.search_query.clone(),
                notification_channels: state.notification_channels.clone(),
            }
        }
        AlertRulesAction::SetSearchQuery(search_query) => AlertRulesState {
            search_query,
            ..state.clone()
        },
        AlertRulesAction::SetNotificationChannels(notification_channels) => AlertRulesState {
            notification_channels,
            ..state.clone()
        },
    }
}
