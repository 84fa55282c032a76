//! In-memory state container for the alert rule list and detail views
//!
//! Each slice has its own action enum and a pure reducer. [`root_reducer`] routes an
//! [`Action`] to the slice that owns it, and [`Store`] holds the current state and
//! applies dispatched actions in call order.

pub mod alert_rule;
pub mod alert_rules;

pub use alert_rule::{alert_rule_reducer, AlertRuleAction, AlertRuleState};
pub use alert_rules::{alert_rules_reducer, AlertRulesAction, AlertRulesState};

use crate::core::{DisplayResolver, NotificationChannel, RelativeTimeFormatter};
use crate::format::utils::{AlertDefinitions, WallClock};
use crate::format::{AlertRuleDto, AlertRulePascalCaseDto, Normalizer};
use serde::Serialize;

/// Top-level state, keyed `alertRules` / `alertRule` when serialized
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub alert_rules: AlertRulesState,
    pub alert_rule: AlertRuleState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AlertRules(AlertRulesAction),
    AlertRule(AlertRuleAction),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AlertRules(action) => action.name(),
            Action::AlertRule(action) => action.name(),
        }
    }
}

impl From<AlertRulesAction> for Action {
    fn from(action: AlertRulesAction) -> Self {
        Action::AlertRules(action)
    }
}

impl From<AlertRuleAction> for Action {
    fn from(action: AlertRuleAction) -> Self {
        Action::AlertRule(action)
    }
}

pub fn load_alert_rules() -> Action {
    AlertRulesAction::LoadAlertRules.into()
}

pub fn loaded_alert_rules(rules: Vec<AlertRuleDto>) -> Action {
    AlertRulesAction::LoadedAlertRules(rules).into()
}

pub fn set_search_query(query: impl Into<String>) -> Action {
    AlertRulesAction::SetSearchQuery(query.into()).into()
}

pub fn set_notification_channels(channels: Vec<NotificationChannel>) -> Action {
    AlertRulesAction::SetNotificationChannels(channels).into()
}

pub fn alert_rule_loaded(rule: AlertRulePascalCaseDto) -> Action {
    AlertRuleAction::AlertRuleLoaded(rule).into()
}

/// Apply `action` to the slice that owns it; the other slice is carried over unchanged.
pub fn root_reducer<R, T>(
    state: &StoreState,
    action: Action,
    normalizer: &Normalizer<R, T>,
) -> StoreState
where
    R: DisplayResolver,
    T: RelativeTimeFormatter,
{
    match action {
        Action::AlertRules(action) => StoreState {
            alert_rules: alert_rules_reducer(&state.alert_rules, action, normalizer),
            alert_rule: state.alert_rule.clone(),
        },
        Action::AlertRule(action) => StoreState {
            alert_rules: state.alert_rules.clone(),
            alert_rule: alert_rule_reducer(&state.alert_rule, action, normalizer),
        },
    }
}

type Listener = Box<dyn Fn(&StoreState)>;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the current [`StoreState`] and the normalizer used by its reducers.
pub struct Store<R = AlertDefinitions, T = WallClock> {
    state: StoreState,
    normalizer: Normalizer<R, T>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<R, T> Store<R, T>
where
    R: DisplayResolver,
    T: RelativeTimeFormatter,
{
    pub fn new(normalizer: Normalizer<R, T>) -> Self {
        Self {
            state: StoreState::default(),
            normalizer,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Register a callback invoked with the new state after every dispatch.
    ///
    /// Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl Fn(&StoreState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply an action and return the resulting state.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> &StoreState {
        let action = action.into();
        tracing::trace!(action = action.name(), "Dispatching action");

        self.state = root_reducer(&self.state, action, &self.normalizer);

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }

        &self.state
    }
}

impl Default for Store<AlertDefinitions, WallClock> {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl<R, T> std::fmt::Debug for Store<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
