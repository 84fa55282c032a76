//! # Store Workflow Tests
//!
//! Drives the store through the action sequences a rule list page and a rule
//! detail page dispatch, checking the resulting state after each step.

use crate::test_helpers::{detail_rule, fixed_normalizer, list_rule};
use alert_state::format::utils::AlertDefinitions;
use alert_state::query::alert_rule_items;
use alert_state::store::{
    alert_rule_loaded, load_alert_rules, loaded_alert_rules, root_reducer, set_notification_channels,
    set_search_query, AlertRulesState, Store, StoreState,
};
use alert_state::{AlertState, DisplayResolver, NotificationChannel};
use pretty_assertions::assert_eq;

fn channel(id: i64, name: &str) -> NotificationChannel {
    NotificationChannel {
        id,
        uid: Some(format!("ch-{id}")),
        name: name.to_string(),
        channel_type: "webhook".to_string(),
        is_default: id == 1,
        settings: serde_json::json!({"url": "https://hooks.example/alerts"}),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn test_list_page_load_cycle() {
    let mut store = Store::new(fixed_normalizer());
    assert_eq!(store.state(), &StoreState::default());

    let state = store.dispatch(load_alert_rules());
    assert!(state.alert_rules.is_loading);
    assert!(state.alert_rules.items.is_empty());

    let state = store.dispatch(loaded_alert_rules(vec![list_rule(1, "CPU", AlertState::Alerting)]));

    let expected = AlertDefinitions::new().resolve(&AlertState::Alerting);
    let rule = &state.alert_rules.items[0];
    assert_eq!(rule.state_text, expected.text);
    assert_eq!(rule.state_icon, expected.icon_class);
    assert_eq!(rule.state_class, expected.state_class);
    assert_eq!(rule.state_age, "20 minutes");
    assert_eq!(rule.info, None);
    assert!(!state.alert_rules.is_loading);
}

#[test]
fn test_reload_replaces_items_wholesale() {
    let mut store = Store::new(fixed_normalizer());

    store.dispatch(loaded_alert_rules(vec![
        list_rule(1, "CPU", AlertState::Ok),
        list_rule(2, "Memory", AlertState::Pending),
    ]));
    let state = store.dispatch(loaded_alert_rules(vec![list_rule(2, "Memory", AlertState::Alerting)]));

    assert_eq!(state.alert_rules.items.len(), 1);
    assert_eq!(state.alert_rules.items[0].state, AlertState::Alerting);
}

#[test]
fn test_empty_load_after_populated_state() {
    let mut store = Store::new(fixed_normalizer());
    store.dispatch(loaded_alert_rules(vec![list_rule(1, "CPU", AlertState::Ok)]));
    store.dispatch(load_alert_rules());

    let state = store.dispatch(loaded_alert_rules(Vec::new()));

    assert!(state.alert_rules.items.is_empty());
    assert!(!state.alert_rules.is_loading);
}

#[test]
fn test_search_query_last_write_wins_and_filters_in_selector() {
    let mut store = Store::new(fixed_normalizer());
    store.dispatch(loaded_alert_rules(vec![
        list_rule(1, "cpu load", AlertState::Ok),
        list_rule(2, "mem usage", AlertState::Ok),
    ]));

    store.dispatch(set_search_query("cpu"));
    let state = store.dispatch(set_search_query("mem"));

    assert_eq!(state.alert_rules.search_query, "mem");
    assert_eq!(state.alert_rules.items.len(), 2);

    let visible: Vec<i64> = alert_rule_items(&state.alert_rules)
        .into_iter()
        .map(|rule| rule.id)
        .collect();
    assert_eq!(visible, vec![2]);
}

#[test]
fn test_notification_channels_replaced() {
    let mut store = Store::new(fixed_normalizer());

    store.dispatch(set_notification_channels(vec![channel(1, "ops"), channel(2, "dev")]));
    let state = store.dispatch(set_notification_channels(vec![channel(3, "sre")]));

    assert_eq!(state.alert_rules.notification_channels.len(), 1);
    assert_eq!(state.alert_rules.notification_channels[0].name, "sre");
}

#[test]
fn test_detail_page_load_does_not_touch_list() {
    let mut store = Store::new(fixed_normalizer());
    store.dispatch(load_alert_rules());

    let state = store.dispatch(alert_rule_loaded(detail_rule(5, AlertState::Pending)));

    assert!(state.alert_rules.is_loading);
    let rule = state.alert_rule.alert_rule.as_ref().unwrap();
    assert_eq!(rule.id, 5);
    assert_eq!(rule.org_id, 3);
    assert_eq!(rule.state_text, "PENDING");
    assert_eq!(rule.state_age, "2 days");

    let state = store.dispatch(alert_rule_loaded(detail_rule(6, AlertState::Ok)));
    assert_eq!(state.alert_rule.alert_rule.as_ref().unwrap().id, 6);
}

#[test]
fn test_reducers_do_not_mutate_previous_state() {
    let normalizer = fixed_normalizer();
    let before = StoreState::default();

    let after = root_reducer(&before, load_alert_rules(), &normalizer);
    let after = root_reducer(
        &after,
        loaded_alert_rules(vec![list_rule(1, "CPU", AlertState::Ok)]),
        &normalizer,
    );

    assert_eq!(before.alert_rules, AlertRulesState::default());
    assert_eq!(after.alert_rules.items.len(), 1);
}

#[test]
fn test_failed_fetch_leaves_loading_set() {
    let mut store = Store::new(fixed_normalizer());

    // A fetch that fails never dispatches a completion action.
    let state = store.dispatch(load_alert_rules());

    assert!(state.alert_rules.is_loading);
}
