//! # Payload Tests
//!
//! Decodes listing and detail payloads as a backend returns them and feeds them
//! through the store, checking both naming conventions end up in the same view model.

use crate::test_helpers::fixed_normalizer;
use alert_state::store::{alert_rule_loaded, loaded_alert_rules, Store};
use alert_state::{AlertRuleDto, AlertRulePascalCaseDto, AlertState, NoDataState};

const LIST_PAYLOAD: &str = r#"[
  {
    "id": 1, "dashboardId": 10, "dashboardUid": "abc", "dashboardSlug": "hosts",
    "panelId": 2, "name": "High CPU", "state": "alerting",
    "newStateDate": "2024-02-10T11:00:00Z", "evalDate": "2024-02-10T11:59:30Z",
    "evalData": {"evalMatches": [{"metric": "cpu", "tags": {"host": "web-1"}, "value": 97.2}]},
    "executionError": "", "url": "/d/abc/hosts"
  },
  {
    "id": 2, "dashboardId": 10, "panelId": 3, "name": "Datasource down",
    "state": "execution_error", "newStateDate": "2024-02-10T11:55:00Z",
    "evalData": {"noData": true},
    "executionError": "dial tcp: connection refused", "url": "/d/abc/hosts"
  },
  {
    "id": 3, "dashboardId": 10, "panelId": 4, "name": "Queue depth",
    "state": "paused", "newStateDate": "2024-01-10T12:00:00Z",
    "evalData": {"noData": true}, "executionError": "", "url": "/d/abc/hosts"
  },
  {
    "id": 4, "dashboardId": 10, "panelId": 5, "name": "Legacy",
    "state": "unknown_future_state", "newStateDate": "2024-02-10T12:00:00Z",
    "executionError": "", "url": "/d/abc/hosts"
  }
]"#;

const DETAIL_PAYLOAD: &str = r#"{
  "Id": 2, "DashboardId": 10, "DashboardUid": "abc", "PanelId": 3, "OrgId": 1,
  "Name": "Datasource down", "Message": "", "State": "no_data",
  "NewStateDate": "2024-02-10T11:55:00Z", "EvalData": {"noData": true},
  "Url": "/d/abc/hosts", "For": 0, "Frequency": 60,
  "NoDataState": "no_data", "ExecutionErrorState": "alerting"
}"#;

#[test]
fn test_list_payload_through_store() -> Result<(), Box<dyn std::error::Error>> {
    let rules = AlertRuleDto::list_from_json(LIST_PAYLOAD)?;
    let mut store = Store::new(fixed_normalizer());

    let state = store.dispatch(loaded_alert_rules(rules));
    let items = &state.alert_rules.items;

    assert_eq!(items.len(), 4);

    assert_eq!(items[0].state_text, "ALERTING");
    assert_eq!(items[0].state_age, "an hour");
    assert_eq!(items[0].info, None);

    assert_eq!(items[1].state_text, "EXECUTION ERROR");
    assert_eq!(
        items[1].info.as_deref(),
        Some("Execution Error: dial tcp: connection refused")
    );

    assert_eq!(items[2].state, AlertState::Paused);
    assert_eq!(items[2].state_age, "a month");
    assert_eq!(items[2].info, None);

    assert_eq!(
        items[3].state,
        AlertState::Unknown("unknown_future_state".to_string())
    );
    assert_eq!(items[3].state_text, "UNKNOWN");
    assert_eq!(items[3].state_age, "a few seconds");

    Ok(())
}

#[test]
fn test_detail_payload_through_store() -> Result<(), Box<dyn std::error::Error>> {
    let rule = AlertRulePascalCaseDto::from_json(DETAIL_PAYLOAD)?;
    let mut store = Store::new(fixed_normalizer());

    let state = store.dispatch(alert_rule_loaded(rule));
    let rule = state.alert_rule.alert_rule.as_ref().ok_or("rule not loaded")?;

    assert_eq!(rule.name, "Datasource down");
    assert_eq!(rule.message, None);
    assert_eq!(rule.frequency, 60);
    assert_eq!(rule.no_data_state, Some(NoDataState::NoData));
    assert_eq!(rule.state_text, "NO DATA");
    assert_eq!(rule.state_age, "5 minutes");
    assert_eq!(rule.info.as_deref(), Some("Query returned no data"));

    Ok(())
}

#[test]
fn test_view_model_serializes_with_camel_case_keys() -> Result<(), Box<dyn std::error::Error>> {
    let rules = AlertRuleDto::list_from_json(LIST_PAYLOAD)?;
    let rule = fixed_normalizer().normalize_list(&rules[0], &rules[0].state);

    let json = serde_json::to_value(&rule)?;

    assert_eq!(json["stateText"], "ALERTING");
    assert_eq!(json["stateClass"], "alert-state-critical");
    assert_eq!(json["for"], 0);
    assert_eq!(json["noDataState"], serde_json::Value::Null);
    assert!(json.get("info").is_none());
    assert!(json.get("message").is_none());

    Ok(())
}

#[test]
fn test_unknown_state_code_is_serialized_as_received() -> Result<(), Box<dyn std::error::Error>> {
    let rules = AlertRuleDto::list_from_json(LIST_PAYLOAD)?;
    let mut store = Store::new(fixed_normalizer());

    let state = store.dispatch(loaded_alert_rules(rules));
    let json = serde_json::to_value(state)?;
    let legacy = &json["alertRules"]["items"][3];

    assert_eq!(legacy["state"], "unknown_future_state");
    assert_eq!(legacy["stateText"], "UNKNOWN");
    assert_eq!(legacy["stateIcon"], "question-circle");

    Ok(())
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(AlertRuleDto::list_from_json(r#"[{"id": "one"}]"#).is_err());
    assert!(AlertRulePascalCaseDto::from_json(r#"{"id": 1}"#).is_err());
}
