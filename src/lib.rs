//! # alert-state
//!
//! Client-side state for an alerting UI: a list of alert rule summaries and a single
//! alert rule detail view.
//!
//! Alert rules arrive in two wire shapes, a camelCase listing entry and a PascalCase
//! detail payload. The [`format::Normalizer`] turns either into one
//! [`AlertRuleViewModel`] and derives the display attributes a view needs: state text,
//! icon and CSS class, a humanized state age and an optional info message. The
//! [`store`] module keeps the normalized rules in two slices updated by pure reducers.
//!
//! ## Quick Start
//!
//! ```rust
//! use alert_state::format::AlertRuleDto;
//! use alert_state::store::{load_alert_rules, loaded_alert_rules, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = AlertRuleDto::list_from_json(
//!     r#"[{"id": 1, "dashboardId": 1, "panelId": 2, "name": "CPU", "state": "alerting",
//!          "newStateDate": "2020-01-01T00:00:00Z", "executionError": "", "url": "/d/a/b"}]"#,
//! )?;
//!
//! let mut store = Store::default();
//! store.dispatch(load_alert_rules());
//! let state = store.dispatch(loaded_alert_rules(rules));
//!
//! assert_eq!(state.alert_rules.items[0].state_text, "ALERTING");
//! assert!(!state.alert_rules.is_loading);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`core`] - Domain types, capability traits, constants and errors
//! - [`format`] - Wire DTOs, the normalizer and its default collaborators
//! - [`store`] - State slices, actions, reducers and the dispatching store
//! - [`query`] - Selectors used by the presentation layer
//! - [`config`] - TOML configuration and validation
//! - [`logging`] - Tracing subscriber setup

/// TOML configuration and validation
pub mod config;
/// Core types, traits, constants and errors
pub mod core;
/// DTOs and their normalization into view models
pub mod format;
/// Tracing subscriber setup
pub mod logging;
/// Selectors over the store state
pub mod query;
/// State slices, actions and reducers
pub mod store;

pub use crate::core::*;
pub use config::AlertStateConfig;
pub use format::{AlertRuleDto, AlertRulePascalCaseDto, AlertRuleSource, Normalizer};
pub use store::{Action, Store, StoreState, SubscriptionId};
