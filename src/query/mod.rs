pub mod selectors;

pub use selectors::{alert_rule_items, alert_rule_items_with, search_query};
