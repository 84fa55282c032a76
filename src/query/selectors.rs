//! Read-only views over the store used by the rule list presentation

use crate::config::SearchConfig;
use crate::core::AlertRuleViewModel;
use crate::store::AlertRulesState;
use regex::{Regex, RegexBuilder};

pub fn search_query(state: &AlertRulesState) -> &str {
    &state.search_query
}

/// Rules whose name, state text or info matches the search query, case-insensitively.
pub fn alert_rule_items(state: &AlertRulesState) -> Vec<&AlertRuleViewModel> {
    alert_rule_items_with(state, &SearchConfig::default())
}

/// Like [`alert_rule_items`], with matching options taken from `config`.
///
/// The query is a regular expression. A query that does not compile is matched as
/// literal text instead.
pub fn alert_rule_items_with<'a>(
    state: &'a AlertRulesState,
    config: &SearchConfig,
) -> Vec<&'a AlertRuleViewModel> {
    let matcher = SearchMatcher::new(&state.search_query, config.case_insensitive);

    state
        .items
        .iter()
        .filter(|rule| matcher.matches_rule(rule))
        .collect()
}

enum SearchMatcher {
    Everything,
    Pattern(Regex),
}

impl SearchMatcher {
    fn new(query: &str, case_insensitive: bool) -> Self {
        if query.is_empty() {
            return SearchMatcher::Everything;
        }

        let compiled = RegexBuilder::new(query)
            .case_insensitive(case_insensitive)
            .build()
            .or_else(|err| {
                tracing::debug!(query = %query, error = %err, "Search query is not a valid regex, matching literally");
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(case_insensitive)
                    .build()
            });

        match compiled {
            Ok(regex) => SearchMatcher::Pattern(regex),
            Err(err) => {
                tracing::warn!(query = %query, error = %err, "Search query could not be compiled");
                SearchMatcher::Everything
            }
        }
    }

    fn matches_rule(&self, rule: &AlertRuleViewModel) -> bool {
        match self {
            SearchMatcher::Everything => true,
            SearchMatcher::Pattern(regex) => {
                regex.is_match(&rule.name)
                    || regex.is_match(&rule.state_text)
                    || rule.info.as_deref().map_or(false, |info| regex.is_match(info))
            }
        }
    }
}
