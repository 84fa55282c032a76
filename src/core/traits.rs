use crate::core::types::{AlertState, StateDisplay};
use chrono::{DateTime, Utc};

/// Maps an alert state to the text, icon and CSS class shown for it.
///
/// Implementations must be total: every state, including [`AlertState::Unknown`],
/// resolves to some display tuple.
pub trait DisplayResolver {
    fn resolve(&self, state: &AlertState) -> StateDisplay;
}

impl<F> DisplayResolver for F
where
    F: Fn(&AlertState) -> StateDisplay,
{
    fn resolve(&self, state: &AlertState) -> StateDisplay {
        self(state)
    }
}

/// Formats the time elapsed between "now" and a timestamp, without an "ago" suffix.
pub trait RelativeTimeFormatter {
    fn human_relative_duration(&self, timestamp: DateTime<Utc>) -> String;
}
