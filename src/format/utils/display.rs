//! Default mapping from alert state to display attributes

use crate::config::DisplayConfig;
use crate::core::constants::{state_classes, state_icons, state_labels};
use crate::core::{AlertState, DisplayResolver, StateDisplay};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_ENTRIES: Lazy<HashMap<AlertState, StateDisplay>> = Lazy::new(|| {
    let mut entries = HashMap::new();

    entries.insert(
        AlertState::Ok,
        StateDisplay::new(state_labels::OK, state_icons::HEART, state_classes::OK),
    );
    entries.insert(
        AlertState::Alerting,
        StateDisplay::new(
            state_labels::ALERTING,
            state_icons::HEART_BREAK,
            state_classes::CRITICAL,
        ),
    );
    entries.insert(
        AlertState::NoData,
        StateDisplay::new(
            state_labels::NO_DATA,
            state_icons::QUESTION_CIRCLE,
            state_classes::WARNING,
        ),
    );
    entries.insert(
        AlertState::Paused,
        StateDisplay::new(state_labels::PAUSED, state_icons::PAUSE, state_classes::PAUSED),
    );
    entries.insert(
        AlertState::Pending,
        StateDisplay::new(
            state_labels::PENDING,
            state_icons::EXCLAMATION,
            state_classes::WARNING,
        ),
    );
    entries.insert(
        AlertState::ExecutionError,
        StateDisplay::new(
            state_labels::EXECUTION_ERROR,
            state_icons::EXCLAMATION_TRIANGLE,
            state_classes::CRITICAL,
        ),
    );

    entries
});

/// Display used for states missing from the table, including [`AlertState::Unknown`].
pub fn fallback_display() -> StateDisplay {
    StateDisplay::new(
        state_labels::UNKNOWN,
        state_icons::QUESTION_CIRCLE,
        state_classes::PAUSED,
    )
}

/// Lookup table of alert state display attributes with a fallback entry
#[derive(Debug, Clone)]
pub struct AlertDefinitions {
    entries: HashMap<AlertState, StateDisplay>,
    fallback: StateDisplay,
}

impl AlertDefinitions {
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.clone(),
            fallback: fallback_display(),
        }
    }

    /// Default table with the configured entries and fallback layered on top.
    ///
    /// Override keys are state codes; codes that do not name a known state are skipped
    /// with a warning (`DisplayConfig::validate` rejects them up front).
    pub fn from_config(config: &DisplayConfig) -> Self {
        let mut definitions = Self::new();

        if let Some(fallback) = &config.fallback {
            definitions.fallback = fallback.clone();
        }

        for (code, display) in &config.overrides {
            match AlertState::from_code(code) {
                AlertState::Unknown(_) => {
                    tracing::warn!(code = %code, "Ignoring display override for unknown alert state");
                }
                state => {
                    definitions.entries.insert(state, display.clone());
                }
            }
        }

        definitions
    }

}

impl DisplayResolver for AlertDefinitions {
    fn resolve(&self, state: &AlertState) -> StateDisplay {
        self.entries
            .get(state)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for AlertDefinitions {
    fn default() -> Self {
        Self::new()
    }
}
