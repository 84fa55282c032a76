//! Conversion of both alert rule wire shapes into [`AlertRuleViewModel`]

use crate::config::AlertStateConfig;
use crate::core::constants::info_messages;
use crate::core::{
    AlertRuleViewModel, AlertState, DisplayResolver, EvalData, RelativeTimeFormatter,
};
use crate::format::dto::{AlertRuleDto, AlertRulePascalCaseDto, AlertRuleSource};
use crate::format::utils::{AlertDefinitions, WallClock};

/// Builds view models from DTOs using an injected display resolver and time formatter.
///
/// Normalization borrows the DTO, performs no I/O and cannot fail; unknown state codes
/// are left to the resolver's fallback.
#[derive(Debug, Clone)]
pub struct Normalizer<R = AlertDefinitions, T = WallClock> {
    resolver: R,
    formatter: T,
}

impl<R, T> Normalizer<R, T>
where
    R: DisplayResolver,
    T: RelativeTimeFormatter,
{
    pub fn new(resolver: R, formatter: T) -> Self {
        Self {
            resolver,
            formatter,
        }
    }

    /// Normalize either shape, resolving display attributes for `status`.
    pub fn normalize(&self, source: &AlertRuleSource, status: &AlertState) -> AlertRuleViewModel {
        match source {
            AlertRuleSource::List(dto) => self.normalize_list(dto, status),
            AlertRuleSource::Detail(dto) => self.normalize_detail(dto, status),
        }
    }

    /// Normalize a listing entry. Fields the listing does not carry are zeroed or unset.
    pub fn normalize_list(&self, dto: &AlertRuleDto, status: &AlertState) -> AlertRuleViewModel {
        let rule = AlertRuleViewModel {
            id: dto.id,
            dashboard_id: dto.dashboard_id,
            dashboard_uid: dto.dashboard_uid.clone(),
            dashboard_slug: dto.dashboard_slug.clone(),
            panel_id: dto.panel_id,
            name: dto.name.clone(),
            message: None,
            url: dto.url.clone(),
            org_id: 0,
            for_duration: 0,
            frequency: 0,
            no_data_state: None,
            execution_error_state: None,
            state: dto.state.clone(),
            new_state_date: dto.new_state_date,
            eval_date: dto.eval_date,
            execution_error: non_empty(Some(&dto.execution_error)),
            eval_data: dto.eval_data.clone(),
            state_text: String::new(),
            state_icon: String::new(),
            state_class: String::new(),
            state_age: String::new(),
            info: None,
        };

        self.with_derived_fields(rule, status)
    }

    /// Normalize a single-rule payload, copying every field it carries.
    pub fn normalize_detail(
        &self,
        dto: &AlertRulePascalCaseDto,
        status: &AlertState,
    ) -> AlertRuleViewModel {
        let rule = AlertRuleViewModel {
            id: dto.id,
            dashboard_id: dto.dashboard_id,
            dashboard_uid: dto.dashboard_uid.clone(),
            dashboard_slug: dto.dashboard_slug.clone(),
            panel_id: dto.panel_id,
            name: dto.name.clone(),
            message: non_empty(dto.message.as_ref()),
            url: dto.url.clone(),
            org_id: dto.org_id,
            for_duration: dto.for_duration,
            frequency: dto.frequency,
            no_data_state: Some(dto.no_data_state),
            execution_error_state: Some(dto.execution_error_state),
            state: dto.state.clone(),
            new_state_date: dto.new_state_date,
            eval_date: dto.eval_date,
            execution_error: non_empty(dto.execution_error.as_ref()),
            eval_data: dto.eval_data.clone(),
            state_text: String::new(),
            state_icon: String::new(),
            state_class: String::new(),
            state_age: String::new(),
            info: None,
        };

        self.with_derived_fields(rule, status)
    }

    fn with_derived_fields(
        &self,
        mut rule: AlertRuleViewModel,
        status: &AlertState,
    ) -> AlertRuleViewModel {
        let display = self.resolver.resolve(status);

        rule.state_text = display.text;
        rule.state_icon = display.icon_class;
        rule.state_class = display.state_class;
        rule.state_age = self.formatter.human_relative_duration(rule.new_state_date);
        rule.info = derive_info(
            &rule.state,
            rule.execution_error.as_deref(),
            rule.eval_data.as_ref(),
        );

        tracing::trace!(
            rule_id = rule.id,
            state = %rule.state,
            status = %status,
            "Normalized alert rule"
        );

        rule
    }
}

impl Normalizer<AlertDefinitions, WallClock> {
    /// Normalizer using the configured display table and the system clock.
    pub fn from_config(config: &AlertStateConfig) -> Self {
        Self::new(AlertDefinitions::from_config(&config.display), WallClock)
    }
}

impl Default for Normalizer<AlertDefinitions, WallClock> {
    fn default() -> Self {
        Self::new(AlertDefinitions::new(), WallClock)
    }
}

/// Contextual message for a rule, if any.
///
/// Paused rules never get one. Otherwise an execution error wins over a no-data result.
pub fn derive_info(
    state: &AlertState,
    execution_error: Option<&str>,
    eval_data: Option<&EvalData>,
) -> Option<String> {
    if *state == AlertState::Paused {
        return None;
    }

    if let Some(error) = execution_error.filter(|e| !e.is_empty()) {
        return Some(format!("{}{}", info_messages::EXECUTION_ERROR_PREFIX, error));
    }

    if eval_data.map_or(false, |data| data.no_data) {
        return Some(info_messages::NO_DATA.to_string());
    }

    None
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}
