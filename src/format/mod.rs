//! Normalization of alert rule payloads into view models

pub mod dto;
pub mod normalizer;
pub mod utils;

pub use dto::{AlertRuleDto, AlertRulePascalCaseDto, AlertRuleSource};
pub use normalizer::{derive_info, Normalizer};
