//! Default display resolver and relative time formatting used by the normalizer

pub mod display;
pub mod relative_time;

pub use display::{fallback_display, AlertDefinitions};
pub use relative_time::{humanize, FixedClock, WallClock};
