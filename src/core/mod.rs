pub mod constants;
pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{AlertStateError, AlertStateResult, ConfigError, ParseError};
pub use traits::{DisplayResolver, RelativeTimeFormatter};
pub use types::{
    AlertRuleViewModel, AlertState, EvalData, EvalMatch, ExecutionErrorState, NoDataState,
    NotificationChannel, StateDisplay,
};
