mod apply;
mod change;
mod runner;
mod validation;

pub use apply::{apply_change, Applied, Outcome, Rejection};
pub use change::{Change, ChangeKind, RawChange};
pub use runner::{apply_changes, InvalidChangePolicy, RunSummary};
pub use validation::{validate_change, ValidationError, ValidationResult};
