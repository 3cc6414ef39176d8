use super::{apply_change, validate_change, RawChange};
use crate::catalog::Mixtape;
use crate::report::Reporter;
use anyhow::{bail, Result};
use tracing::{debug, info, warn};

/// What to do with a change record whose detail doesn't validate.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum InvalidChangePolicy {
    /// Stop the whole run, nothing gets written.
    #[default]
    Abort,
    /// Report the record and go on with the next one.
    Skip,
}

impl std::fmt::Display for InvalidChangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChangePolicy::Abort => f.write_str("abort"),
            InvalidChangePolicy::Skip => f.write_str("skip"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub ignored: usize,
    pub invalid: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.ignored + self.invalid
    }
}

/// Applies every change in order, reporting one line each.
///
/// Rejections and unknown change types never stop the run. Invalid change
/// details do when the policy is [`InvalidChangePolicy::Abort`].
pub fn apply_changes(
    mixtape: &mut Mixtape,
    changes: &[RawChange],
    policy: InvalidChangePolicy,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, raw) in changes.iter().enumerate() {
        let number = index + 1;
        let kind = match raw.kind() {
            Some(kind) => kind,
            None => {
                debug!("Change #{} has unknown type {}", number, raw.change_type);
                reporter.report(&format!(
                    "change_type {} is not defined, ignored!",
                    raw.type_label()
                ));
                summary.ignored += 1;
                continue;
            }
        };

        let change = match validate_change(kind, &raw.change_detail) {
            Ok(change) => change,
            Err(err) => match policy {
                InvalidChangePolicy::Abort => {
                    bail!("Change #{} ({}) is invalid: {}", number, kind, err)
                }
                InvalidChangePolicy::Skip => {
                    warn!("Skipping invalid change #{} ({}): {}", number, kind, err);
                    reporter.report(&format!(
                        "change #{} ({}) is invalid, skipped: {}",
                        number, kind, err
                    ));
                    summary.invalid += 1;
                    continue;
                }
            },
        };

        let outcome = apply_change(mixtape, &change);
        debug!("Change #{} ({}) -> {:?}", number, change.kind(), outcome);
        if outcome.is_accepted() {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }
        reporter.report(&outcome.to_string());
    }

    info!(
        "Processed {} changes: {} accepted, {} rejected, {} ignored, {} invalid",
        summary.total(),
        summary.accepted,
        summary.rejected,
        summary.ignored,
        summary.invalid
    );
    Ok(summary)
}
