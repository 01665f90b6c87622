use std::sync::Arc;

use rust_decimal::Decimal;

use crate::stats::Stats;
use crate::types::{Inputs, Outcome, SkipReason, Solve};

use super::{classify, imbalance, infer_with_places};

#[derive(Clone)]
pub struct Solver {
    pub ratio_places: u32,
    /// Tolerance for the all-present balance check. `None` keeps it off.
    pub consistency_tolerance: Option<Decimal>,
    pub stats: Arc<Stats>,
}

impl Solver {
    pub fn solve(&self, inputs: &Inputs) -> Outcome {
        let mut out = infer_with_places(inputs, self.ratio_places);

        if let (Some(tol), Solve::Ambiguous { missing: 0 }) = (self.consistency_tolerance, classify(inputs)) {
            out = match imbalance(inputs) {
                Some(diff) if diff.abs() > tol => {
                    tracing::warn!(
                        ratio_a = %inputs.ratio_a.unwrap_or_default(),
                        amount_a = inputs.amount_a.unwrap_or_default(),
                        ratio_b = %inputs.ratio_b.unwrap_or_default(),
                        amount_b = inputs.amount_b.unwrap_or_default(),
                        diff = %diff,
                        tolerance = %tol,
                        "sides do not balance"
                    );
                    Outcome::Skipped(SkipReason::Inconsistent { diff })
                }
                Some(_) => Outcome::Skipped(SkipReason::Consistent),
                None => Outcome::Skipped(SkipReason::Overflow),
            };
        }

        match &out {
            Outcome::Updated(u) => {
                self.stats.inc_solve();
                tracing::info!(field = %u.field, value = %u.text, "derived missing field");
            }
            Outcome::Skipped(reason) => {
                self.stats.inc_skip();
                match reason {
                    SkipReason::Ambiguous { missing } => {
                        tracing::debug!(reason = reason.as_str(), missing = *missing, "no update")
                    }
                    _ => tracing::debug!(reason = reason.as_str(), "no update"),
                }
            }
        }
        out
    }
}
