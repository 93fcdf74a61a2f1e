use crate::{
    assignment::Assignment,
    crossword::Crossword,
    domain::Domains,
    error::NoSolution,
    order::{order_domain_values, select_unassigned_variable},
};
use tracing::debug;

use super::{Filler, FillerConfig, Progress};

/// Backtracking driven by an explicit stack of partial assignments instead of recursion.
///
/// Children are pushed in reverse so the first word is explored first, which makes this visit
/// assignments in the same order as [`RecursiveFiller`](super::recursive::RecursiveFiller).
pub struct StackFiller {
    config: FillerConfig,
    progress: Progress,
}

impl StackFiller {
    pub fn new(config: FillerConfig) -> StackFiller {
        StackFiller {
            config,
            progress: Progress::new(),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.progress.candidate_count()
    }
}

impl Filler for StackFiller {
    fn fill(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
    ) -> Result<Assignment, NoSolution> {
        let mut candidates = vec![Assignment::new()];

        while let Some(candidate) = candidates.pop() {
            if candidate.is_complete(crossword) {
                debug!(
                    event = "search_end",
                    candidates = self.candidate_count(),
                    filled = true,
                );
                return Ok(candidate);
            }

            let variable = match select_unassigned_variable(
                self.config.variable_order,
                crossword,
                domains,
                &candidate,
            ) {
                Some(variable) => variable,
                None => continue,
            };

            let words = order_domain_values(
                self.config.value_order,
                &variable,
                crossword,
                domains,
                &candidate,
            );

            let mut children = Vec::with_capacity(words.len());
            for word in words {
                let child = candidate.with(variable, word);
                self.progress.tick(child.len());
                if child.is_consistent(crossword) {
                    children.push(child);
                }
            }
            candidates.extend(children.into_iter().rev());
        }

        debug!(
            event = "search_end",
            candidates = self.candidate_count(),
            filled = false,
        );
        Err(NoSolution::Exhausted)
    }
}
