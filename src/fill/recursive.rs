use crate::{
    assignment::Assignment,
    crossword::Crossword,
    domain::Domains,
    error::NoSolution,
    order::{order_domain_values, select_unassigned_variable},
};
use tracing::debug;

use super::{Filler, FillerConfig, Progress};

/// Depth-first backtracking, one stack frame per assigned variable.
pub struct RecursiveFiller {
    config: FillerConfig,
    progress: Progress,
}

impl RecursiveFiller {
    pub fn new(config: FillerConfig) -> RecursiveFiller {
        RecursiveFiller {
            config,
            progress: Progress::new(),
        }
    }

    /// Candidate assignments checked so far.
    pub fn candidate_count(&self) -> usize {
        self.progress.candidate_count()
    }

    fn backtrack(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: Assignment,
    ) -> Option<Assignment> {
        if assignment.is_complete(crossword) {
            return Some(assignment);
        }

        let variable = select_unassigned_variable(
            self.config.variable_order,
            crossword,
            domains,
            &assignment,
        )?;

        for word in order_domain_values(
            self.config.value_order,
            &variable,
            crossword,
            domains,
            &assignment,
        ) {
            let candidate = assignment.with(variable, word);
            self.progress.tick(candidate.len());

            if !candidate.is_consistent(crossword) {
                continue;
            }
            if let Some(result) = self.backtrack(crossword, domains, candidate) {
                return Some(result);
            }
        }

        None
    }
}

impl Filler for RecursiveFiller {
    fn fill(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
    ) -> Result<Assignment, NoSolution> {
        let result = self.backtrack(crossword, domains, Assignment::new());
        debug!(
            event = "search_end",
            candidates = self.candidate_count(),
            filled = result.is_some(),
        );
        result.ok_or(NoSolution::Exhausted)
    }
}
