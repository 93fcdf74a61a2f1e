use crate::{
    assignment::Assignment,
    consistency::{ac3, enforce_node_consistency, Arc},
    crossword::Crossword,
    domain::Domains,
    error::{DomainWipeout, NoSolution},
    order::{ValueOrder, VariableOrder},
    vocabulary::Vocabulary,
};
use std::{str::FromStr, time::Instant};
use tracing::{debug, info};

pub mod recursive;
pub mod stack;

use recursive::RecursiveFiller;
use stack::StackFiller;

/// Candidate assignments between progress events.
const PROGRESS_INTERVAL: usize = 10_000;

/// Searches pruned domains for a complete, consistent assignment.
pub trait Filler {
    fn fill(&mut self, crossword: &Crossword, domains: &Domains)
        -> Result<Assignment, NoSolution>;
}

/// How the search walks the tree of partial assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Recursive,
    /// Same visiting order as `Recursive`, driven by an explicit stack.
    Stack,
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Recursive
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Strategy, String> {
        match s {
            "recursive" => Ok(Strategy::Recursive),
            "stack" => Ok(Strategy::Stack),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillerConfig {
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub strategy: Strategy,
}

/// Counts candidate assignments and reports throughput every `PROGRESS_INTERVAL` of them.
#[derive(Debug, Clone)]
pub(crate) struct Progress {
    start: Instant,
    candidate_count: usize,
}

impl Progress {
    pub(crate) fn new() -> Progress {
        Progress {
            start: Instant::now(),
            candidate_count: 0,
        }
    }

    pub(crate) fn tick(&mut self, assigned: usize) {
        self.candidate_count += 1;
        if self.candidate_count % PROGRESS_INTERVAL == 0 {
            debug!(
                event = "progress",
                candidates = self.candidate_count,
                assigned,
                throughput = self.candidate_count as f32
                    / self.start.elapsed().as_millis().max(1) as f32,
            );
        }
    }

    pub(crate) fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}

/// Fills one crossword from one vocabulary.
///
/// Domains are pruned once, with node consistency and then AC-3, before any search starts.
/// Search reads the pruned domains and never prunes them again.
pub struct Solver<'s> {
    crossword: &'s Crossword,
    domains: Domains,
    config: FillerConfig,
}

impl<'s> Solver<'s> {
    pub fn new(crossword: &'s Crossword, vocabulary: &Vocabulary) -> Solver<'s> {
        Solver::with_config(crossword, vocabulary, FillerConfig::default())
    }

    pub fn with_config(
        crossword: &'s Crossword,
        vocabulary: &Vocabulary,
        config: FillerConfig,
    ) -> Solver<'s> {
        Solver {
            crossword,
            domains: Domains::new(crossword, vocabulary),
            config,
        }
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn enforce_node_consistency(&mut self) {
        enforce_node_consistency(self.crossword, &mut self.domains);
    }

    pub fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> Result<(), DomainWipeout> {
        ac3(self.crossword, &mut self.domains, arcs)
    }

    /// Runs the whole pipeline. `None` means the grid cannot be filled.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.try_solve().ok()
    }

    /// Like [`Solver::solve`], but says whether propagation or search gave up.
    pub fn try_solve(&mut self) -> Result<Assignment, NoSolution> {
        info!(
            event = "solve_start",
            variable_count = self.crossword.variables().len(),
            domain_size = self.domains.size(),
        );

        self.enforce_node_consistency();
        if let Err(wipeout) = self.ac3(None) {
            info!(event = "solve_end", outcome = "inconsistent", variable = %wipeout.variable);
            return Err(wipeout.into());
        }

        let result = match self.config.strategy {
            Strategy::Recursive => {
                RecursiveFiller::new(self.config).fill(self.crossword, &self.domains)
            }
            Strategy::Stack => StackFiller::new(self.config).fill(self.crossword, &self.domains),
        };

        match &result {
            Ok(_) => info!(event = "solve_end", outcome = "filled"),
            Err(_) => info!(event = "solve_end", outcome = "exhausted"),
        }
        result
    }
}

/// Convenience wrapper around [`Solver`] with the given configuration.
pub fn fill_crossword(
    crossword: &Crossword,
    vocabulary: &Vocabulary,
    config: FillerConfig,
) -> Option<Assignment> {
    Solver::with_config(crossword, vocabulary, config).solve()
}
