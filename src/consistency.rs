//! Domain pruning run once before search: node consistency on word length, then AC-3 over
//! every crossing.

use crate::crossword::{Crossword, Variable};
use crate::domain::Domains;
use crate::error::DomainWipeout;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

pub type Arc = (Variable, Variable);

/// Drops every word whose length differs from its variable's length.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) {
    let mut removed = 0;
    for variable in crossword.variables() {
        removed += domains.retain(variable, |word| word.chars().count() == variable.length);
    }
    debug!(event = "node_consistency", removed);
}

/// Makes `x` arc consistent with `y`: drops words of `x` that no word of `y` agrees with at
/// their shared cell. Returns whether anything was dropped.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
    let (i, j) = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    let supported: FxHashSet<char> = domains
        .words(y)
        .iter()
        .filter_map(|word| word.chars().nth(j))
        .collect();

    let removed = domains.retain(x, |word| {
        word.chars()
            .nth(i)
            .map_or(false, |c| supported.contains(&c))
    });

    if removed > 0 {
        trace!(event = "revise", x = %x, y = %y, removed);
    }
    removed > 0
}

/// Every ordered pair of distinct variables, in variable order.
pub fn all_arcs(crossword: &Crossword) -> Vec<Arc> {
    let variables = crossword.variables();
    let mut arcs = Vec::with_capacity(variables.len() * variables.len().saturating_sub(1));
    for x in variables {
        for y in variables {
            if x != y {
                arcs.push((*x, *y));
            }
        }
    }
    arcs
}

/// AC-3. Starts from `arcs`, or from every arc when `None`, and revises until the queue drains.
///
/// Fails as soon as a revision leaves a domain empty, or if any domain is empty once the queue
/// drains.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: Option<Vec<Arc>>,
) -> Result<(), DomainWipeout> {
    let mut queue: VecDeque<Arc> = arcs.unwrap_or_else(|| all_arcs(crossword)).into();
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop_front() {
        if !revise(crossword, domains, &x, &y) {
            continue;
        }
        revisions += 1;

        if domains.is_empty(&x) {
            debug!(event = "ac3", revisions, wipeout = %x);
            return Err(DomainWipeout { variable: x });
        }

        for z in crossword.neighbors(&x) {
            if *z != y {
                queue.push_back((*z, x));
            }
        }
    }

    // node consistency alone can leave a domain empty without any revision noticing
    if let Some(variable) = crossword
        .variables()
        .iter()
        .find(|variable| domains.is_empty(variable))
    {
        debug!(event = "ac3", revisions, wipeout = %variable);
        return Err(DomainWipeout {
            variable: *variable,
        });
    }

    debug!(event = "ac3", revisions, remaining = domains.size());
    Ok(())
}
