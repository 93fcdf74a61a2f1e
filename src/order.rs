use crate::{assignment::Assignment, crossword::Crossword, crossword::Variable, domain::Domains};
use core::cmp::Ordering;
use std::str::FromStr;

/// How search picks the next variable to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableOrder {
    /// First unassigned variable in scan order.
    Unordered,
    /// Fewest remaining words, ties going to the variable with the most crossings.
    MinimumRemainingValues,
}

impl Default for VariableOrder {
    fn default() -> VariableOrder {
        VariableOrder::Unordered
    }
}

impl FromStr for VariableOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<VariableOrder, String> {
        match s {
            "unordered" => Ok(VariableOrder::Unordered),
            "mrv" => Ok(VariableOrder::MinimumRemainingValues),
            other => Err(format!("Unknown variable order: {}", other)),
        }
    }
}

/// How search orders the words it tries for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrder {
    /// Domain order.
    Domain,
    /// Words ruling out the fewest options for unassigned neighbors first.
    LeastConstraining,
}

impl Default for ValueOrder {
    fn default() -> ValueOrder {
        ValueOrder::Domain
    }
}

impl FromStr for ValueOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<ValueOrder, String> {
        match s {
            "domain" => Ok(ValueOrder::Domain),
            "lcv" => Ok(ValueOrder::LeastConstraining),
            other => Err(format!("Unknown value order: {}", other)),
        }
    }
}

#[derive(Eq, PartialEq, Debug)]
pub(crate) struct VariableScore {
    remaining: usize,
    degree: usize,
}

impl PartialOrd for VariableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariableScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining words sorts first
        if self.remaining != other.remaining {
            return self.remaining.cmp(&other.remaining);
        }
        // more crossings sorts first
        other.degree.cmp(&self.degree)
    }
}

pub(crate) fn score_variable(
    variable: &Variable,
    crossword: &Crossword,
    domains: &Domains,
) -> VariableScore {
    VariableScore {
        remaining: domains.len(variable),
        degree: crossword.neighbors(variable).len(),
    }
}

pub(crate) fn select_unassigned_variable(
    order: VariableOrder,
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Variable> {
    let mut unassigned = crossword
        .variables()
        .iter()
        .filter(|variable| !assignment.contains(variable));

    match order {
        VariableOrder::Unordered => unassigned.next().copied(),
        VariableOrder::MinimumRemainingValues => unassigned
            .min_by_key(|variable| score_variable(variable, crossword, domains))
            .copied(),
    }
}

/// How many words of unassigned neighbors become impossible if `variable` takes `word`.
pub(crate) fn ruled_out(
    variable: &Variable,
    word: &str,
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> usize {
    crossword
        .neighbors(variable)
        .iter()
        .filter(|neighbor| !assignment.contains(neighbor))
        .map(|neighbor| {
            let (i, j) = match crossword.overlap(variable, neighbor) {
                Some(overlap) => overlap,
                None => return 0,
            };
            let letter = word.chars().nth(i);
            domains
                .words(neighbor)
                .iter()
                .filter(|other| other.as_str() == word || other.chars().nth(j) != letter)
                .count()
        })
        .sum()
}

pub(crate) fn order_domain_values<'d>(
    order: ValueOrder,
    variable: &Variable,
    crossword: &Crossword,
    domains: &'d Domains,
    assignment: &Assignment,
) -> Vec<&'d str> {
    let mut words: Vec<&str> = domains
        .words(variable)
        .iter()
        .map(|word| word.as_str())
        .collect();

    if order == ValueOrder::LeastConstraining {
        words.sort_by_key(|word| ruled_out(variable, word, crossword, domains, assignment));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::{
        order_domain_values, ruled_out, select_unassigned_variable, ValueOrder, VariableOrder,
        VariableScore,
    };
    use crate::{
        assignment::Assignment,
        consistency::enforce_node_consistency,
        crossword::{Crossword, Direction, Variable},
        domain::Domains,
        vocabulary::Vocabulary,
    };
    use std::cmp::Ordering;

    fn ring() -> (Crossword, Domains) {
        let crossword = Crossword::new(
            "
#___#
#_##_
#_##_
#_##_
#____
",
        )
        .unwrap();
        let vocabulary = Vocabulary::new(vec![
            "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN",
        ]);
        let mut domains = Domains::new(&crossword, &vocabulary);
        enforce_node_consistency(&crossword, &mut domains);
        (crossword, domains)
    }

    #[test]
    fn variable_score_ord_works() {
        assert_eq!(
            VariableScore {
                remaining: 2,
                degree: 1
            }
            .cmp(&VariableScore {
                remaining: 3,
                degree: 5
            }),
            Ordering::Less
        );

        assert_eq!(
            VariableScore {
                remaining: 3,
                degree: 2
            }
            .cmp(&VariableScore {
                remaining: 3,
                degree: 1
            }),
            Ordering::Less
        );
    }

    #[test]
    fn unordered_takes_first_unassigned() {
        let (crossword, domains) = ring();
        let left = Variable::new(0, 1, Direction::Down, 5);
        let top = Variable::new(0, 1, Direction::Across, 3);

        assert_eq!(
            Some(left),
            select_unassigned_variable(
                VariableOrder::Unordered,
                &crossword,
                &domains,
                &Assignment::new()
            )
        );

        let assignment = Assignment::new().with(left, "SEVEN");
        assert_eq!(
            Some(top),
            select_unassigned_variable(VariableOrder::Unordered, &crossword, &domains, &assignment)
        );
    }

    #[test]
    fn mrv_prefers_small_domains_then_degree() {
        let (crossword, domains) = ring();
        let left = Variable::new(0, 1, Direction::Down, 5);
        let bottom = Variable::new(4, 1, Direction::Across, 4);

        // left and bottom tie on three words and two crossings; left is scanned first
        assert_eq!(
            Some(left),
            select_unassigned_variable(
                VariableOrder::MinimumRemainingValues,
                &crossword,
                &domains,
                &Assignment::new()
            )
        );

        let assignment = Assignment::new().with(left, "SEVEN");
        assert_eq!(
            Some(bottom),
            select_unassigned_variable(
                VariableOrder::MinimumRemainingValues,
                &crossword,
                &domains,
                &assignment
            )
        );

        let everything = crossword
            .variables()
            .iter()
            .fold(Assignment::new(), |assignment, variable| {
                assignment.with(*variable, "X")
            });
        assert_eq!(
            None,
            select_unassigned_variable(
                VariableOrder::MinimumRemainingValues,
                &crossword,
                &domains,
                &everything
            )
        );
    }

    #[test]
    fn lcv_orders_by_ruled_out() {
        let (crossword, domains) = ring();
        let bottom = Variable::new(4, 1, Direction::Across, 4);

        let none = Assignment::new();
        assert_eq!(5, ruled_out(&bottom, "FIVE", &crossword, &domains, &none));
        assert_eq!(6, ruled_out(&bottom, "FOUR", &crossword, &domains, &none));
        assert_eq!(4, ruled_out(&bottom, "NINE", &crossword, &domains, &none));

        // once left is filled only right is counted
        let left = Variable::new(0, 1, Direction::Down, 5);
        let assignment = none.with(left, "SEVEN");
        assert_eq!(2, ruled_out(&bottom, "NINE", &crossword, &domains, &assignment));

        assert_eq!(
            vec!["FIVE", "FOUR", "NINE"],
            order_domain_values(
                ValueOrder::Domain,
                &bottom,
                &crossword,
                &domains,
                &Assignment::new()
            )
        );
        assert_eq!(
            vec!["NINE", "FIVE", "FOUR"],
            order_domain_values(
                ValueOrder::LeastConstraining,
                &bottom,
                &crossword,
                &domains,
                &Assignment::new()
            )
        );
    }
}
