use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Expression, Operator};
use crate::solver::{SolverConfig, SolverError};
use crate::utils::validate_numbers;

/// A distinct solution: its rendering and the first tree that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub infix: String,
    pub expression: Expression,
}

/// Raw result of a search before deduplication
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Every complete tree that hit the target, duplicates included
    pub matches: Vec<Expression>,
    /// Number of complete trees evaluated
    pub explored: usize,
}

impl SearchOutcome {
    fn merge(mut self, other: SearchOutcome) -> Self {
        self.matches.extend(other.matches);
        self.explored += other.explored;
        self
    }
}

/// Exhaustive search over all ways of reducing a working list of
/// expressions to a single tree
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the numbers, turn them into leaves and solve.
    ///
    /// # Errors
    ///
    /// Fails when the input is empty or holds a negative or non-finite value.
    pub fn solve_numbers(&self, numbers: &[f64]) -> Result<Vec<String>, SolverError> {
        Ok(self
            .find_solutions_for(numbers)?
            .into_iter()
            .map(|solution| solution.infix)
            .collect())
    }

    /// Same as [`solve_numbers`](Self::solve_numbers) but keeps the trees.
    ///
    /// # Errors
    ///
    /// Fails when the input is empty or holds a negative or non-finite value.
    pub fn find_solutions_for(&self, numbers: &[f64]) -> Result<Vec<Solution>, SolverError> {
        validate_numbers(numbers)?;

        // `+ 0.0` folds a negative zero into zero so it never renders as "-0"
        let leaves = numbers
            .iter()
            .map(|&n| Expression::number(n + 0.0))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.find_solutions(leaves))
    }

    /// Distinct solution strings in lexicographic order
    pub fn solve(&self, working: Vec<Expression>) -> Vec<String> {
        self.find_solutions(working)
            .into_iter()
            .map(|solution| solution.infix)
            .collect()
    }

    /// Distinct solutions sorted by their infix rendering
    pub fn find_solutions(&self, working: Vec<Expression>) -> Vec<Solution> {
        info!(
            "Searching {} expressions for {} (pruning: {}, parallel: {})",
            working.len(),
            self.config.target,
            self.config.prune_commutative,
            self.config.parallel
        );
        let started = Instant::now();

        let outcome = self.search(&working);
        let raw_matches = outcome.matches.len();

        let mut by_infix = BTreeMap::new();
        for expression in outcome.matches {
            by_infix
                .entry(expression.render_infix())
                .or_insert(expression);
        }

        info!(
            "Evaluated {} complete expressions, {} matched, {} distinct, took {:?}",
            outcome.explored,
            raw_matches,
            by_infix.len(),
            started.elapsed()
        );

        by_infix
            .into_iter()
            .map(|(infix, expression)| Solution { infix, expression })
            .collect()
    }

    /// Run the search and return every match, duplicates included.
    pub fn search(&self, nodes: &[Expression]) -> SearchOutcome {
        if !self.config.parallel || nodes.len() < 2 {
            let mut outcome = SearchOutcome::default();
            self.reduce(nodes, &mut outcome);
            return outcome;
        }

        let values = self.evaluate_all(nodes);
        ordered_pairs(nodes.len())
            .into_par_iter()
            .map(|(i, j)| {
                let mut outcome = SearchOutcome::default();
                self.expand_pair(nodes, &values, i, j, &mut outcome);
                outcome
            })
            .reduce(SearchOutcome::default, SearchOutcome::merge)
    }

    fn reduce(&self, nodes: &[Expression], outcome: &mut SearchOutcome) {
        match nodes {
            [] => {}
            [complete] => self.check_complete(complete, outcome),
            _ => {
                let values = self.evaluate_all(nodes);
                for (i, j) in ordered_pairs(nodes.len()) {
                    self.expand_pair(nodes, &values, i, j, outcome);
                }
            }
        }
    }

    /// Combine the trees at `i` and `j` with every applicable operator and
    /// recurse on the shortened list. Each new node is dropped as soon as its
    /// branch returns.
    fn expand_pair(
        &self,
        nodes: &[Expression],
        values: &[Option<f64>],
        i: usize,
        j: usize,
        outcome: &mut SearchOutcome,
    ) {
        let (Some(a), Some(b)) = (nodes.get(i), nodes.get(j)) else {
            return;
        };
        let divisor = values.get(j).copied().flatten();

        let mut next: Vec<Expression> = nodes
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, expr)| expr.clone())
            .collect();

        for op in Operator::ALL {
            if op.is_commutative() && self.config.prune_commutative && i > j {
                continue;
            }
            if op == Operator::Div && !divisor.is_some_and(|v| v.abs() > self.config.tolerance) {
                continue;
            }

            next.push(op.combine(a.clone(), b.clone()));
            self.reduce(&next, outcome);
            next.pop();
        }
    }

    fn evaluate_all(&self, nodes: &[Expression]) -> Vec<Option<f64>> {
        nodes
            .iter()
            .map(|node| node.evaluate_with_tolerance(self.config.tolerance).ok())
            .collect()
    }

    fn check_complete(&self, tree: &Expression, outcome: &mut SearchOutcome) {
        outcome.explored += 1;
        match tree.evaluate_with_tolerance(self.config.tolerance) {
            Ok(value) if (value - self.config.target).abs() <= self.config.tolerance => {
                debug!("Match: {} = {}", tree, value);
                outcome.matches.push(tree.clone());
            }
            Ok(_) => {}
            Err(e) => debug!("Discarding {}: {}", tree, e),
        }
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Every `(i, j)` with `i != j`, both orders
fn ordered_pairs(len: usize) -> Vec<(usize, usize)> {
    (0..len)
        .flat_map(|i| (0..len).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect()
}
