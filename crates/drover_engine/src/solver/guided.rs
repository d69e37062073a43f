use tracing::debug;

use crate::{
    problem::{distance_matrix::DistanceMatrix, location::NodeIdx},
    solver::{
        arc_costs::ArcCosts, solver_params::GuidedLocalSearchParams,
        working_solution::WorkingSolution,
    },
};

/// Per-arc penalty counters, flat like the distance matrix.
pub struct Penalties {
    counts: Vec<i64>,
    num_nodes: usize,
}

impl Penalties {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            counts: vec![0; num_nodes * num_nodes],
            num_nodes,
        }
    }

    #[inline(always)]
    pub fn count(&self, from: NodeIdx, to: NodeIdx) -> i64 {
        self.counts[from.get() * self.num_nodes + to.get()]
    }

    pub fn bump(&mut self, from: NodeIdx, to: NodeIdx) {
        self.counts[from.get() * self.num_nodes + to.get()] += 1;
    }
}

/// Guided local search state: escapes local optima by penalizing the
/// features (arcs) of the current optimum that give the least value for
/// their cost, then re-searching on the augmented costs.
pub struct GuidedSearch {
    penalties: Penalties,
    penalty_weight: f64,
    /// Set at the first local optimum, from that solution's mean arc
    /// cost. Irrelevant before then: every penalty count is zero.
    lambda: Option<i64>,
}

impl GuidedSearch {
    pub fn new(params: GuidedLocalSearchParams, matrix: &DistanceMatrix) -> Self {
        Self {
            penalties: Penalties::new(matrix.num_nodes()),
            penalty_weight: params.penalty_weight,
            lambda: None,
        }
    }

    pub fn arc_costs<'a>(&'a self, matrix: &'a DistanceMatrix) -> ArcCosts<'a> {
        ArcCosts::augmented(matrix, &self.penalties, self.lambda.unwrap_or(0))
    }

    /// Lambda scales penalties into the same integer range as the arc
    /// costs: the weighted mean arc cost of the given solution, at
    /// least 1 so a penalty is never a no-op.
    fn lambda_for(&self, solution: &WorkingSolution, matrix: &DistanceMatrix) -> i64 {
        let mut total = 0_i64;
        let mut arcs = 0_i64;

        for route in solution.routes() {
            for (from, to) in route.arcs() {
                total += matrix.scaled_cost(from, to);
                arcs += 1;
            }
        }

        let mean = if arcs == 0 { 0 } else { total / arcs };
        (((mean as f64) * self.penalty_weight).round() as i64).max(1)
    }

    /// Called at a local optimum: bump the penalty of every arc with
    /// maximal utility `cost / (1 + penalty)`, so expensive arcs the
    /// search keeps relying on become less attractive.
    pub fn penalize_local_optimum(
        &mut self,
        solution: &WorkingSolution,
        matrix: &DistanceMatrix,
    ) {
        if self.lambda.is_none() {
            self.lambda = Some(self.lambda_for(solution, matrix));
        }

        let mut max_utility = 0.0_f64;
        let mut worst: Vec<(NodeIdx, NodeIdx)> = Vec::new();

        for route in solution.routes() {
            for (from, to) in route.arcs() {
                let cost = matrix.scaled_cost(from, to) as f64;
                let utility = cost / (1.0 + self.penalties.count(from, to) as f64);

                if utility > max_utility {
                    max_utility = utility;
                    worst.clear();
                    worst.push((from, to));
                } else if utility == max_utility {
                    worst.push((from, to));
                }
            }
        }

        for (from, to) in &worst {
            self.penalties.bump(*from, *to);
        }

        debug!(
            penalized = worst.len(),
            max_utility, "penalized arcs of local optimum"
        );
    }
}
