use crate::{
    problem::{distance_matrix::DistanceMatrix, location::NodeIdx},
    solver::guided::Penalties,
};

/// Integer arc costs the local search ranks moves with: the scaled
/// distance matrix, optionally augmented with guided local search
/// penalties. The augmented view steers the search only; the best
/// solution is always tracked under the plain view.
#[derive(Clone, Copy)]
pub struct ArcCosts<'a> {
    matrix: &'a DistanceMatrix,
    penalties: Option<(&'a Penalties, i64)>,
}

impl<'a> ArcCosts<'a> {
    pub fn plain(matrix: &'a DistanceMatrix) -> Self {
        Self {
            matrix,
            penalties: None,
        }
    }

    pub fn augmented(matrix: &'a DistanceMatrix, penalties: &'a Penalties, lambda: i64) -> Self {
        Self {
            matrix,
            penalties: Some((penalties, lambda)),
        }
    }

    #[inline(always)]
    pub fn arc(&self, from: NodeIdx, to: NodeIdx) -> i64 {
        let cost = self.matrix.scaled_cost(from, to);

        match self.penalties {
            Some((penalties, lambda)) => cost + lambda * penalties.count(from, to),
            None => cost,
        }
    }
}
