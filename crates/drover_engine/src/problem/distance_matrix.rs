use crate::problem::location::{Location, NodeIdx};

/// Multiplier taking miles into the integer arc costs the combinatorial
/// search ranks candidates with. Truncation loses less than a metre per
/// leg; real distances are recomputed at materialization.
pub const COST_SCALE: f64 = 1000.0;

/// Pairwise travel distances in miles over depot + job locations,
/// stored flat: `index = from * num_nodes + to`.
///
/// In one-way mode the distinct end location is substituted on node 0's
/// arrival side only, so `matrix[i][0]` is measured against the end
/// coordinate while `matrix[0][j]` still departs from the depot. The
/// matrix is asymmetric by construction exactly in that case.
pub struct DistanceMatrix {
    miles: Vec<f64>,
    num_nodes: usize,
}

impl DistanceMatrix {
    pub fn new(locations: &[Location], arrival_override: Option<Location>) -> Self {
        let num_nodes = locations.len();
        let mut miles = vec![0.0; num_nodes * num_nodes];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }

                let to = match (j, arrival_override.as_ref()) {
                    (0, Some(end)) => end,
                    _ => to,
                };

                miles[i * num_nodes + j] = from.miles_to(to);
            }
        }

        Self { miles, num_nodes }
    }

    #[inline(always)]
    fn index(&self, from: NodeIdx, to: NodeIdx) -> usize {
        from.get() * self.num_nodes + to.get()
    }

    #[inline(always)]
    pub fn miles(&self, from: NodeIdx, to: NodeIdx) -> f64 {
        if from == to {
            return 0.0;
        }

        self.miles[self.index(from, to)]
    }

    /// Integer-scaled arc cost used only for ranking candidate routes,
    /// never reported to the caller.
    #[inline(always)]
    pub fn scaled_cost(&self, from: NodeIdx, to: NodeIdx) -> i64 {
        (self.miles(from, to) * COST_SCALE) as i64
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }
}
