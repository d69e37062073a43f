use crate::problem::{
    distance_matrix::DistanceMatrix,
    job::Stop,
    location::{Location, NodeIdx},
};

/// Reference deployment: four transporter slots per trip.
pub const DEFAULT_CAPACITY: usize = 4;

/// Where each trip's final leg lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClosingLeg {
    /// Round trip: every vehicle returns to the depot.
    Depot,
    /// One-way trip: every vehicle carries on to a shared end location.
    End(Location),
}

/// The capacity-constrained assignment formulation for one solve call:
/// depot + job locations, the scaled distance matrix, a unit demand per
/// job node and a uniform per-vehicle capacity. Built once per solve,
/// never shared across invocations.
pub struct RoutingProblem {
    locations: Vec<Location>,
    matrix: DistanceMatrix,
    demands: Vec<usize>,
    num_vehicles: usize,
    capacity: usize,
    closing_leg: ClosingLeg,
}

impl RoutingProblem {
    pub fn new(depot: Location, stops: &[Stop], capacity: usize, closing_leg: ClosingLeg) -> Self {
        let num_vehicles = stops.len().div_ceil(capacity.max(1));
        Self::with_vehicles(depot, stops, capacity, num_vehicles, closing_leg)
    }

    /// Formulation with an explicit vehicle count. A count below
    /// `ceil(jobs / capacity)` produces a problem the solver reports as
    /// infeasible.
    pub fn with_vehicles(
        depot: Location,
        stops: &[Stop],
        capacity: usize,
        num_vehicles: usize,
        closing_leg: ClosingLeg,
    ) -> Self {
        assert!(capacity > 0, "vehicle capacity must be positive");

        let mut locations = Vec::with_capacity(stops.len() + 1);
        locations.push(depot);
        locations.extend(stops.iter().map(|stop| stop.location));

        let arrival_override = match closing_leg {
            ClosingLeg::Depot => None,
            ClosingLeg::End(end) => Some(end),
        };
        let matrix = DistanceMatrix::new(&locations, arrival_override);

        let mut demands = vec![1; locations.len()];
        demands[0] = 0;

        Self {
            locations,
            matrix,
            demands,
            num_vehicles,
            capacity,
            closing_leg,
        }
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn location(&self, node: NodeIdx) -> &Location {
        &self.locations[node]
    }

    pub fn depot(&self) -> &Location {
        &self.locations[0]
    }

    pub fn demand(&self, node: NodeIdx) -> usize {
        self.demands[node.get()]
    }

    /// Job nodes only; the depot is not counted.
    pub fn num_jobs(&self) -> usize {
        self.locations.len() - 1
    }

    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn closing_leg(&self) -> ClosingLeg {
        self.closing_leg
    }

    /// The coordinate every trip's final leg is measured against.
    pub fn closing_target(&self) -> Location {
        match self.closing_leg {
            ClosingLeg::Depot => self.locations[0],
            ClosingLeg::End(end) => end,
        }
    }
}
