use smallvec::SmallVec;

use crate::{
    define_index_newtype,
    problem::location::{DEPOT_NODE, NodeIdx},
    solver::arc_costs::ArcCosts,
};

define_index_newtype!(RouteIdx, Route);

/// One vehicle's ordered stop list. The depot sentinel is implicit at
/// both ends and never stored.
#[derive(Clone, Debug, Default)]
pub struct Route {
    stops: SmallVec<[NodeIdx; 8]>,
    load: usize,
}

impl Route {
    pub fn stops(&self) -> &[NodeIdx] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn load(&self) -> usize {
        self.load
    }

    pub fn node(&self, pos: usize) -> NodeIdx {
        self.stops[pos]
    }

    /// The node preceding position `pos`, with the depot at the front.
    pub fn before(&self, pos: usize) -> NodeIdx {
        if pos == 0 { DEPOT_NODE } else { self.stops[pos - 1] }
    }

    /// The node following position `pos`, with the depot at the back.
    pub fn after(&self, pos: usize) -> NodeIdx {
        if pos + 1 >= self.stops.len() {
            DEPOT_NODE
        } else {
            self.stops[pos + 1]
        }
    }

    /// The node currently occupying an insertion slot `0..=len`; the
    /// one-past-the-end slot is the closing depot sentinel.
    pub fn at_or_depot(&self, pos: usize) -> NodeIdx {
        if pos >= self.stops.len() {
            DEPOT_NODE
        } else {
            self.stops[pos]
        }
    }

    pub fn push(&mut self, node: NodeIdx, demand: usize) {
        self.stops.push(node);
        self.load += demand;
    }

    pub fn insert(&mut self, pos: usize, node: NodeIdx, demand: usize) {
        self.stops.insert(pos, node);
        self.load += demand;
    }

    pub fn remove(&mut self, pos: usize, demand: usize) -> NodeIdx {
        self.load -= demand;
        self.stops.remove(pos)
    }

    pub fn swap_node(&mut self, pos: usize, node: NodeIdx) -> NodeIdx {
        std::mem::replace(&mut self.stops[pos], node)
    }

    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        self.stops[from..=to].reverse();
    }

    /// Route cost including both depot sentinel arcs.
    pub fn cost(&self, costs: &ArcCosts<'_>) -> i64 {
        let mut total = 0;
        let mut prev = DEPOT_NODE;

        for &stop in &self.stops {
            total += costs.arc(prev, stop);
            prev = stop;
        }

        total + costs.arc(prev, DEPOT_NODE)
    }

    /// Arcs of this route in travel order, depot sentinels included.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        let first = self.stops.first().copied().unwrap_or(DEPOT_NODE);
        let last = self.stops.last().copied().unwrap_or(DEPOT_NODE);

        std::iter::once((DEPOT_NODE, first))
            .chain(self.stops.windows(2).map(|pair| (pair[0], pair[1])))
            .chain(std::iter::once((last, DEPOT_NODE)))
            .filter(|(from, to)| from != to)
    }
}

/// The solver's mutable per-vehicle node assignment. Feasibility
/// (capacity never exceeded) is an invariant the operators preserve.
#[derive(Clone, Debug)]
pub struct WorkingSolution {
    routes: Vec<Route>,
    capacity: usize,
}

impl WorkingSolution {
    pub fn empty(num_vehicles: usize, capacity: usize) -> Self {
        Self {
            routes: vec![Route::default(); num_vehicles],
            capacity,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, index: RouteIdx) -> &Route {
        &self.routes[index]
    }

    pub fn route_mut(&mut self, index: RouteIdx) -> &mut Route {
        &mut self.routes[index]
    }

    /// Disjoint mutable access to two routes of an inter-route move.
    pub fn route_pair_mut(&mut self, r1: RouteIdx, r2: RouteIdx) -> (&mut Route, &mut Route) {
        assert_ne!(r1, r2, "route pair must be distinct");

        if r1 < r2 {
            let (head, tail) = self.routes.split_at_mut(r2.get());
            (&mut head[r1.get()], &mut tail[0])
        } else {
            let (head, tail) = self.routes.split_at_mut(r1.get());
            (&mut tail[0], &mut head[r2.get()])
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    pub fn cost(&self, costs: &ArcCosts<'_>) -> i64 {
        self.routes.iter().map(|route| route.cost(costs)).sum()
    }

    pub fn into_node_sequences(self) -> Vec<Vec<NodeIdx>> {
        self.routes
            .into_iter()
            .map(|route| route.stops.into_vec())
            .collect()
    }
}
