use crate::solver::{
    arc_costs::ArcCosts,
    ls::{
        inter_relocate::InterRelocateOperator, inter_swap::InterSwapOperator,
        relocate::RelocateOperator, two_opt::TwoOptOperator,
    },
    working_solution::{RouteIdx, WorkingSolution},
};

/// Every job node occupies exactly one capacity slot, so moves shift
/// loads by whole slots.
pub const SLOT_DEMAND: usize = 1;

pub trait LocalSearchOperator: Sized {
    /// Enumerates candidate moves for a route pair; intra-route
    /// operators only fire when both sides of the pair are the same.
    fn generate_moves<C>(solution: &WorkingSolution, pair: (RouteIdx, RouteIdx), consumer: C)
    where
        C: FnMut(Self);

    /// Cost change of the move under the given arc-cost view; negative
    /// is an improvement.
    fn cost_delta(&self, solution: &WorkingSolution, costs: &ArcCosts<'_>) -> i64;

    /// Whether applying the move keeps every route within capacity.
    fn is_valid(&self, solution: &WorkingSolution) -> bool;

    fn apply(&self, solution: &mut WorkingSolution);
}

#[derive(Debug)]
pub enum LocalSearchMove {
    /// Moves one stop to another position within the same route.
    Relocate(RelocateOperator),
    /// Reverses a segment within one route, uncrossing its legs.
    TwoOpt(TwoOptOperator),
    /// Moves one stop from one route into another.
    InterRelocate(InterRelocateOperator),
    /// Exchanges two stops between two different routes.
    InterSwap(InterSwapOperator),
}

impl LocalSearchMove {
    pub fn operator_name(&self) -> &'static str {
        match self {
            LocalSearchMove::Relocate { .. } => "Relocate",
            LocalSearchMove::TwoOpt { .. } => "Two-Opt",
            LocalSearchMove::InterRelocate { .. } => "Inter-Relocate",
            LocalSearchMove::InterSwap { .. } => "Inter-Swap",
        }
    }

    pub fn apply(&self, solution: &mut WorkingSolution) {
        match self {
            LocalSearchMove::Relocate(op) => op.apply(solution),
            LocalSearchMove::TwoOpt(op) => op.apply(solution),
            LocalSearchMove::InterRelocate(op) => op.apply(solution),
            LocalSearchMove::InterSwap(op) => op.apply(solution),
        }
    }
}
