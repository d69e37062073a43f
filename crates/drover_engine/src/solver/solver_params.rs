use jiff::SignedDuration;

/// Search configuration for one solve call. Every knob the reference
/// deployment hardcodes lives here so callers (and tests) can swap the
/// strategies: a near-zero budget with [`ImprovementStrategy::None`]
/// gives a fully deterministic construction-only solve.
#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Wall-clock budget for the whole search. Expiry is a normal
    /// termination condition, not a fault.
    pub time_limit: SignedDuration,
    pub construction: ConstructionStrategy,
    pub improvement: ImprovementStrategy,
    /// Seeds the improvement phase's exploration order. Construction
    /// takes no randomness.
    pub seed: u64,
}

#[derive(Clone, Copy, Debug)]
pub enum ConstructionStrategy {
    /// Greedy path extension: each vehicle repeatedly takes the
    /// cheapest arc to an unassigned node until its capacity is full.
    CheapestArc,
}

#[derive(Clone, Debug)]
pub enum ImprovementStrategy {
    GuidedLocalSearch(GuidedLocalSearchParams),
    /// Construction only. Deterministic for identical input ordering.
    None,
}

#[derive(Clone, Copy, Debug)]
pub struct GuidedLocalSearchParams {
    /// Alpha: penalty weight as a fraction of the mean arc cost.
    pub penalty_weight: f64,
}

impl Default for GuidedLocalSearchParams {
    fn default() -> Self {
        Self {
            penalty_weight: 0.2,
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            time_limit: SignedDuration::from_secs(30),
            construction: ConstructionStrategy::CheapestArc,
            improvement: ImprovementStrategy::GuidedLocalSearch(
                GuidedLocalSearchParams::default(),
            ),
            seed: 0,
        }
    }
}

impl SolverParams {
    /// Deterministic configuration for unit tests and quick runs.
    pub fn construction_only() -> Self {
        Self {
            improvement: ImprovementStrategy::None,
            ..Self::default()
        }
    }

    pub fn with_time_limit(mut self, time_limit: SignedDuration) -> Self {
        self.time_limit = time_limit;
        self
    }
}
