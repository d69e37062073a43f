use thiserror::Error;

/// Typed solve outcomes. Nothing here is fatal to the process: a failed
/// solve never prevents a later independent solve call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The capacity and vehicle-count configuration cannot hold every
    /// job. No partial assignment is ever returned; the caller decides
    /// the fallback (e.g. more vehicles).
    #[error("infeasible: {jobs} jobs exceed {vehicles} vehicles x capacity {capacity}")]
    Infeasible {
        jobs: usize,
        vehicles: usize,
        capacity: usize,
    },

    /// The wall-clock budget expired before any feasible solution was
    /// found. Distinct from [`SolveError::Infeasible`]: retrying with a
    /// larger budget is the recommended caller action, and the engine
    /// never retries on its own.
    #[error("time budget exhausted before a feasible solution was found")]
    BudgetExhausted,
}
