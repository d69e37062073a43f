pub mod arc_costs;
pub mod construction;
pub mod deadline;
pub mod guided;
pub mod ls;
pub mod solver;
pub mod solver_params;
pub mod working_solution;
