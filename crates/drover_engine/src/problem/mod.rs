pub mod distance_matrix;
pub mod job;
pub mod location;
pub mod routing_problem;
