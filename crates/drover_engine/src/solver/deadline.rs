use std::time::{Duration, Instant};

use jiff::SignedDuration;

/// Wall-clock budget for one search. Cancellation is budget-based only;
/// nothing external stops a solve.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn starting_now(limit: SignedDuration) -> Self {
        let limit = Duration::try_from(limit.max(SignedDuration::ZERO))
            .unwrap_or(Duration::ZERO);

        Self {
            expires_at: Instant::now() + limit,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
