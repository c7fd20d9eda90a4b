use crate::field::UNSET;

/// Default bound on reconstructed path length.
pub const MAX_STEPS: usize = 500;

/// Tunables for a [`Router`](crate::Router).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// A walk fails once it has recorded this many steps, so successful
    /// paths hold at most `max_steps - 1` directions.
    pub max_steps: usize,
    /// Destination costs at or above this value count as never reached.
    pub unset_threshold: i32,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            unset_threshold: UNSET,
        }
    }
}

impl RouteConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_unset_threshold(mut self, unset_threshold: i32) -> Self {
        self.unset_threshold = unset_threshold;
        self
    }
}
