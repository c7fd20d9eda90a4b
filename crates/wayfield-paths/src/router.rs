use wayfield_core::Direction;

use crate::config::RouteConfig;

/// Central coordinator for path reconstruction.
///
/// A `Router` owns the bounded step buffer a walk records into, so repeated
/// queries incur no allocations after construction. Reconstructed paths are
/// returned as slices borrowed from that buffer and stay valid until the
/// next query. Give each thread its own `Router`; they may all read the same
/// distance field.
#[derive(Debug, Clone)]
pub struct Router {
    pub(crate) config: RouteConfig,
    pub(crate) steps: Vec<Direction>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with the default [`RouteConfig`].
    pub fn new() -> Self {
        Self::with_config(RouteConfig::default())
    }

    pub fn with_config(config: RouteConfig) -> Self {
        Self {
            config,
            steps: Vec::with_capacity(config.max_steps),
        }
    }

    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Replace the configuration, growing the step buffer if the new limit
    /// needs it.
    pub fn set_config(&mut self, config: RouteConfig) {
        self.config = config;
        self.steps.clear();
        if self.steps.capacity() < config.max_steps {
            self.steps.reserve_exact(config.max_steps);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Router {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.config, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Router {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = <RouteConfig as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Router::with_config(config))
    }
}
