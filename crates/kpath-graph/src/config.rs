//! Configuration for k-shortest path searches.
//!
//! [`KspConfig`] bounds a Yen search by path count, by cost excess over the
//! shortest path, or both.
//!
//! # JSON form
//!
//! ```json
//! { "max_paths": 5, "cost_budget": 2.5 }
//! ```
//!
//! `null` for either field means unbounded.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Default number of paths returned.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Search bounds for Yen's k-shortest paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KspConfig {
    /// Maximum number of paths to return (None = bounded by cost only).
    /// Default: 10
    pub max_paths: Option<usize>,

    /// Maximum weight excess over the shortest path.
    /// Must be nonnegative. Default: infinity.
    #[serde(with = "unbounded_f64")]
    pub cost_budget: f64,
}

impl Default for KspConfig {
    fn default() -> Self {
        Self {
            max_paths: Some(DEFAULT_MAX_PATHS),
            cost_budget: f64::INFINITY,
        }
    }
}

impl KspConfig {
    /// Build from a signed path count. Negative `k` means unbounded by count.
    ///
    /// # Example
    /// ```
    /// use kpath_graph::config::KspConfig;
    /// let config = KspConfig::from_k(-1, 0.5);
    /// assert_eq!(config.max_paths, None);
    /// assert_eq!(config.cost_budget, 0.5);
    /// ```
    #[must_use]
    pub fn from_k(k: i64, cost_budget: f64) -> Self {
        Self {
            max_paths: usize::try_from(k).ok(),
            cost_budget,
        }
    }

    /// Config with no count or cost bound.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_paths: None,
            cost_budget: f64::INFINITY,
        }
    }

    /// Builder: set maximum number of paths.
    #[must_use]
    pub fn max_paths(mut self, max: usize) -> Self {
        self.max_paths = Some(max);
        self
    }

    /// Builder: remove the path count bound.
    #[must_use]
    pub fn unlimited_paths(mut self) -> Self {
        self.max_paths = None;
        self
    }

    /// Builder: set cost budget.
    #[must_use]
    pub fn cost_budget(mut self, budget: f64) -> Self {
        self.cost_budget = budget;
        self
    }

    /// Whether `accepted` paths already satisfy the count bound.
    #[must_use]
    pub fn is_full(&self, accepted: usize) -> bool {
        self.max_paths.is_some_and(|max| accepted >= max)
    }

    /// Validate configuration parameters.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - cost budget is negative or NaN
    pub fn validate(&self) -> GraphResult<()> {
        if self.cost_budget.is_nan() {
            return Err(GraphError::InvalidConfig(
                "cost_budget cannot be NaN".to_string(),
            ));
        }

        if self.cost_budget < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "cost_budget must be nonnegative (got {})",
                self.cost_budget
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// * `GraphError::Serialization` - malformed JSON
    /// * `GraphError::InvalidConfig` - values out of range
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Serialize infinity as `null`, since JSON has no infinite numbers.
mod unbounded_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() && value.is_sign_positive() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
