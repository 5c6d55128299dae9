//! Annealing run configuration.

use crate::error::{AnnealError, Result};

/// Configuration for an annealing run.
///
/// The temperature scale belongs to the problem's schedule, so only the
/// iteration budget and the seed live here.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_k_max(2000)
///     .with_seed(42);
/// assert_eq!(config.k_max, 2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Maximum number of loop iterations.
    pub k_max: usize,

    /// Random seed for reproducibility. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            k_max: 200,
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Sets the iteration budget.
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.k_max == 0 {
            return Err(AnnealError::InvalidParameter("k_max must be positive".into()));
        }
        Ok(())
    }
}
