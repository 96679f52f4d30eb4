use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use hargalens_features::{FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};

use crate::{PredictionError, Predictor};

/// A trained linear regression model, stored as a JSON artifact.
///
/// The artifact records the feature names it was trained with, in order.
/// [`LinearModel::load`] rejects an artifact whose feature list does not
/// match [`FEATURE_NAMES`] exactly, so a misaligned model fails at startup
/// instead of silently producing estimates from shuffled inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Loads a model artifact from a JSON file, once, at process start.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or parsed, or if the artifact's
    /// feature list disagrees with the order this crate builds vectors in.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open model file {}", path.display()))?;

        let reader = BufReader::new(file);
        let model: LinearModel = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse model file {}", path.display()))?;

        model
            .validate()
            .with_context(|| format!("invalid model file {}", path.display()))?;
        Ok(model)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.feature_names != FEATURE_NAMES {
            bail!(
                "model '{}' was trained on features {:?}, expected {FEATURE_NAMES:?}",
                self.name,
                self.feature_names,
            );
        }
        if self.coefficients.len() != FEATURE_COUNT {
            bail!(
                "model '{}' has {} coefficients, expected {FEATURE_COUNT}",
                self.name,
                self.coefficients.len(),
            );
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictionError::VectorLength {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let estimate = self.intercept
            + features
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>();
        Ok(estimate)
    }
}
