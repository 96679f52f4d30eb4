use std::fmt;

use hargalens_features::FeatureVector;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PredictionError {
    #[display("feature vector has {actual} fields, model expects {expected}")]
    VectorLength { expected: usize, actual: usize },
    #[display("model produced a non-finite estimate")]
    NonFiniteEstimate,
    #[display("model inference failed: {message}")]
    Model { message: String },
}

/// An opaque trained regression model.
///
/// Implementations take an ordered numeric vector and return a scalar price
/// estimate. The gateway never inspects a model beyond this operation.
pub trait Predictor: fmt::Debug {
    /// Scores one feature vector, in training-time field order.
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError>;
}

/// A price estimate in Indonesian rupiah.
///
/// Always non-negative; rendered to users as an integer amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PriceEstimate(f64);

impl PriceEstimate {
    /// The estimate truncated to whole rupiah.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn rupiah(self) -> u64 {
        self.0 as u64
    }
}

/// Wraps the loaded predictor and isolates inference failures.
///
/// One inference attempt per request, no retries: a failure is terminal for
/// that request and is reported as a [`PredictionError`] for the boundary to
/// display. The gateway never panics on model misbehavior.
#[derive(Debug)]
pub struct Gateway {
    predictor: Box<dyn Predictor>,
}

impl Gateway {
    #[must_use]
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Runs one inference over the vector and returns the price estimate.
    ///
    /// Negative model output clamps to zero: an estimate is a price, and the
    /// clamp keeps a noisy extrapolation from rendering as a negative amount.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError`] if the model rejects the vector, fails
    /// internally, or produces a non-finite value.
    pub fn estimate(&self, vector: &FeatureVector) -> Result<PriceEstimate, PredictionError> {
        let raw = self.predictor.predict(&vector.to_array())?;
        if !raw.is_finite() {
            return Err(PredictionError::NonFiniteEstimate);
        }
        Ok(PriceEstimate(raw.max(0.0)))
    }
}
