//! The predictor gateway: a thin, failure-isolating wrapper around the
//! trained price model.
//!
//! The model itself is opaque to the rest of the system. It is loaded once
//! at process start from an external artifact and exposes a single
//! operation: given an ordered numeric vector, return a scalar price
//! estimate. This crate does not retrain, update, or judge the model.
//!
//! # Architecture
//!
//! - [`Predictor`] is the seam: any regression model that can score a
//!   feature array implements it. Callers only ever see the trait.
//! - [`LinearModel`] is the artifact format this repo ships — a JSON
//!   document with a name, training timestamp, intercept, and one
//!   coefficient per feature in training-time order.
//! - [`Gateway`] owns a boxed predictor and isolates inference failures:
//!   exactly one attempt per request, every failure surfaced as a
//!   [`PredictionError`] with a human-readable message, never a panic.
//!
//! # Example
//!
//! ```no_run
//! use hargalens_features::{FurnishingLevel, PlaceholderFields, RawInput, build_vector};
//! use hargalens_model::{Gateway, LinearModel};
//!
//! # fn main() -> anyhow::Result<()> {
//! let model = LinearModel::load("models/price.json")?;
//! let gateway = Gateway::new(Box::new(model));
//!
//! let input = RawInput {
//!     bedrooms: 3,
//!     bathrooms: 2,
//!     land_size_m2: 100,
//!     building_size_m2: 80,
//!     carports: 1,
//!     floors: 1,
//!     electricity_va: 2200,
//!     furnishing: FurnishingLevel::SemiFurnished,
//!     year_built: 2020,
//! };
//! let vector = build_vector(&input, 2026, &PlaceholderFields::default())?;
//! let estimate = gateway.estimate(&vector)?;
//! println!("Rp {}", estimate.rupiah());
//! # Ok(())
//! # }
//! ```

pub use self::{
    artifact::LinearModel,
    gateway::{Gateway, PredictionError, Predictor, PriceEstimate},
};

mod artifact;
mod gateway;
