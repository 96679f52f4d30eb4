//! Feature-vector construction for the house-price predictor.
//!
//! The trained predictor is order-sensitive and schema-blind: it consumes a
//! plain numeric vector and never sees field names at inference time. This
//! crate makes that implicit coupling explicit by going through a named,
//! typed, fixed-order [`FeatureVector`] instead of a positional array
//! assembled ad hoc.
//!
//! # Pipeline
//!
//! 1. Collect a [`RawInput`] from the caller (every field the input form
//!    exposes, already range-checked at the boundary).
//! 2. Call [`build_vector`] with a reference year and the
//!    [`PlaceholderFields`] for inputs the form does not collect.
//! 3. Hand [`FeatureVector::to_array`] to the predictor gateway.
//!
//! Vectors are built fresh per prediction request, never mutated, and
//! discarded after use.
//!
//! # Examples
//!
//! ```
//! use hargalens_features::{
//!     FurnishingLevel, PlaceholderFields, RawInput, build_vector, FEATURE_COUNT,
//! };
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
//! let vector = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap();
//! assert_eq!(vector.building_age, 6.0);
//! assert_eq!(vector.to_array().len(), FEATURE_COUNT);
//! ```

pub use self::{
    furnishing::{FurnishingLevel, UnknownFurnishingError},
    input::{ELECTRICITY_OPTIONS_VA, PlaceholderFields, RawInput},
    vector::{
        BuildVectorError, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, MIN_YEAR_BUILT,
        build_vector,
    },
};

mod furnishing;
mod input;
mod vector;
