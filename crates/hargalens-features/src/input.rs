use serde::{Deserialize, Serialize};

use crate::FurnishingLevel;

/// The PLN electricity capacity tiers (in VA) offered by the input form.
///
/// The builder itself accepts any non-negative capacity; the form restricts
/// choices to these tiers because they are the ones the dataset contains.
pub const ELECTRICITY_OPTIONS_VA: [u32; 5] = [1300, 2200, 3500, 4400, 5500];

/// The house attributes collected from the user.
///
/// All count fields are non-negative by construction (`u32`). Range
/// invariants the types cannot express (`floors >= 1`, `year_built` within
/// `[1950, reference year]`) are enforced by [`build_vector`] and, before
/// that, by the input boundary.
///
/// [`build_vector`]: crate::build_vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub land_size_m2: u32,
    pub building_size_m2: u32,
    pub carports: u32,
    pub floors: u32,
    pub electricity_va: u32,
    pub furnishing: FurnishingLevel,
    pub year_built: u32,
}

/// Values for predictor inputs the form does not collect.
///
/// The geographic coordinates default to a fixed Jakarta reference point and
/// the remaining counts to zero. These are placeholders covering a gap in
/// the input surface, not meaningful per-listing data; callers that do have
/// real values should override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderFields {
    pub lat: f64,
    pub long: f64,
    pub maid_bedrooms: u32,
    pub maid_bathrooms: u32,
    pub garages: u32,
}

impl Default for PlaceholderFields {
    fn default() -> Self {
        Self {
            lat: -6.2,
            long: 106.8,
            maid_bedrooms: 0,
            maid_bathrooms: 0,
            garages: 0,
        }
    }
}
