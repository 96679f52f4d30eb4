use crate::{PlaceholderFields, RawInput};

/// Number of fields the predictor expects.
pub const FEATURE_COUNT: usize = 15;

/// Earliest construction year the input form accepts.
pub const MIN_YEAR_BUILT: u32 = 1950;

/// Feature names in the predictor's training-time order.
///
/// [`FeatureVector::to_array`] emits values in exactly this order; model
/// artifacts record the same list so the coupling is checked at load time
/// rather than trusted positionally.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "bedrooms",
    "bathrooms",
    "land_size_m2",
    "building_size_m2",
    "carports",
    "floors",
    "electricity",
    "furnishing",
    "year_built",
    "building_age",
    "lat",
    "long",
    "maid_bedrooms",
    "maid_bathrooms",
    "garages",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum BuildVectorError {
    #[display("floors must be at least 1, got {floors}")]
    FloorsOutOfRange { floors: u32 },
    #[display("year built {year_built} outside supported range [{MIN_YEAR_BUILT}, {max}]")]
    YearBuiltOutOfRange { year_built: u32, max: u32 },
}

/// The fixed-order numeric representation consumed by the trained predictor.
///
/// Constructed fresh per prediction request by [`build_vector`], never
/// mutated afterwards. Field order mirrors [`FEATURE_NAMES`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub land_size_m2: f64,
    pub building_size_m2: f64,
    pub carports: f64,
    pub floors: f64,
    pub electricity: f64,
    pub furnishing: f64,
    pub year_built: f64,
    pub building_age: f64,
    pub lat: f64,
    pub long: f64,
    pub maid_bedrooms: f64,
    pub maid_bathrooms: f64,
    pub garages: f64,
}

impl FeatureVector {
    /// Returns the fields as a positional array in training-time order.
    #[must_use]
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.bedrooms,
            self.bathrooms,
            self.land_size_m2,
            self.building_size_m2,
            self.carports,
            self.floors,
            self.electricity,
            self.furnishing,
            self.year_built,
            self.building_age,
            self.lat,
            self.long,
            self.maid_bedrooms,
            self.maid_bathrooms,
            self.garages,
        ]
    }
}

/// Builds the predictor's feature vector from user input.
///
/// `reference_year` is the point in time building age is derived from
/// (`building_age = reference_year - year_built`); the caller passes the
/// current year. `placeholders` supplies the fields the input form does not
/// collect.
///
/// # Errors
///
/// Returns [`BuildVectorError`] if `floors` is zero or `year_built` falls
/// outside `[1950, reference_year]`. The upper bound also guarantees a
/// non-negative building age; the input boundary should already prevent
/// both, but the derived-field contract does not rely on it.
///
/// # Examples
///
/// ```
/// use hargalens_features::{FurnishingLevel, PlaceholderFields, RawInput, build_vector};
///
/// let input = RawInput {
///     bedrooms: 3,
///     bathrooms: 2,
///     land_size_m2: 100,
///     building_size_m2: 80,
///     carports: 1,
///     floors: 1,
///     electricity_va: 1300,
///     furnishing: FurnishingLevel::Furnished,
///     year_built: 2010,
/// };
/// let vector = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap();
/// assert_eq!(vector.building_age, 16.0);
/// assert_eq!(vector.furnishing, 2.0);
/// ```
pub fn build_vector(
    input: &RawInput,
    reference_year: u32,
    placeholders: &PlaceholderFields,
) -> Result<FeatureVector, BuildVectorError> {
    if input.floors == 0 {
        return Err(BuildVectorError::FloorsOutOfRange {
            floors: input.floors,
        });
    }
    if input.year_built < MIN_YEAR_BUILT || input.year_built > reference_year {
        return Err(BuildVectorError::YearBuiltOutOfRange {
            year_built: input.year_built,
            max: reference_year,
        });
    }

    let building_age = reference_year - input.year_built;
    Ok(FeatureVector {
        bedrooms: input.bedrooms.into(),
        bathrooms: input.bathrooms.into(),
        land_size_m2: input.land_size_m2.into(),
        building_size_m2: input.building_size_m2.into(),
        carports: input.carports.into(),
        floors: input.floors.into(),
        electricity: input.electricity_va.into(),
        furnishing: input.furnishing.encoded().into(),
        year_built: input.year_built.into(),
        building_age: building_age.into(),
        lat: placeholders.lat,
        long: placeholders.long,
        maid_bedrooms: placeholders.maid_bedrooms.into(),
        maid_bathrooms: placeholders.maid_bathrooms.into(),
        garages: placeholders.garages.into(),
    })
}

#[cfg(test)]
mod tests {
    use crate::FurnishingLevel;

    use super::*;

    fn sample_input() -> RawInput {
        RawInput {
            bedrooms: 3,
            bathrooms: 2,
            land_size_m2: 100,
            building_size_m2: 80,
            carports: 1,
            floors: 1,
            electricity_va: 2200,
            furnishing: FurnishingLevel::SemiFurnished,
            year_built: 2020,
        }
    }

    #[test]
    fn test_vector_has_fifteen_fields_in_documented_order() {
        let vector = build_vector(&sample_input(), 2026, &PlaceholderFields::default()).unwrap();
        let array = vector.to_array();
        assert_eq!(array.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);

        // Spot-check positions against the documented order.
        assert_eq!(array[0], 3.0); // bedrooms
        assert_eq!(array[6], 2200.0); // electricity
        assert_eq!(array[7], 1.0); // furnishing (Semi Furnished)
        assert_eq!(array[8], 2020.0); // year_built
        assert_eq!(array[9], 6.0); // building_age
        assert_eq!(array[10], -6.2); // lat
        assert_eq!(array[11], 106.8); // long
        assert_eq!(array[14], 0.0); // garages
    }

    #[test]
    fn test_building_age_is_reference_year_minus_year_built() {
        for (reference_year, year_built, expected) in
            [(2026, 2026, 0.0), (2026, 1950, 76.0), (2030, 2001, 29.0)]
        {
            let input = RawInput {
                year_built,
                ..sample_input()
            };
            let vector = build_vector(&input, reference_year, &PlaceholderFields::default())
                .unwrap();
            assert_eq!(vector.building_age, expected);
            assert!(vector.building_age >= 0.0);
        }
    }

    #[test]
    fn test_year_built_in_future_is_rejected() {
        let input = RawInput {
            year_built: 2027,
            ..sample_input()
        };
        let err = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap_err();
        assert!(matches!(err, BuildVectorError::YearBuiltOutOfRange { .. }));
    }

    #[test]
    fn test_year_built_before_1950_is_rejected() {
        let input = RawInput {
            year_built: 1949,
            ..sample_input()
        };
        assert!(build_vector(&input, 2026, &PlaceholderFields::default()).is_err());
    }

    #[test]
    fn test_zero_floors_is_rejected() {
        let input = RawInput {
            floors: 0,
            ..sample_input()
        };
        let err = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap_err();
        assert!(matches!(
            err,
            BuildVectorError::FloorsOutOfRange { floors: 0 }
        ));
    }

    #[test]
    fn test_placeholder_overrides_flow_through() {
        let placeholders = PlaceholderFields {
            lat: -6.9,
            long: 107.6,
            maid_bedrooms: 1,
            maid_bathrooms: 1,
            garages: 2,
        };
        let vector = build_vector(&sample_input(), 2026, &placeholders).unwrap();
        assert_eq!(vector.lat, -6.9);
        assert_eq!(vector.maid_bedrooms, 1.0);
        assert_eq!(vector.garages, 2.0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = sample_input();
        let a = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap();
        let b = build_vector(&input, 2026, &PlaceholderFields::default()).unwrap();
        assert_eq!(a, b);
    }
}
