use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Error returned when a furnishing label is not one of the three recognized
/// states.
///
/// The mapping is total over its recognized labels and has no fallback: an
/// unrecognized label must fail loudly, never encode silently as
/// `Unfurnished`.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unrecognized furnishing level '{label}' (expected one of: Unfurnished, Semi Furnished, Furnished)")]
pub struct UnknownFurnishingError {
    pub label: String,
}

/// Furnishing level of a listing.
///
/// The predictor was trained with this categorical attribute encoded as a
/// fixed integer code; [`FurnishingLevel::encoded`] reproduces that encoding
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnishingLevel {
    Unfurnished,
    SemiFurnished,
    Furnished,
}

impl FurnishingLevel {
    /// The training-time integer code: Unfurnished 0, Semi Furnished 1,
    /// Furnished 2.
    #[must_use]
    pub fn encoded(self) -> u8 {
        match self {
            FurnishingLevel::Unfurnished => 0,
            FurnishingLevel::SemiFurnished => 1,
            FurnishingLevel::Furnished => 2,
        }
    }

    /// The label as it appears in the dataset and on the input form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FurnishingLevel::Unfurnished => "Unfurnished",
            FurnishingLevel::SemiFurnished => "Semi Furnished",
            FurnishingLevel::Furnished => "Furnished",
        }
    }
}

impl fmt::Display for FurnishingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnishingLevel {
    type Err = UnknownFurnishingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unfurnished" => Ok(FurnishingLevel::Unfurnished),
            "Semi Furnished" => Ok(FurnishingLevel::SemiFurnished),
            "Furnished" => Ok(FurnishingLevel::Furnished),
            other => Err(UnknownFurnishingError {
                label: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_is_fixed() {
        assert_eq!(FurnishingLevel::Unfurnished.encoded(), 0);
        assert_eq!(FurnishingLevel::SemiFurnished.encoded(), 1);
        assert_eq!(FurnishingLevel::Furnished.encoded(), 2);
    }

    #[test]
    fn test_parse_recognized_labels() {
        for level in [
            FurnishingLevel::Unfurnished,
            FurnishingLevel::SemiFurnished,
            FurnishingLevel::Furnished,
        ] {
            assert_eq!(level.label().parse::<FurnishingLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_label_fails_loudly() {
        let err = "Partially Furnished".parse::<FurnishingLevel>().unwrap_err();
        assert_eq!(err.label, "Partially Furnished");

        // Near-misses must not fall back to a default either.
        assert!("unfurnished".parse::<FurnishingLevel>().is_err());
        assert!("semi furnished".parse::<FurnishingLevel>().is_err());
        assert!("".parse::<FurnishingLevel>().is_err());
    }
}
