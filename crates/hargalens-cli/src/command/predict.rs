use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::Args;
use hargalens_features::{
    ELECTRICITY_OPTIONS_VA, FurnishingLevel, PlaceholderFields, RawInput, build_vector,
};
use hargalens_model::{Gateway, LinearModel};

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct PredictArg {
    /// Path to the trained model artifact (JSON)
    #[arg(long)]
    model: PathBuf,
    /// Number of bedrooms
    #[arg(long, default_value_t = 3)]
    bedrooms: u32,
    /// Number of bathrooms
    #[arg(long, default_value_t = 2)]
    bathrooms: u32,
    /// Land size in square meters
    #[arg(long, default_value_t = 100)]
    land_size: u32,
    /// Building size in square meters
    #[arg(long, default_value_t = 80)]
    building_size: u32,
    /// Number of carports
    #[arg(long, default_value_t = 1)]
    carports: u32,
    /// Number of floors (at least 1)
    #[arg(long, default_value_t = 1)]
    floors: u32,
    /// Electricity capacity in VA (one of the PLN tiers)
    #[arg(long, default_value_t = 1300, value_parser = parse_electricity)]
    electricity: u32,
    /// Furnishing level: Unfurnished, "Semi Furnished", or Furnished
    #[arg(long, default_value = "Furnished", value_parser = parse_furnishing)]
    furnishing: FurnishingLevel,
    /// Construction year (1950 up to the current year)
    #[arg(long, default_value_t = 2020)]
    year_built: u32,
    /// Override the placeholder latitude
    #[arg(long)]
    lat: Option<f64>,
    /// Override the placeholder longitude
    #[arg(long)]
    long: Option<f64>,
    /// Override the placeholder maid bedroom count
    #[arg(long)]
    maid_bedrooms: Option<u32>,
    /// Override the placeholder maid bathroom count
    #[arg(long)]
    maid_bathrooms: Option<u32>,
    /// Override the placeholder garage count
    #[arg(long)]
    garages: Option<u32>,
    /// Emit the estimate as JSON
    #[arg(long)]
    json: bool,
}

fn parse_electricity(s: &str) -> Result<u32, String> {
    let va = s.parse::<u32>().map_err(|e| e.to_string())?;
    if ELECTRICITY_OPTIONS_VA.contains(&va) {
        Ok(va)
    } else {
        Err(format!("must be one of {ELECTRICITY_OPTIONS_VA:?} (VA)"))
    }
}

fn parse_furnishing(s: &str) -> Result<FurnishingLevel, String> {
    s.parse::<FurnishingLevel>().map_err(|e| e.to_string())
}

pub fn run(arg: &PredictArg) -> anyhow::Result<()> {
    let reference_year =
        u32::try_from(Utc::now().year()).context("system clock is set before year 0")?;

    let mut placeholders = PlaceholderFields::default();
    if let Some(lat) = arg.lat {
        placeholders.lat = lat;
    }
    if let Some(long) = arg.long {
        placeholders.long = long;
    }
    if let Some(maid_bedrooms) = arg.maid_bedrooms {
        placeholders.maid_bedrooms = maid_bedrooms;
    }
    if let Some(maid_bathrooms) = arg.maid_bathrooms {
        placeholders.maid_bathrooms = maid_bathrooms;
    }
    if let Some(garages) = arg.garages {
        placeholders.garages = garages;
    }

    let input = RawInput {
        bedrooms: arg.bedrooms,
        bathrooms: arg.bathrooms,
        land_size_m2: arg.land_size,
        building_size_m2: arg.building_size,
        carports: arg.carports,
        floors: arg.floors,
        electricity_va: arg.electricity,
        furnishing: arg.furnishing,
        year_built: arg.year_built,
    };
    let vector = build_vector(&input, reference_year, &placeholders)?;

    let model = LinearModel::load(&arg.model)?;
    let gateway = Gateway::new(Box::new(model));

    // One inference attempt; a failure ends this request with a non-zero
    // exit so scripted callers can tell it apart from an estimate.
    let estimate = gateway.estimate(&vector).context("prediction failed")?;
    if arg.json {
        println!(
            "{}",
            serde_json::json!({ "estimate_rp": estimate.rupiah() })
        );
    } else {
        println!("Rp {}", util::format_rupiah(estimate.rupiah()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use hargalens_features::FEATURE_NAMES;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        arg: PredictArg,
    }

    fn parse(args: &[&str]) -> PredictArg {
        Harness::try_parse_from(args.iter().copied()).unwrap().arg
    }

    #[test]
    fn test_defaults_match_the_input_form() {
        let arg = parse(&["predict", "--model", "m.json"]);
        assert_eq!(arg.bedrooms, 3);
        assert_eq!(arg.bathrooms, 2);
        assert_eq!(arg.land_size, 100);
        assert_eq!(arg.building_size, 80);
        assert_eq!(arg.carports, 1);
        assert_eq!(arg.floors, 1);
        assert_eq!(arg.electricity, 1300);
        assert_eq!(arg.furnishing, FurnishingLevel::Furnished);
        assert_eq!(arg.year_built, 2020);
    }

    #[test]
    fn test_unrecognized_electricity_tier_is_rejected() {
        let result = Harness::try_parse_from(["predict", "--model", "m.json", "--electricity", "900"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_inference_exits_nonzero() {
        let path = std::env::temp_dir().join(format!(
            "hargalens-predict-overflow-{}-{:?}.json",
            std::process::id(),
            std::thread::current().id(),
        ));
        // Coefficients large enough that the weighted sum overflows to
        // infinity, which the gateway reports as an error.
        let artifact = serde_json::json!({
            "name": "overflow",
            "trained_at": "2026-01-01T00:00:00Z",
            "feature_names": FEATURE_NAMES,
            "intercept": 0.0,
            "coefficients": vec![f64::MAX; 15],
        });
        fs::write(&path, artifact.to_string()).unwrap();

        let arg = parse(&["predict", "--model", path.to_str().unwrap()]);
        let result = run(&arg);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("prediction failed"));
    }
}
