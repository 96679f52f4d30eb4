use std::path::PathBuf;

use clap::Args;
use hargalens_aggregate::year_built_price_trend;
use hargalens_dataset::loader;

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct TrendArg {
    /// Path to the listings dataset (CSV)
    #[arg(long)]
    data: PathBuf,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &TrendArg) -> anyhow::Result<()> {
    let table = loader::load_csv(&arg.data)?;
    match year_built_price_trend(&table) {
        Ok(points) => {
            if arg.json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                let rendered = points
                    .iter()
                    .map(|point| {
                        vec![
                            point.year.to_string(),
                            point.city.clone(),
                            util::format_mean_rupiah(point.mean_price),
                        ]
                    })
                    .collect::<Vec<_>>();
                println!(
                    "{}",
                    util::render_table(&["Year", "City", "Mean price (Rp)"], &rendered)
                );
            }
        }
        Err(err) => eprintln!("warning: {err}"),
    }
    Ok(())
}
