use std::path::PathBuf;

use clap::Args;
use hargalens_aggregate::top_city_mean_price;
use hargalens_dataset::loader;

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct TopCitiesArg {
    /// Path to the listings dataset (CSV)
    #[arg(long)]
    data: PathBuf,
    /// How many cities to show
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
    top: u8,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &TopCitiesArg) -> anyhow::Result<()> {
    let table = loader::load_csv(&arg.data)?;
    match top_city_mean_price(&table, usize::from(arg.top)) {
        Ok(rows) => {
            if arg.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let rendered = rows
                    .iter()
                    .map(|row| {
                        vec![row.city.clone(), util::format_mean_rupiah(row.mean_price)]
                    })
                    .collect::<Vec<_>>();
                println!("{}", util::render_table(&["City", "Mean price (Rp)"], &rendered));
            }
        }
        Err(err) => eprintln!("warning: {err}"),
    }
    Ok(())
}
