use std::path::PathBuf;

use clap::Args;
use hargalens_aggregate::listing_counts;
use hargalens_dataset::loader;

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct CountsArg {
    /// Path to the listings dataset (CSV)
    #[arg(long)]
    data: PathBuf,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &CountsArg) -> anyhow::Result<()> {
    let table = loader::load_csv(&arg.data)?;
    match listing_counts(&table) {
        Ok(rows) => {
            if arg.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let rendered = rows
                    .iter()
                    .map(|row| vec![row.city.clone(), row.count.to_string()])
                    .collect::<Vec<_>>();
                println!("{}", util::render_table(&["City", "Listings"], &rendered));
            }
        }
        Err(err) => eprintln!("warning: {err}"),
    }
    Ok(())
}
