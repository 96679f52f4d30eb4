use std::path::PathBuf;

use clap::Args;
use hargalens_aggregate::numeric_summaries;
use hargalens_dataset::loader;

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct SummaryArg {
    /// Path to the listings dataset (CSV)
    #[arg(long)]
    data: PathBuf,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let table = loader::load_csv(&arg.data)?;
    let rows = numeric_summaries(&table);
    if arg.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let rendered = rows
            .iter()
            .map(|row| {
                vec![
                    row.column.clone(),
                    row.count.to_string(),
                    format!("{:.1}", row.min),
                    format!("{:.1}", row.max),
                    format!("{:.1}", row.mean),
                    format!("{:.1}", row.median),
                    format!("{:.1}", row.std_dev),
                ]
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            util::render_table(
                &["Column", "Count", "Min", "Max", "Mean", "Median", "Std dev"],
                &rendered,
            )
        );
    }
    Ok(())
}
