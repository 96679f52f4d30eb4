use std::path::PathBuf;

use clap::Args;
use hargalens_aggregate::correlation_matrix;
use hargalens_dataset::loader;

use crate::util;

#[derive(Debug, Clone, Args)]
pub struct CorrelationArg {
    /// Path to the listings dataset (CSV)
    #[arg(long)]
    data: PathBuf,
    /// Columns to correlate, comma separated (default: all numeric columns)
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let table = loader::load_csv(&arg.data)?;
    let selected = if arg.columns.is_empty() {
        table
            .numeric_column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        arg.columns.clone()
    };

    match correlation_matrix(&table, &selected) {
        Ok(matrix) => {
            if arg.json {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            } else {
                let mut headers = vec![""];
                headers.extend(matrix.columns().iter().map(String::as_str));
                let rendered = matrix
                    .rows()
                    .map(|(name, coefficients)| {
                        let mut cells = vec![name.to_string()];
                        cells.extend(coefficients.iter().map(|r| {
                            r.map_or_else(String::new, |r| format!("{r:.2}"))
                        }));
                        cells
                    })
                    .collect::<Vec<_>>();
                println!("{}", util::render_table(&headers, &rendered));
            }
        }
        Err(err) => eprintln!("warning: {err}"),
    }
    Ok(())
}
