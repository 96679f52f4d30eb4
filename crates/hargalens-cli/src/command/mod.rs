use clap::{Parser, Subcommand};

use self::{
    correlation::CorrelationArg, counts::CountsArg, predict::PredictArg, summary::SummaryArg,
    top_cities::TopCitiesArg, trend::TrendArg,
};

mod correlation;
mod counts;
mod predict;
mod summary;
mod top_cities;
mod trend;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Estimate a house price from listing attributes
    Predict(#[clap(flatten)] PredictArg),
    /// Top cities by mean listing price
    TopCities(#[clap(flatten)] TopCitiesArg),
    /// Mean price by construction year and city
    Trend(#[clap(flatten)] TrendArg),
    /// Listing counts per city
    Counts(#[clap(flatten)] CountsArg),
    /// Descriptive statistics per numeric column
    Summary(#[clap(flatten)] SummaryArg),
    /// Correlation matrix over numeric columns
    Correlation(#[clap(flatten)] CorrelationArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Predict(arg) => predict::run(&arg)?,
        Mode::TopCities(arg) => top_cities::run(&arg)?,
        Mode::Trend(arg) => trend::run(&arg)?,
        Mode::Counts(arg) => counts::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
    }
    Ok(())
}
