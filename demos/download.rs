use std::path::PathBuf;

use miette::IntoDiagnostic;
use tavg::{moving_average, Column};

fn main() -> miette::Result<()> {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let region = args.next().ok_or_else(|| miette::miette!("Missing region name"))?;
    let output = args.next().map(PathBuf::from);
    let window = match args.next() {
        Some(window) => window.parse().into_diagnostic()?,
        None => 120,
    };

    let table = tavg::download(&region, output.as_deref())?;
    let dates = table.date_fractions().into_diagnostic()?;
    let anomaly = table
        .series(Column::MonthlyAnomaly)
        .ok_or_else(|| miette::miette!("No monthly anomaly in the {region} trend"))?;
    let smoothed = moving_average(&anomaly, window);

    for ((date, anomaly), smoothed) in dates.iter().zip(&anomaly).zip(&smoothed) {
        println!("{date:9.3} {anomaly:7.3} {smoothed:7.3}");
    }

    Ok(())
}
