use miette::IntoDiagnostic;
use tavg::{moving_average, Column, Table};

fn main() -> miette::Result<()> {
    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("Missing filename"))?;
    println!("opening {file}");
    let input = std::fs::read_to_string(&file).into_diagnostic()?;

    let table = Table::parse(&file, &input)?;
    let anomaly = table
        .series(Column::MonthlyAnomaly)
        .ok_or_else(|| miette::miette!("{file} has only {} columns", table.width()))?;

    let known: Vec<f64> = anomaly.iter().copied().filter(|v| !v.is_nan()).collect();
    println!(
        "{} months, mean anomaly {:.3}",
        table.len(),
        known.iter().sum::<f64>() / known.len() as f64
    );

    let decade = moving_average(&anomaly, 120);
    if let Some(last) = decade.iter().rev().find(|v| !v.is_nan()) {
        println!("Latest ten year average: {last:.3}");
    }

    Ok(())
}
