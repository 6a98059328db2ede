use miette::IntoDiagnostic;
use plotters::prelude::*;
use tavg::{moving_average, Column, Table};

fn main() -> miette::Result<()> {
    let input = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("Missing filename"))?;
    println!("opening {input}");
    let output = format!("{input}.png");
    let text = std::fs::read_to_string(&input).into_diagnostic()?;

    let table = Table::parse(&input, &text)?;
    let dates = table.date_fractions().into_diagnostic()?;
    let anomaly = table
        .series(Column::MonthlyAnomaly)
        .ok_or_else(|| miette::miette!("{input} has only {} columns", table.width()))?;
    let smoothed = moving_average(&anomaly, 120);

    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        miette::bail!("{input} is empty");
    };
    let known = || anomaly.iter().copied().filter(|v| v.is_finite());
    let low = known().fold(f64::INFINITY, f64::min);
    let high = known().fold(f64::NEG_INFINITY, f64::max);

    let root = BitMapBackend::new(&output, (1920, 1080)).into_drawing_area();
    root.fill(&WHITE).into_diagnostic()?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Temperature anomaly, {first:.0} to {last:.0}"),
            ("sans-serif", 60).into_font(),
        )
        .margin(5)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(first..last, low..high)
        .into_diagnostic()?;

    chart.configure_mesh().draw().into_diagnostic()?;

    // plotters draws NaN as garbage, keep finite points only
    let points = |values: &[f64]| -> Vec<(f64, f64)> {
        dates
            .iter()
            .copied()
            .zip(values.iter().copied())
            .filter(|(_, v)| v.is_finite())
            .collect()
    };

    chart
        .draw_series(LineSeries::new(points(&anomaly), BLUE.mix(0.4)))
        .into_diagnostic()?
        .label("Monthly anomaly")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(points(&smoothed), RED.stroke_width(3)))
        .into_diagnostic()?
        .label("Ten year moving average")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .into_diagnostic()?;

    root.present().into_diagnostic()?;
    println!("wrote {output}");

    Ok(())
}
