use approx::assert_relative_eq;
use tavg::{moving_average, Column, Table};

const FRANCE: &str = include_str!("fixtures/france-TAVG-Trend.txt");

fn naive_mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

// Deterministic, irregular test signal.
fn signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let x = i as f64;
            10.0 + (x * 0.37).sin() * 3.0 + (x * 1.3).cos() - x * 0.01
        })
        .collect()
}

#[test]
fn length_is_preserved() {
    for len in 0..25 {
        for window in 0..30 {
            assert_eq!(moving_average(&signal(len), window).len(), len);
        }
    }
}

#[test]
fn inner_values_are_window_means() {
    for len in [1, 2, 7, 24, 61] {
        let data = signal(len);
        for window in 2..20 {
            let half = window / 2;
            let avg = moving_average(&data, window);

            for (i, value) in avg.iter().enumerate() {
                if i >= half && i + half < len {
                    assert_relative_eq!(
                        *value,
                        naive_mean(&data[i - half..i + half]),
                        max_relative = 1e-9
                    );
                } else {
                    assert!(value.is_nan(), "len {len}, window {window}, index {i}");
                }
            }
        }
    }
}

#[test]
fn too_wide_windows_give_only_nan() {
    for len in 1..12 {
        let data = signal(len);
        for window in 2..30 {
            if 2 * (window / 2) >= len {
                assert!(moving_average(&data, window).iter().all(|v| v.is_nan()));
            }
        }
    }
}

#[test]
fn smoothing_twice_widens_the_nan_edges() {
    let data = signal(40);
    let once = moving_average(&data, 4);
    let twice = moving_average(&once, 4);

    // the NaN edges grow by one half window
    assert!(twice[..4].iter().all(|v| v.is_nan()));
    assert!(twice[4..37].iter().all(|v| v.is_finite()));
    assert!(twice[37..].iter().all(|v| v.is_nan()));
}

#[test]
fn smooth_the_monthly_anomaly() {
    let table = Table::parse("france-TAVG-Trend.txt", FRANCE).unwrap();
    let anomaly = table.series(Column::MonthlyAnomaly).unwrap();

    let yearly = moving_average(&anomaly, 12);
    assert!(yearly.iter().all(|v| v.is_nan()));

    let smoothed = moving_average(&anomaly, 4);
    assert_relative_eq!(smoothed[2], (-2.103 - 1.364 + 0.551 - 0.342) / 4.0);
    assert_relative_eq!(smoothed[9], (-0.076 + 0.215 - 0.530 - 1.011) / 4.0);
    assert!(smoothed[10].is_nan());
}
