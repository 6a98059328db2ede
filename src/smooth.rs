/// Centered moving average of `data`.
///
/// With `half_window = window_size / 2`, every index `i` in
/// `half_window..data.len() - half_window` holds the mean of
/// `data[i - half_window..i + half_window]`. That window is half-open, so it
/// spans `2 * half_window` elements and leans one element to the left of `i`.
/// An odd `window_size` behaves like the even size just below it.
///
/// Indices without a full window are `NaN`. Nothing here ever fails: a window
/// wider than the series gives an all-`NaN` output, and a `half_window` of zero
/// averages empty windows, which also yields `NaN` everywhere.
///
/// ```
/// let avg = tavg::moving_average(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert!(avg[0].is_nan());
/// assert_eq!(&avg[1..3], &[1.5, 2.5]);
/// assert!(avg[3].is_nan());
/// ```
pub fn moving_average(data: &[f64], window_size: usize) -> Vec<f64> {
    let mut average = vec![f64::NAN; data.len()];
    let half_window = window_size / 2;

    if half_window == 0 && !data.is_empty() {
        log::warn!("window size {window_size} averages empty windows, output is NaN");
    }

    for i in half_window..data.len().saturating_sub(half_window) {
        average[i] = mean(&data[i - half_window..i + half_window]);
    }

    average
}

// 0 / 0 on an empty window
fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}
