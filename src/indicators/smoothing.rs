// =============================================================================
// Smoothing filters and moving averages
// =============================================================================
//
// The signal-primitive layer: box and exponential moving averages, the
// pandas-style adjusted EWM, a cumulative-sum rolling mean, NaN stripping,
// and a Savitzky-Golay least-squares filter. Everything downstream (MACD,
// RSI, the zig-zag annotation) is built out of these.
// =============================================================================

use crate::error::{IndicatorError, Result};

/// Default span for [`expo_moving_average`].
pub const DEFAULT_EWM_SPAN: usize = 20;

/// Strip NaN entries from `values`.
pub fn remove_nan(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Simple moving average, "valid" mode: one output per full window, so the
/// result has `values.len() - w + 1` entries. Empty when `w == 0` or the
/// input is shorter than the window.
pub fn moving_average(values: &[f64], w: usize) -> Vec<f64> {
    if w == 0 || values.len() < w {
        return Vec::new();
    }
    values
        .windows(w)
        .map(|win| win.iter().sum::<f64>() / w as f64)
        .collect()
}

/// Convolution-based exponential moving average.
///
/// The kernel is `exp` evaluated over `w` evenly spaced points in [-1, 0],
/// normalized to sum 1, convolved over the series and truncated to the input
/// length. The first `w` entries are warm-up garbage and are clamped to the
/// value at index `w` (the first fully formed output).
///
/// Returns an empty vec when `w == 0` or `values.len() <= w` (no fully
/// formed output exists to clamp against).
pub fn exp_moving_average(values: &[f64], w: usize) -> Vec<f64> {
    let n = values.len();
    if w == 0 || n <= w {
        return Vec::new();
    }

    let mut weights: Vec<f64> = if w == 1 {
        vec![1.0]
    } else {
        (0..w)
            .map(|i| (-1.0 + i as f64 / (w - 1) as f64).exp())
            .collect()
    };
    let total: f64 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= total;
    }

    let mut out = vec![0.0; n];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (k, &weight) in weights.iter().enumerate().take(i + 1) {
            acc += weight * values[i - k];
        }
        *slot = acc;
    }

    let warm = out[w];
    for slot in out.iter_mut().take(w) {
        *slot = warm;
    }
    out
}

/// Pandas-style adjusted exponentially weighted mean: output `t` is the
/// weighted average of all observations so far with weights `(1-alpha)^i`
/// by age. NaN observations decay the window without contributing, and the
/// output is NaN until the first real observation arrives.
///
/// Returns an empty vec when `alpha` is outside `(0, 1]`.
pub fn ewm_mean(values: &[f64], alpha: f64) -> Vec<f64> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Vec::new();
    }

    let decay = 1.0 - alpha;
    let mut num = 0.0;
    let mut den = 0.0;
    let mut out = Vec::with_capacity(values.len());
    for &v in values {
        num *= decay;
        den *= decay;
        if !v.is_nan() {
            num += v;
            den += 1.0;
        }
        out.push(if den > 0.0 { num / den } else { f64::NAN });
    }
    out
}

/// Span-parameterized EWM (`alpha = 2 / (span + 1)`), the smoothing used by
/// pandas `ewm(span=...)`. Empty when `span == 0`.
pub fn expo_moving_average(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }
    ewm_mean(values, 2.0 / (span as f64 + 1.0))
}

/// Rolling mean over `length`-sized windows, aligned to the input: the
/// first `length - 1` outputs are NaN, the rest are window means computed
/// from a single cumulative-sum pass.
///
/// Degenerate parameters (`length == 0` or longer than the input) yield an
/// all-NaN vector of the input length.
pub fn rolling_mean(values: &[f64], length: usize) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 || n < length {
        return out;
    }

    let mut cumsum = Vec::with_capacity(n);
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        cumsum.push(acc);
    }

    for i in (length - 1)..n {
        let window_sum = if i >= length {
            cumsum[i] - cumsum[i - length]
        } else {
            cumsum[i]
        };
        out[i] = window_sum / length as f64;
    }
    out
}

/// Savitzky-Golay smoothing filter.
///
/// Fits a `polyorder`-degree polynomial to each `window_length`-sized window
/// by linear least squares and evaluates it at the window center. Edge
/// positions are filled by evaluating the polynomials fitted to the first
/// and last windows at the uncovered offsets, so the output stays aligned
/// to the input with no NaN head or tail.
///
/// # Errors
/// - `window_length` must be odd and at least 3, and no longer than the
///   input.
/// - `polyorder` must be less than `window_length`.
pub fn savgol_filter(values: &[f64], window_length: usize, polyorder: usize) -> Result<Vec<f64>> {
    if window_length < 3 {
        return Err(IndicatorError::invalid_parameter(
            "window_length",
            "must be at least 3",
        ));
    }
    if window_length % 2 == 0 {
        return Err(IndicatorError::invalid_parameter(
            "window_length",
            "must be odd",
        ));
    }
    if polyorder >= window_length {
        return Err(IndicatorError::invalid_parameter(
            "polyorder",
            "must be less than window_length",
        ));
    }
    let n = values.len();
    if n < window_length {
        return Err(IndicatorError::invalid_parameter(
            "window_length",
            format!("exceeds input length {n}"),
        ));
    }

    let w = window_length;
    let half = w / 2;
    let m = polyorder;

    // Vandermonde matrix over window offsets centered on zero.
    let mut a = vec![vec![0.0; m + 1]; w];
    for (i, row) in a.iter_mut().enumerate() {
        let x = i as f64 - half as f64;
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = x.powi(j as i32);
        }
    }

    // Normal equations: A^T * A, inverted by Gauss-Jordan elimination.
    let mut ata = vec![vec![0.0; m + 1]; m + 1];
    for i in 0..=m {
        for j in 0..=m {
            for row in &a {
                ata[i][j] += row[i] * row[j];
            }
        }
    }
    let inv = invert(ata).ok_or_else(|| {
        IndicatorError::invalid_parameter("polyorder", "normal equations are singular")
    })?;

    // Projection P = A (A^T A)^-1 A^T. Row `half` is the steady-state
    // convolution kernel; the other rows evaluate the fitted polynomial at
    // off-center offsets and handle the edges (interpolation mode).
    let mut projection = vec![vec![0.0; w]; w];
    for i in 0..w {
        for j in 0..w {
            let mut acc = 0.0;
            for r in 0..=m {
                for s in 0..=m {
                    acc += a[i][r] * inv[r][s] * a[j][s];
                }
            }
            projection[i][j] = acc;
        }
    }

    let mut out = vec![0.0; n];

    // Interior: convolve with the center kernel.
    for i in half..(n - half) {
        let mut acc = 0.0;
        for (j, &coeff) in projection[half].iter().enumerate() {
            acc += coeff * values[i - half + j];
        }
        out[i] = acc;
    }

    // Left edge: polynomial fitted to the first window, evaluated at the
    // first `half` offsets.
    for (i, slot) in out.iter_mut().enumerate().take(half) {
        let mut acc = 0.0;
        for (j, &coeff) in projection[i].iter().enumerate() {
            acc += coeff * values[j];
        }
        *slot = acc;
    }

    // Right edge: polynomial fitted to the last window.
    for i in 0..half {
        let mut acc = 0.0;
        for (j, &coeff) in projection[half + 1 + i].iter().enumerate() {
            acc += coeff * values[n - w + j];
        }
        out[n - half + i] = acc;
    }

    Ok(out)
}

/// Gauss-Jordan inversion with partial pivoting. Returns `None` when the
/// matrix is numerically singular.
fn invert(mut aug: Vec<Vec<f64>>) -> Option<Vec<Vec<f64>>> {
    let n = aug.len();
    let mut inv = vec![vec![0.0; n]; n];
    for (i, row) in inv.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for col in 0..n {
        let mut max_row = col;
        for row in col + 1..n {
            if aug[row][col].abs() > aug[max_row][col].abs() {
                max_row = row;
            }
        }
        aug.swap(col, max_row);
        inv.swap(col, max_row);

        let pivot = aug[col][col];
        if pivot.abs() < 1e-12 {
            return None;
        }

        for j in 0..n {
            aug[col][j] /= pivot;
            inv[col][j] /= pivot;
        }

        for row in 0..n {
            if row != col {
                let factor = aug[row][col];
                for j in 0..n {
                    aug[row][j] -= factor * aug[col][j];
                    inv[row][j] -= factor * inv[col][j];
                }
            }
        }
    }
    Some(inv)
}
